//! Piece tests - shape tables and the pure piece value type

use blockfall::core::{get_shape, Board, Piece};
use blockfall::types::{PieceKind, Rotation, Spin, BOARD_WIDTH};

const ALL_ROTATIONS: [Rotation; 4] = [
    Rotation::North,
    Rotation::East,
    Rotation::South,
    Rotation::West,
];

#[test]
fn test_all_shapes_fit_a_4x4_box() {
    for kind in PieceKind::ALL {
        for rotation in ALL_ROTATIONS {
            for (dx, dy) in get_shape(kind, rotation) {
                assert!((0..4).contains(&dx), "{:?} {:?} dx {}", kind, rotation, dx);
                assert!((0..4).contains(&dy), "{:?} {:?} dy {}", kind, rotation, dy);
            }
        }
    }
}

#[test]
fn test_o_piece_is_rotation_invariant() {
    let base = get_shape(PieceKind::O, Rotation::North);
    for rotation in ALL_ROTATIONS {
        assert_eq!(get_shape(PieceKind::O, rotation), base);
    }
}

#[test]
fn test_spawn_piece_fits_an_empty_board() {
    let board = Board::new();
    for kind in PieceKind::ALL {
        let piece = Piece::new(kind);
        assert!(piece.fits(&board), "{:?} must fit at spawn", kind);

        // And no spawn cell is below the top two rows
        for (_, y) in piece.occupied_cells() {
            assert!(y <= 2);
        }
    }
}

#[test]
fn test_four_rotations_return_to_start() {
    for kind in PieceKind::ALL {
        for direction in [Spin::Cw, Spin::Ccw] {
            let mut piece = Piece::new(kind).translated(2, 6);
            let original = piece;
            for _ in 0..4 {
                piece = piece.rotated(direction);
            }
            assert_eq!(piece, original);
        }
    }
}

#[test]
fn test_rotated_and_translated_do_not_mutate() {
    let piece = Piece::new(PieceKind::S);
    let _ = piece.rotated(Spin::Cw);
    let _ = piece.translated(3, 3);
    assert_eq!(piece, Piece::new(PieceKind::S));
}

#[test]
fn test_fits_rejects_walls_floor_and_overlap() {
    let mut board = Board::new();
    let piece = Piece::new(PieceKind::O);

    // Way past the left wall
    assert!(!piece.translated(-10, 0).fits(&board));
    // Past the right wall
    assert!(!piece.translated(BOARD_WIDTH as i8, 0).fits(&board));
    // Through the floor
    assert!(!piece.translated(0, 19).fits(&board));

    // Overlap with locked material
    let resting = piece.translated(0, 18);
    assert!(resting.fits(&board));
    board.lock_piece(&resting);
    assert!(!resting.fits(&board));
}

#[test]
fn test_fits_allows_spawn_region_above_board() {
    let board = Board::new();
    // Vertical I poking above row 0
    let piece = Piece {
        kind: PieceKind::I,
        rotation: Rotation::East,
        x: 3,
        y: -2,
    };
    assert!(piece.fits(&board));
}
