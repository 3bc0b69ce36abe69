//! Pieces module - tetromino shapes and the falling-piece value type
//!
//! Each (kind, rotation) pair maps to a fixed set of 4 cell offsets from the
//! piece origin. `Piece` is a plain Copy value; movement and rotation return
//! new values and never consult the board - validity is the engine's job.

use crate::core::Board;
use crate::types::{PieceKind, Rotation, Spin};

/// Offset of a single cell relative to piece origin
pub type CellOffset = (i8, i8);

/// Shape of a piece - 4 cell offsets from piece origin
pub type PieceShape = [CellOffset; 4];

/// Spawn position for new pieces (x, y)
pub const SPAWN_POSITION: (i8, i8) = (3, 0);

/// Get the shape (cell offsets) for a piece kind and rotation
pub fn get_shape(kind: PieceKind, rotation: Rotation) -> PieceShape {
    match kind {
        PieceKind::I => i_shape(rotation),
        PieceKind::O => o_shape(rotation),
        PieceKind::T => t_shape(rotation),
        PieceKind::S => s_shape(rotation),
        PieceKind::Z => z_shape(rotation),
        PieceKind::J => j_shape(rotation),
        PieceKind::L => l_shape(rotation),
    }
}

fn i_shape(rotation: Rotation) -> PieceShape {
    match rotation {
        // N: horizontal, centered on row 1
        Rotation::North => [(0, 1), (1, 1), (2, 1), (3, 1)],
        // E: vertical, right-aligned
        Rotation::East => [(2, 0), (2, 1), (2, 2), (2, 3)],
        // S: horizontal, centered on row 2
        Rotation::South => [(0, 2), (1, 2), (2, 2), (3, 2)],
        // W: vertical, left-aligned
        Rotation::West => [(1, 0), (1, 1), (1, 2), (1, 3)],
    }
}

/// O piece is rotation-invariant
fn o_shape(_rotation: Rotation) -> PieceShape {
    [(1, 0), (2, 0), (1, 1), (2, 1)]
}

fn t_shape(rotation: Rotation) -> PieceShape {
    match rotation {
        Rotation::North => [(1, 0), (0, 1), (1, 1), (2, 1)],
        Rotation::East => [(1, 0), (1, 1), (2, 1), (1, 2)],
        Rotation::South => [(0, 1), (1, 1), (2, 1), (1, 2)],
        Rotation::West => [(1, 0), (0, 1), (1, 1), (1, 2)],
    }
}

fn s_shape(rotation: Rotation) -> PieceShape {
    match rotation {
        Rotation::North => [(1, 0), (2, 0), (0, 1), (1, 1)],
        Rotation::East => [(1, 0), (1, 1), (2, 1), (2, 2)],
        Rotation::South => [(1, 1), (2, 1), (0, 2), (1, 2)],
        Rotation::West => [(0, 0), (0, 1), (1, 1), (1, 2)],
    }
}

fn z_shape(rotation: Rotation) -> PieceShape {
    match rotation {
        Rotation::North => [(0, 0), (1, 0), (1, 1), (2, 1)],
        Rotation::East => [(2, 0), (1, 1), (2, 1), (1, 2)],
        Rotation::South => [(0, 1), (1, 1), (1, 2), (2, 2)],
        Rotation::West => [(1, 0), (0, 1), (1, 1), (0, 2)],
    }
}

fn j_shape(rotation: Rotation) -> PieceShape {
    match rotation {
        Rotation::North => [(0, 0), (0, 1), (1, 1), (2, 1)],
        Rotation::East => [(1, 0), (2, 0), (1, 1), (1, 2)],
        Rotation::South => [(0, 1), (1, 1), (2, 1), (2, 2)],
        Rotation::West => [(1, 0), (1, 1), (0, 2), (1, 2)],
    }
}

fn l_shape(rotation: Rotation) -> PieceShape {
    match rotation {
        Rotation::North => [(2, 0), (0, 1), (1, 1), (2, 1)],
        Rotation::East => [(1, 0), (1, 1), (1, 2), (2, 2)],
        Rotation::South => [(0, 1), (1, 1), (2, 1), (0, 2)],
        Rotation::West => [(0, 0), (1, 0), (1, 1), (1, 2)],
    }
}

/// Active falling piece: kind, rotation state, and anchor position.
///
/// The anchor y may be negative while the piece is still entering the board
/// from the spawn region above row 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub x: i8,
    pub y: i8,
}

impl Piece {
    /// Create a new piece at spawn position, in spawn orientation
    pub fn new(kind: PieceKind) -> Self {
        Self {
            kind,
            rotation: Rotation::North,
            x: SPAWN_POSITION.0,
            y: SPAWN_POSITION.1,
        }
    }

    /// Get the shape (cell offsets) for the current rotation
    pub fn shape(&self) -> PieceShape {
        get_shape(self.kind, self.rotation)
    }

    /// The 4 absolute grid coordinates occupied by this piece
    pub fn occupied_cells(&self) -> [(i8, i8); 4] {
        let mut cells = self.shape();
        for (dx, dy) in &mut cells {
            *dx += self.x;
            *dy += self.y;
        }
        cells
    }

    /// A copy of this piece with the rotation advanced one step
    pub fn rotated(&self, direction: Spin) -> Self {
        Self {
            rotation: self.rotation.spun(direction),
            ..*self
        }
    }

    /// A copy of this piece shifted by the given offset
    pub fn translated(&self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// Validity predicate: every occupied cell in horizontal bounds, above
    /// the floor, and not overlapping locked material. Cells above row 0
    /// are open (spawn region).
    pub fn fits(&self, board: &Board) -> bool {
        self.occupied_cells()
            .iter()
            .all(|&(x, y)| board.is_free(x, y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_shape_has_four_cells() {
        for kind in PieceKind::ALL {
            for rotation in [
                Rotation::North,
                Rotation::East,
                Rotation::South,
                Rotation::West,
            ] {
                let shape = get_shape(kind, rotation);
                assert_eq!(shape.len(), 4);

                // Offsets must be distinct
                for i in 0..4 {
                    for j in (i + 1)..4 {
                        assert_ne!(shape[i], shape[j], "{:?} {:?}", kind, rotation);
                    }
                }
            }
        }
    }

    #[test]
    fn test_rotation_is_cyclic_of_order_four() {
        for kind in PieceKind::ALL {
            let piece = Piece::new(kind);
            let back = piece
                .rotated(Spin::Cw)
                .rotated(Spin::Cw)
                .rotated(Spin::Cw)
                .rotated(Spin::Cw);
            assert_eq!(piece, back);
            assert_eq!(piece.occupied_cells(), back.occupied_cells());
        }
    }

    #[test]
    fn test_ccw_inverts_cw() {
        let piece = Piece::new(PieceKind::T);
        assert_eq!(piece.rotated(Spin::Cw).rotated(Spin::Ccw), piece);
    }

    #[test]
    fn test_translated_is_pure() {
        let piece = Piece::new(PieceKind::J);
        let moved = piece.translated(2, 5);
        assert_eq!(moved.x, piece.x + 2);
        assert_eq!(moved.y, piece.y + 5);
        // Original untouched
        assert_eq!(piece.x, SPAWN_POSITION.0);
    }

    #[test]
    fn test_occupied_cells_follow_anchor() {
        let piece = Piece::new(PieceKind::O).translated(1, 3);
        let cells = piece.occupied_cells();
        assert!(cells.contains(&(5, 3)));
        assert!(cells.contains(&(6, 3)));
        assert!(cells.contains(&(5, 4)));
        assert!(cells.contains(&(6, 4)));
    }
}
