//! Copy-out snapshot types for the rendering boundary.
//!
//! Everything here is plain owned data: a renderer can hold a snapshot for
//! as long as it likes without the engine's next mutation invalidating it.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::core::pieces::Piece;
use crate::types::{Cell, PieceKind, Rotation, RunState, BOARD_HEIGHT, BOARD_WIDTH};

/// The active piece as seen by a renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PieceSnapshot {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub x: i8,
    pub y: i8,
    /// Absolute grid coordinates of the 4 occupied cells
    pub cells: [(i8, i8); 4],
}

impl From<Piece> for PieceSnapshot {
    fn from(piece: Piece) -> Self {
        Self {
            kind: piece.kind,
            rotation: piece.rotation,
            x: piece.x,
            y: piece.y,
            cells: piece.occupied_cells(),
        }
    }
}

/// Full read-only view of the game, taken at one instant
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GameSnapshot {
    /// Board grid, row-major, `board[y][x]`
    pub board: [[Cell; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    pub current: Option<PieceSnapshot>,
    pub next: PieceKind,
    pub score: u32,
    pub level: u32,
    pub lines_cleared: u32,
    pub state: RunState,
}

impl GameSnapshot {
    pub fn is_game_over(&self) -> bool {
        self.state == RunState::GameOver
    }
}
