//! Core types shared across the engine
//! This module contains pure data types and the tunable rule constants

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Board dimensions
pub const BOARD_WIDTH: u8 = 10;
pub const BOARD_HEIGHT: u8 = 20;

/// Points awarded per simultaneous line clear, indexed by clear size and
/// multiplied by the current level. A tetris (4 lines) pays double the
/// per-line rate of a single.
pub const LINE_SCORES: [u32; 5] = [0, 100, 300, 500, 800];

/// Lines required to advance one level (level = 1 + lines / LINES_PER_LEVEL)
pub const LINES_PER_LEVEL: u32 = 10;

/// Gravity intervals by level (milliseconds), indexed by level - 1
pub const FALL_INTERVALS: [u32; 9] = [1000, 900, 800, 700, 600, 500, 400, 300, 200];

/// Gravity never drops below this interval, no matter the level
pub const FALL_INTERVAL_FLOOR_MS: u32 = 100;

/// Tetromino piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All seven kinds, in canonical order (one bag's worth)
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::O => "o",
            PieceKind::T => "t",
            PieceKind::S => "s",
            PieceKind::Z => "z",
            PieceKind::J => "j",
            PieceKind::L => "l",
        }
    }
}

/// Rotation direction (+1 or -1 step through the 4-cycle)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Spin {
    Cw,
    Ccw,
}

/// Rotation states (North = spawn orientation)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Rotation {
    North,
    East,
    South,
    West,
}

impl Rotation {
    /// Advance one step in the given direction
    pub fn spun(&self, direction: Spin) -> Self {
        match direction {
            Spin::Cw => match self {
                Rotation::North => Rotation::East,
                Rotation::East => Rotation::South,
                Rotation::South => Rotation::West,
                Rotation::West => Rotation::North,
            },
            Spin::Ccw => match self {
                Rotation::North => Rotation::West,
                Rotation::West => Rotation::South,
                Rotation::South => Rotation::East,
                Rotation::East => Rotation::North,
            },
        }
    }
}

/// Engine run state. GameOver is terminal until `reset`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RunState {
    Playing,
    Paused,
    GameOver,
}

/// Cell on the board (None = empty, Some = filled with piece kind)
pub type Cell = Option<PieceKind>;
