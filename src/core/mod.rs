//! Core engine - pure game logic with no I/O dependencies
//!
//! Everything in here is deterministic and synchronous: the same seed and
//! the same command/timestamp sequence reproduce the same game.

pub mod board;
pub mod engine;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod snapshot;

// Re-export commonly used types
pub use board::Board;
pub use engine::{GameEngine, KickPolicy};
pub use pieces::{get_shape, Piece};
pub use rng::{PieceBag, SimpleRng};
pub use scoring::{fall_interval_ms, Scoring};
pub use snapshot::{GameSnapshot, PieceSnapshot};
