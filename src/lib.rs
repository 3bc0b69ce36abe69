//! Blockfall - a deterministic falling-block puzzle engine core
//!
//! This crate is the simulation behind a falling-block game: the 10x20
//! board, the seven tetrominoes, 7-bag piece generation, gravity timing,
//! line clearing, and scoring. It deliberately contains **no** rendering,
//! key mapping, or scheduling - a host polls read-only snapshots and
//! dispatches commands at its own cadence.
//!
//! # Module Structure
//!
//! - [`core::board`]: 10x20 grid with collision queries and line clearing
//! - [`core::pieces`]: tetromino shape tables and the `Piece` value type
//! - [`core::rng`]: seedable 7-bag piece generation
//! - [`core::scoring`]: score, level, and the gravity speed curve
//! - [`core::engine`]: the `GameEngine` state machine and command surface
//! - [`core::snapshot`]: copy-out state for renderers
//!
//! # Timing
//!
//! Gravity is pull-based. There is no internal clock: the host calls
//! [`core::GameEngine::update`] with a monotonic millisecond timestamp
//! (typically once per display refresh), and the engine decides when the
//! accumulated time forces a drop. Feeding synthetic timestamps makes every
//! timing behavior testable without wall-clock waits.
//!
//! # Example
//!
//! ```
//! use blockfall::core::GameEngine;
//! use blockfall::types::RunState;
//!
//! let mut game = GameEngine::new(12345);
//!
//! // Host-translated input commands
//! game.move_right();
//! game.rotate();
//! game.hard_drop();
//!
//! // Pull-based gravity via host timestamps
//! game.update(0);
//! game.update(16);
//!
//! // Renderers read copy-out snapshots
//! let view = game.snapshot();
//! assert_eq!(view.state, RunState::Playing);
//! ```

pub mod core;
pub mod types;
