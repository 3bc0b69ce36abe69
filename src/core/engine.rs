//! Engine module - the game state machine and command surface
//!
//! Owns the board, the active and queued pieces, and scoring, and advances
//! them through discrete commands and pull-based gravity: time only moves
//! when the host calls [`GameEngine::update`] with a monotonic timestamp,
//! which keeps the whole simulation deterministic under synthetic clocks.
//!
//! Locking, line clearing, scoring, and respawn happen as one atomic step -
//! there is no observable state where a row is full but not yet cleared, or
//! a piece is locked but its successor not yet spawned.

use arrayvec::ArrayVec;

use crate::core::pieces::Piece;
use crate::core::scoring::fall_interval_ms;
use crate::core::snapshot::GameSnapshot;
use crate::core::{Board, PieceBag, Scoring};
use crate::types::{PieceKind, RunState, Spin};

/// Upper bound on kick candidates a policy may carry
pub const KICK_CANDIDATE_MAX: usize = 8;

/// Ordered list of (dx, dy) offsets the engine tries when committing a
/// rotation. The first offset that yields a valid placement wins; if none
/// does, the rotation is rejected and the piece is left untouched.
#[derive(Debug, Clone)]
pub struct KickPolicy {
    offsets: ArrayVec<(i8, i8), KICK_CANDIDATE_MAX>,
}

impl KickPolicy {
    /// Rotate-or-reject: only the unkicked placement is tried
    pub fn none() -> Self {
        Self::from_offsets(&[(0, 0)])
    }

    /// Horizontal nudges of 1 then 2 cells to either side, tried after the
    /// unkicked placement. Enough to rotate an I piece out of a wall.
    pub fn nudge() -> Self {
        Self::from_offsets(&[(0, 0), (-1, 0), (1, 0), (-2, 0), (2, 0)])
    }

    /// Build a policy from an explicit ordered candidate list
    pub fn from_offsets(offsets: &[(i8, i8)]) -> Self {
        assert!(
            !offsets.is_empty() && offsets.len() <= KICK_CANDIDATE_MAX,
            "kick policy needs 1..={} offsets",
            KICK_CANDIDATE_MAX
        );
        Self {
            offsets: offsets.iter().copied().collect(),
        }
    }

    pub fn offsets(&self) -> &[(i8, i8)] {
        &self.offsets
    }
}

impl Default for KickPolicy {
    fn default() -> Self {
        Self::none()
    }
}

/// The falling-block engine: single writer, mutated only by the command
/// methods and `update`, read through copy-out accessors and snapshots.
#[derive(Debug, Clone)]
pub struct GameEngine {
    board: Board,
    current: Option<Piece>,
    next: PieceKind,
    bag: PieceBag,
    scoring: Scoring,
    state: RunState,
    kicks: KickPolicy,
    /// Milliseconds accumulated since the last forced gravity drop
    fall_timer_ms: u32,
    /// Timestamp of the previous `update` call, once one has arrived
    last_update_ms: Option<u64>,
}

impl GameEngine {
    /// Create a new game with the given RNG seed, already Playing with a
    /// spawned current piece and a primed lookahead.
    pub fn new(seed: u32) -> Self {
        let mut bag = PieceBag::new(seed);
        let first = bag.take_next();
        let next = bag.peek_next();

        let engine = Self {
            board: Board::new(),
            current: Some(Piece::new(first)),
            next,
            bag,
            scoring: Scoring::new(),
            state: RunState::Playing,
            kicks: KickPolicy::default(),
            fall_timer_ms: 0,
            last_update_ms: None,
        };
        debug_assert!(engine.current.unwrap().fits(&engine.board));
        engine
    }

    /// Replace the rotation kick policy (builder style)
    pub fn with_kick_policy(mut self, kicks: KickPolicy) -> Self {
        self.kicks = kicks;
        self
    }

    // --- read boundary -----------------------------------------------------

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The active piece. Present in every observable state; at GameOver it
    /// is the piece whose spawn overlapped the stack.
    pub fn current_piece(&self) -> Option<Piece> {
        self.current
    }

    /// Absolute cells of the active piece, for renderers
    pub fn current_cells(&self) -> Option<[(i8, i8); 4]> {
        self.current.map(|piece| piece.occupied_cells())
    }

    /// The one-piece lookahead: identity of the piece after the current one
    pub fn next_kind(&self) -> PieceKind {
        self.next
    }

    pub fn scoring(&self) -> Scoring {
        self.scoring
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn is_game_over(&self) -> bool {
        self.state == RunState::GameOver
    }

    /// Take a full copy-out snapshot for the rendering boundary
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board: self.board.to_grid(),
            current: self.current.map(Into::into),
            next: self.next,
            score: self.scoring.score(),
            level: self.scoring.level(),
            lines_cleared: self.scoring.lines_cleared(),
            state: self.state,
        }
    }

    // --- command surface ---------------------------------------------------
    //
    // Every command is a silent no-op unless Playing (except `pause`, which
    // also toggles out of Paused, and `reset`, which works from any state).
    // Collision rejections are silent: hitting a wall is gameplay, not an
    // error.

    pub fn move_left(&mut self) {
        if self.state == RunState::Playing {
            self.try_move(-1, 0);
        }
    }

    pub fn move_right(&mut self) {
        if self.state == RunState::Playing {
            self.try_move(1, 0);
        }
    }

    /// Rotate the current piece clockwise, trying each kick-policy offset in
    /// order; rejected outright if none fits.
    pub fn rotate(&mut self) {
        if self.state != RunState::Playing {
            return;
        }
        let Some(current) = self.current else {
            return;
        };

        let rotated = current.rotated(Spin::Cw);
        for &(dx, dy) in self.kicks.offsets() {
            let candidate = rotated.translated(dx, dy);
            if candidate.fits(&self.board) {
                self.current = Some(candidate);
                return;
            }
        }
    }

    /// Manual descent by one row. Never locks: a piece resting on support
    /// stays pending until the next gravity tick confirms it cannot move.
    pub fn soft_drop(&mut self) {
        if self.state == RunState::Playing {
            self.try_move(0, 1);
        }
    }

    /// Drop the current piece to its resting position and lock it
    /// immediately - the one command that forces a lock-and-respawn cycle
    /// on the same call.
    pub fn hard_drop(&mut self) {
        if self.state != RunState::Playing {
            return;
        }
        let Some(mut piece) = self.current else {
            return;
        };

        while piece.translated(0, 1).fits(&self.board) {
            piece = piece.translated(0, 1);
        }
        self.current = Some(piece);
        self.lock_current();
    }

    /// Toggle Playing <-> Paused. No-op at GameOver; paused ticks still
    /// arrive but are ignored.
    pub fn pause(&mut self) {
        self.state = match self.state {
            RunState::Playing => RunState::Paused,
            RunState::Paused => RunState::Playing,
            RunState::GameOver => RunState::GameOver,
        };
    }

    /// Start over from any state: fresh board, scoring, and bag (reseeded
    /// from the current RNG state so the piece sequence differs), with a
    /// newly spawned current piece.
    pub fn reset(&mut self) {
        let seed = self.bag.seed();
        self.board.clear();
        self.scoring.reset();
        self.bag = PieceBag::new(seed);
        self.state = RunState::Playing;
        self.fall_timer_ms = 0;
        self.last_update_ms = None;
        let first = self.bag.take_next();
        self.current = Some(Piece::new(first));
        self.next = self.bag.peek_next();
    }

    /// Advance gravity using a host-supplied monotonic timestamp.
    ///
    /// Elapsed time since the previous call accumulates into the fall timer;
    /// once it reaches `fall_interval_ms(level)` the timer resets and the
    /// piece is forced down one row. A piece that cannot move down locks on
    /// that same tick: board write, line clear, scoring, and respawn happen
    /// before this method returns.
    ///
    /// While Paused or GameOver the timestamp is still recorded but no time
    /// accumulates, so unpausing never replays the paused interval.
    pub fn update(&mut self, now_ms: u64) {
        let previous = self.last_update_ms.replace(now_ms);

        if self.state != RunState::Playing {
            return;
        }
        let Some(previous) = previous else {
            // First observed tick only establishes the time base
            return;
        };

        let elapsed = u32::try_from(now_ms.saturating_sub(previous)).unwrap_or(u32::MAX);
        self.fall_timer_ms = self.fall_timer_ms.saturating_add(elapsed);

        if self.fall_timer_ms >= fall_interval_ms(self.scoring.level()) {
            self.fall_timer_ms = 0;
            if !self.try_move(0, 1) {
                // Resting: lock, clear, score, respawn as one step
                self.lock_current();
            }
        }
    }

    // --- internals ----------------------------------------------------------

    /// Commit a translation if the result passes the validity predicate
    fn try_move(&mut self, dx: i8, dy: i8) -> bool {
        let Some(current) = self.current else {
            return false;
        };
        let moved = current.translated(dx, dy);
        if moved.fits(&self.board) {
            self.current = Some(moved);
            true
        } else {
            false
        }
    }

    /// Retire the current piece into the board, clear and score any full
    /// rows, and spawn the successor. A successor that overlaps locked
    /// material ends the game.
    fn lock_current(&mut self) {
        let Some(piece) = self.current.take() else {
            return;
        };

        self.board.lock_piece(&piece);
        let cleared = self.board.clear_full_rows();
        if cleared > 0 {
            self.scoring.award_lines(cleared);
        }
        self.fall_timer_ms = 0;
        self.spawn_next();
    }

    /// Promote the lookahead to the active piece and refresh the lookahead
    fn spawn_next(&mut self) {
        let kind = self.bag.take_next();
        debug_assert_eq!(kind, self.next, "lookahead out of sync with bag");
        self.next = self.bag.peek_next();

        let piece = Piece::new(kind);
        // The spawned piece stays visible either way so renderers can show
        // the topping-out overlap
        self.current = Some(piece);
        if !piece.fits(&self.board) {
            self.state = RunState::GameOver;
        }
    }

    #[cfg(test)]
    fn force_current(&mut self, piece: Piece) {
        self.current = Some(piece);
    }

    #[cfg(test)]
    fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }
}
