//! Scoring module - points, level, and gravity speed
//!
//! Line clears are the only events that mutate the score: the table in
//! `types.rs` pays per clear size, scaled by the current level, and the
//! level follows cumulative lines cleared. Gravity speed is derived from
//! the level and never reaches zero.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::types::{FALL_INTERVALS, FALL_INTERVAL_FLOOR_MS, LINES_PER_LEVEL, LINE_SCORES};

/// Score, level, and cumulative line count. Level starts at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Scoring {
    score: u32,
    level: u32,
    lines_cleared: u32,
}

impl Scoring {
    /// Fresh scoring state: 0 points, level 1, no lines
    pub fn new() -> Self {
        Self {
            score: 0,
            level: 1,
            lines_cleared: 0,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines_cleared(&self) -> u32 {
        self.lines_cleared
    }

    /// Record a clear of 1-4 simultaneous rows.
    ///
    /// Points are `LINE_SCORES[count] * level` using the level in effect
    /// before the clear; the level is then recomputed from cumulative lines
    /// and can only grow.
    pub fn award_lines(&mut self, count: usize) {
        assert!(
            (1..=4).contains(&count),
            "award_lines called with {} rows",
            count
        );

        self.score = self
            .score
            .saturating_add(LINE_SCORES[count].saturating_mul(self.level));
        self.lines_cleared += count as u32;
        self.level = self.level.max(1 + self.lines_cleared / LINES_PER_LEVEL);
    }

    /// Return to the initial state (new game)
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for Scoring {
    fn default() -> Self {
        Self::new()
    }
}

/// Gravity interval for a level (milliseconds between forced drops).
/// Non-increasing in level, floored so gravity never becomes instant.
pub fn fall_interval_ms(level: u32) -> u32 {
    let idx = level.saturating_sub(1) as usize;
    if idx < FALL_INTERVALS.len() {
        FALL_INTERVALS[idx]
    } else {
        FALL_INTERVAL_FLOOR_MS
    }
}
