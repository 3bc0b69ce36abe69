//! RNG module - 7-bag random piece generation
//!
//! Implements the "7-bag" randomization scheme: each bag holds one of each
//! piece kind, shuffled. The bag is refilled eagerly, so the generator is
//! never observably empty - `peek_next` always has an answer.
//!
//! The shuffle runs on a small seedable LCG so games are reproducible;
//! no global entropy is read.

use crate::types::PieceKind;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: a = 1664525, c = 1013904223, m = 2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Shuffle a slice using Fisher-Yates
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_range((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }

    /// Current internal state (usable as a seed to continue the stream)
    pub fn state(&self) -> u32 {
        self.state
    }
}

/// 7-bag piece generator with a one-piece lookahead boundary
#[derive(Debug, Clone)]
pub struct PieceBag {
    /// Current shuffled bag
    bag: [PieceKind; 7],
    /// Index of the next piece to hand out
    next: usize,
    /// RNG for shuffling
    rng: SimpleRng,
}

impl PieceBag {
    /// Create a new bag generator with the given seed
    pub fn new(seed: u32) -> Self {
        let mut generator = Self {
            bag: PieceKind::ALL,
            next: 0,
            rng: SimpleRng::new(seed),
        };
        generator.refill();
        generator
    }

    /// Shuffle a fresh bag of all 7 kinds
    fn refill(&mut self) {
        self.bag = PieceKind::ALL;
        self.rng.shuffle(&mut self.bag);
        self.next = 0;
    }

    /// The upcoming kind, without consuming it. Idempotent.
    pub fn peek_next(&self) -> PieceKind {
        self.bag[self.next]
    }

    /// Consume and return the kind `peek_next` was reporting, refilling the
    /// bag eagerly when this empties it.
    pub fn take_next(&mut self) -> PieceKind {
        let kind = self.bag[self.next];
        self.next += 1;
        if self.next == self.bag.len() {
            self.refill();
        }
        kind
    }

    /// Get the current RNG state (for reseeding a reset game)
    pub fn seed(&self) -> u32 {
        self.rng.state()
    }

    /// Pieces remaining in the current bag, for tests
    #[cfg(test)]
    pub fn remaining(&self) -> &[PieceKind] {
        &self.bag[self.next..]
    }
}

impl Default for PieceBag {
    fn default() -> Self {
        Self::new(1)
    }
}
