//! Randomness for computer-controlled players.
//!
//! The board never calls a global RNG directly. It asks a [`RandomSource`]
//! for a cell and a symbol, so tests can script exact computer moves.

use std::fmt;

use crate::tile::Symbol;
use crate::triple::Coord;

/// Uniform choices needed by an automatic move.
pub trait RandomSource: fmt::Debug {
    /// Pick one of `candidates` uniformly. `candidates` is never empty.
    fn pick_coord(&mut self, candidates: &[Coord]) -> Coord;

    /// Pick `S` or `O` uniformly.
    fn pick_symbol(&mut self) -> Symbol;
}

/// Default source backed by [`fastrand::Rng`].
#[derive(Clone, Debug)]
pub struct FastRandSource {
    rng: fastrand::Rng,
}

impl Default for FastRandSource {
    fn default() -> Self {
        Self::new()
    }
}

impl FastRandSource {
    /// Seeded from system entropy.
    pub fn new() -> Self {
        Self {
            rng: fastrand::Rng::new(),
        }
    }

    /// Reproducible sequence of choices.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: fastrand::Rng::with_seed(seed),
        }
    }
}

impl RandomSource for FastRandSource {
    fn pick_coord(&mut self, candidates: &[Coord]) -> Coord {
        assert!(!candidates.is_empty(), "pick_coord called with no candidates");
        candidates[self.rng.usize(..candidates.len())]
    }

    fn pick_symbol(&mut self) -> Symbol {
        Symbol::ALL[self.rng.usize(..Symbol::ALL.len())]
    }
}
