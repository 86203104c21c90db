//! RNG module - piece randomizer
//!
//! Pieces are drawn independently and uniformly from the seven kinds, with
//! replacement. There is no bag, so repeats and droughts are possible.
//!
//! [`PieceSource`] is the seam the engine draws through. [`UniformRandomizer`]
//! is the production source; [`SequenceSource`] replays a fixed script, which
//! keeps tests and benchmarks deterministic.

use crate::types::PieceKind;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    pub fn new(seed: u32) -> Self {
        // Seed 0 is treated as 1
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Value in `[0, max)`.
    ///
    /// Uses the high half of the state; an LCG's low bits cycle quickly.
    pub fn next_range(&mut self, max: u32) -> u32 {
        (self.next_u32() >> 16) % max
    }
}

/// Where the engine gets its next piece kind from
pub trait PieceSource: std::fmt::Debug {
    fn next_kind(&mut self) -> PieceKind;
}

/// Uniform, independent draws over all seven kinds
#[derive(Debug, Clone)]
pub struct UniformRandomizer {
    rng: SimpleRng,
}

impl UniformRandomizer {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }
}

impl Default for UniformRandomizer {
    fn default() -> Self {
        Self::new(1)
    }
}

impl PieceSource for UniformRandomizer {
    fn next_kind(&mut self) -> PieceKind {
        PieceKind::from_index(self.rng.next_range(PieceKind::ALL.len() as u32) as usize)
    }
}

/// Replays a fixed list of kinds, cycling when it runs out
#[derive(Debug, Clone)]
pub struct SequenceSource {
    kinds: Vec<PieceKind>,
    index: usize,
}

impl SequenceSource {
    /// An empty list falls back to an endless stream of `O`.
    pub fn new(kinds: impl Into<Vec<PieceKind>>) -> Self {
        let mut kinds = kinds.into();
        if kinds.is_empty() {
            kinds.push(PieceKind::O);
        }
        Self { kinds, index: 0 }
    }
}

impl PieceSource for SequenceSource {
    fn next_kind(&mut self) -> PieceKind {
        let kind = self.kinds[self.index % self.kinds.len()];
        self.index = self.index.wrapping_add(1);
        kind
    }
}
