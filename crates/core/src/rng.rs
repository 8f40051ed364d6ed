//! RNG module - pluggable piece selection
//!
//! Sessions draw their pieces from a [`PieceSource`]. Two sources ship with the
//! core:
//!
//! - [`UniformRandom`]: each kind with probability 1/7, independent draws (no bag).
//! - [`SequenceSource`]: cycles a fixed list, for tests and replays.
//!
//! Randomness comes from a small LCG so that a seed fully determines a game.

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
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }
}

/// Supplies the kind of every spawned piece.
pub trait PieceSource: std::fmt::Debug + Send {
    fn next_kind(&mut self) -> PieceKind;
}

/// Uniform, memoryless piece selection.
#[derive(Debug, Clone)]
pub struct UniformRandom {
    rng: SimpleRng,
}

impl UniformRandom {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }
}

impl Default for UniformRandom {
    fn default() -> Self {
        Self::new(1)
    }
}

impl PieceSource for UniformRandom {
    fn next_kind(&mut self) -> PieceKind {
        let i = self.rng.next_range(PieceKind::ALL.len() as u32) as usize;
        PieceKind::ALL[i]
    }
}

/// Repeats a fixed list of kinds forever.
#[derive(Debug, Clone)]
pub struct SequenceSource {
    kinds: Vec<PieceKind>,
    index: usize,
}

impl SequenceSource {
    /// # Panics
    ///
    /// Panics if `kinds` is empty.
    pub fn new(kinds: Vec<PieceKind>) -> Self {
        assert!(!kinds.is_empty(), "piece sequence must not be empty");
        Self { kinds, index: 0 }
    }

    /// A source that only ever yields `kind`
    pub fn repeat(kind: PieceKind) -> Self {
        Self::new(vec![kind])
    }
}

impl PieceSource for SequenceSource {
    fn next_kind(&mut self) -> PieceKind {
        let kind = self.kinds[self.index % self.kinds.len()];
        self.index = self.index.wrapping_add(1);
        kind
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_different_seeds() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(54321);
        assert_ne!(rng1.next_u32(), rng2.next_u32());
    }

    #[test]
    fn test_zero_seed_is_not_stuck() {
        let mut rng = SimpleRng::new(0);
        let a = rng.next_u32();
        let b = rng.next_u32();
        assert_ne!(a, b);
    }

    #[test]
    fn test_uniform_source_is_reproducible() {
        let mut a = UniformRandom::new(7);
        let mut b = UniformRandom::new(7);
        for _ in 0..50 {
            assert_eq!(a.next_kind(), b.next_kind());
        }
    }

    #[test]
    fn test_uniform_source_yields_every_kind() {
        let mut source = UniformRandom::new(42);
        let mut counts = [0u32; 7];
        for _ in 0..7000 {
            counts[source.next_kind().index()] += 1;
        }
        for (i, &n) in counts.iter().enumerate() {
            assert!(n > 500, "kind {i} drawn only {n} times");
        }
    }

    #[test]
    fn test_sequence_source_cycles() {
        let mut source = SequenceSource::new(vec![PieceKind::O, PieceKind::I]);
        assert_eq!(source.next_kind(), PieceKind::O);
        assert_eq!(source.next_kind(), PieceKind::I);
        assert_eq!(source.next_kind(), PieceKind::O);
    }

    #[test]
    #[should_panic(expected = "must not be empty")]
    fn test_sequence_source_rejects_empty() {
        let _ = SequenceSource::new(Vec::new());
    }
}
