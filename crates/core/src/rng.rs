//! RNG module - block generation for spawns
//!
//! The board asks a [`BlockSource`] for every new falling block. The default
//! [`RandomSource`] picks a template and an independent color uniformly at
//! random and keeps one block of lookahead for the "next" preview.
//! [`RepeatSource`] always hands out the same block, which makes scripted games
//! (tests, benchmarks) easy to set up.
//!
//! Also provides a simple LCG for deterministic testing.

use crate::block::Block;
use crate::types::{BlockColor, PieceKind};

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
        // High bits of an LCG are far better distributed than the low ones.
        (self.next_u32() >> 16) % max
    }

    /// Pick a uniformly random element
    pub fn choose<T: Copy>(&mut self, items: &[T]) -> T {
        items[self.next_range(items.len() as u32) as usize]
    }

    pub fn state(&self) -> u32 {
        self.state
    }
}

/// Supplies the blocks the board spawns.
///
/// The origin of a returned block is ignored; the board places it at the
/// spawn position.
pub trait BlockSource {
    /// Produce the next block to spawn
    fn next_block(&mut self) -> Block;

    /// The block the next call to [`BlockSource::next_block`] will return, if known
    fn peek(&self) -> Option<&Block> {
        None
    }
}

/// Uniform random template and color with one block of lookahead
#[derive(Debug, Clone)]
pub struct RandomSource {
    rng: SimpleRng,
    upcoming: Block,
}

impl RandomSource {
    pub fn new(seed: u32) -> Self {
        let mut rng = SimpleRng::new(seed);
        let upcoming = Self::roll(&mut rng);
        Self { rng, upcoming }
    }

    fn roll(rng: &mut SimpleRng) -> Block {
        let kind = rng.choose(&PieceKind::ALL);
        let color = rng.choose(&BlockColor::ALL);
        Block::from_kind(kind, color)
    }

    /// Current RNG state (seed for a follow-up game)
    pub fn seed(&self) -> u32 {
        self.rng.state()
    }
}

impl Default for RandomSource {
    fn default() -> Self {
        Self::new(1)
    }
}

impl BlockSource for RandomSource {
    fn next_block(&mut self) -> Block {
        let next = Self::roll(&mut self.rng);
        std::mem::replace(&mut self.upcoming, next)
    }

    fn peek(&self) -> Option<&Block> {
        Some(&self.upcoming)
    }
}

/// Always spawns a copy of the same block
#[derive(Debug, Clone)]
pub struct RepeatSource {
    block: Block,
}

impl RepeatSource {
    pub fn new(block: Block) -> Self {
        Self { block }
    }

    pub fn of_kind(kind: PieceKind, color: BlockColor) -> Self {
        Self::new(Block::from_kind(kind, color))
    }
}

impl BlockSource for RepeatSource {
    fn next_block(&mut self) -> Block {
        self.block.clone()
    }

    fn peek(&self) -> Option<&Block> {
        Some(&self.block)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        // Same seed should produce same sequence
        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_different_seeds() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(54321);

        // Different seeds should eventually diverge
        let v1 = rng1.next_u32();
        let v2 = rng2.next_u32();
        assert_ne!(v1, v2);
    }

    #[test]
    fn test_next_range_stays_in_range() {
        let mut rng = SimpleRng::new(7);
        for _ in 0..1000 {
            assert!(rng.next_range(7) < 7);
        }
    }

    #[test]
    fn test_random_source_peek_matches_draw() {
        let mut source = RandomSource::new(42);
        for _ in 0..50 {
            let peeked = source.peek().cloned();
            let drawn = source.next_block();
            assert_eq!(peeked, Some(drawn));
        }
    }

    #[test]
    fn test_random_source_deterministic() {
        let mut a = RandomSource::new(99);
        let mut b = RandomSource::new(99);
        for _ in 0..50 {
            assert_eq!(a.next_block(), b.next_block());
        }
    }

    #[test]
    fn test_random_source_covers_catalog() {
        let mut source = RandomSource::new(3);
        let mut seen_shapes = Vec::new();
        let mut seen_colors = Vec::new();
        for _ in 0..500 {
            let block = source.next_block();
            if !seen_shapes.contains(block.shape()) {
                seen_shapes.push(block.shape().clone());
            }
            if !seen_colors.contains(&block.color) {
                seen_colors.push(block.color);
            }
        }
        assert_eq!(seen_shapes.len(), PieceKind::ALL.len());
        assert_eq!(seen_colors.len(), BlockColor::ALL.len());
    }

    #[test]
    fn test_repeat_source() {
        let mut source = RepeatSource::of_kind(PieceKind::O, BlockColor::Yellow);
        let first = source.next_block();
        assert_eq!(source.next_block(), first);
        assert_eq!(source.peek(), Some(&first));
    }
}
