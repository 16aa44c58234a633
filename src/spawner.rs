//! Piece generation
//!
//! Pieces are drawn uniformly at random from the 7 kinds, each one at the
//! fixed spawn anchor. The generator can be seeded for deterministic games.

use crate::piece::Piece;
use crate::shape::ShapeKind;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Uniform-random piece source
#[derive(Debug, Clone)]
pub struct Spawner {
    rng: ChaCha8Rng,
}

impl Spawner {
    /// Create a spawner seeded from entropy
    pub fn new() -> Self {
        Self::with_seed(rand::random())
    }

    /// Create a spawner with a fixed seed (for deterministic games and tests)
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Draw the next piece
    pub fn next(&mut self) -> Piece {
        let kinds = ShapeKind::all();
        let kind = kinds[self.rng.gen_range(0..kinds.len())];
        Piece::spawn(kind)
    }
}

impl Default for Spawner {
    fn default() -> Self {
        Self::new()
    }
}
