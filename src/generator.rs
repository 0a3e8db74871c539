//! Random shape generation
//!
//! Every draw picks one of the 7 geometries uniformly and, independently,
//! one of the 7 colors uniformly. There is no bag memory: droughts and
//! repeats are possible, as the rules intend.

use crate::tetromino::Shape;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Uniform shape source backed by a seedable RNG
#[derive(Debug, Clone)]
pub struct ShapeGenerator {
    rng: ChaCha8Rng,
}

impl Default for ShapeGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl ShapeGenerator {
    /// Entropy-seeded generator
    pub fn new() -> Self {
        Self::with_seed(rand::random())
    }

    /// Reproducible generator: the same seed yields the same shape stream
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Draw the next shape
    pub fn next(&mut self) -> Shape {
        Shape::random(&mut self.rng)
    }
}
