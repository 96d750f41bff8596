//! Random source and variation operators.
//!
//! Every random draw made by the search goes through [`GenomeRng`], so a
//! seeded engine is fully reproducible.

use rand::prelude::*;

use super::Candidate;

/// Random number generator wrapper for genome operations.
pub struct GenomeRng {
    rng: StdRng,
}

impl GenomeRng {
    /// Create from seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Create with random seed.
    pub fn random() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Uniform draw in `[0, 1)`.
    pub fn unit(&mut self) -> f64 {
        self.rng.r#gen::<f64>()
    }

    /// Returns true with probability `rate`.
    ///
    /// Rates above 1 always succeed, rates at or below 0 never do.
    pub fn chance(&mut self, rate: f64) -> bool {
        self.unit() < rate
    }

    /// Uniform draw in `[-magnitude, magnitude)`.
    pub fn symmetric(&mut self, magnitude: f64) -> f64 {
        (self.unit() * 2.0 - 1.0) * magnitude
    }

    /// Uniform index into a collection of `len` items. `len` must be non-zero.
    pub fn index(&mut self, len: usize) -> usize {
        ((self.unit() * len as f64) as usize).min(len - 1)
    }

    /// Random candidate with both coordinates uniform in `[0, 1)`.
    pub fn random_candidate(&mut self) -> Candidate {
        let x = self.unit();
        let y = self.unit();
        Candidate::new(x, y)
    }

    /// Blend crossover with a freshly drawn weight.
    pub fn crossover(&mut self, parent1: &Candidate, parent2: &Candidate) -> (Candidate, Candidate) {
        let alpha = self.unit();
        blend(parent1, parent2, alpha)
    }
}

/// Blend crossover with an explicit weight.
///
/// The first child is `alpha * p1 + (1 - alpha) * p2` and the second uses the
/// mirrored weight, coordinate-wise.
pub fn blend(parent1: &Candidate, parent2: &Candidate, alpha: f64) -> (Candidate, Candidate) {
    let beta = 1.0 - alpha;
    let child1 = Candidate::new(
        alpha * parent1.x() + beta * parent2.x(),
        alpha * parent1.y() + beta * parent2.y(),
    );
    let child2 = Candidate::new(
        beta * parent1.x() + alpha * parent2.x(),
        beta * parent1.y() + alpha * parent2.y(),
    );
    (child1, child2)
}
