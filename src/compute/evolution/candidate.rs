//! Candidate solutions.

use std::cmp::Ordering;

use serde::Serialize;

use super::{GenomeRng, rosenbrock};

/// Default half-width of the mutation perturbation.
pub const DEFAULT_MUTATION_MAGNITUDE: f64 = 0.01;

/// A point in the search space with its cached fitness.
///
/// Coordinates are only changed through [`Candidate::mutate`], which
/// re-evaluates the objective, so `fitness` is never stale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Candidate {
    x: f64,
    y: f64,
    fitness: f64,
}

impl Candidate {
    /// Create a candidate and evaluate it.
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            fitness: rosenbrock(x, y),
        }
    }

    /// First coordinate.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Second coordinate.
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Objective value, lower is better.
    pub fn fitness(&self) -> f64 {
        self.fitness
    }

    /// With probability `rate`, shift both coordinates independently by a
    /// uniform amount in `[-magnitude, magnitude]` and re-evaluate.
    ///
    /// Returns whether the candidate was perturbed.
    pub fn mutate(&mut self, rng: &mut GenomeRng, rate: f64, magnitude: f64) -> bool {
        if !rng.chance(rate) {
            return false;
        }
        self.x += rng.symmetric(magnitude);
        self.y += rng.symmetric(magnitude);
        self.fitness = rosenbrock(self.x, self.y);
        true
    }

    /// Ascending fitness order.
    pub fn cmp_fitness(&self, other: &Self) -> Ordering {
        self.fitness.total_cmp(&other.fitness)
    }
}
