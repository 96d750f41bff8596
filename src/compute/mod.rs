//! Compute module - The genetic algorithm itself.

pub mod evolution;

pub use evolution::{Candidate, EvolutionEngine, Population, rosenbrock};
