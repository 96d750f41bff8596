//! Evolutionary search over the Rosenbrock surface.
//!
//! # Overview
//!
//! - **Objective** (`fitness`): the Rosenbrock banana function
//! - **Candidates** (`candidate`): a 2D point with its cached fitness
//! - **Genome Operations** (`genome`): seeded random source and blend crossover
//! - **Population** (`population`): tournament selection, best and mean fitness
//! - **Search** (`search`): the generational loop and its statistics
//!
//! # Example
//!
//! ```rust,no_run
//! use rosenbrock_ga::compute::evolution::EvolutionEngine;
//! use rosenbrock_ga::schema::EvolutionConfig;
//!
//! let mut engine = EvolutionEngine::new(EvolutionConfig::default())?;
//! let result = engine.run_with_callback(|stats| {
//!     println!("Generation {}: average fitness = {:.6}",
//!         stats.generation, stats.avg_fitness);
//! });
//!
//! if let Some(best) = result.best {
//!     println!("Best: ({}, {}) -> {}", best.x(), best.y(), best.fitness());
//! }
//! # Ok::<(), rosenbrock_ga::schema::ConfigError>(())
//! ```

mod candidate;
mod fitness;
mod genome;
mod population;
mod search;

pub use candidate::{Candidate, DEFAULT_MUTATION_MAGNITUDE};
pub use fitness::rosenbrock;
pub use genome::{GenomeRng, blend};
pub use population::Population;
pub use search::EvolutionEngine;
