//! Rosenbrock GA - A minimal genetic algorithm.
//!
//! This crate evolves a population of 2D points towards the minimum of the
//! Rosenbrock banana function `(1 - x)^2 + 100 (y - x^2)^2`, using binary
//! tournament selection, blend crossover and uniform mutation.
//!
//! # Architecture
//!
//! The crate is split into two main modules:
//!
//! - `schema`: Configuration and per-generation reporting types
//! - `compute`: Objective, candidates, variation operators and the engine
//!
//! # Example
//!
//! ```rust,no_run
//! use rosenbrock_ga::{EvolutionConfig, EvolutionEngine};
//!
//! let config = EvolutionConfig {
//!     random_seed: Some(42),
//!     ..Default::default()
//! };
//!
//! let mut engine = EvolutionEngine::new(config)?;
//! let result = engine.run();
//!
//! println!("Average fitness history: {:?}", result.history.avg_fitness);
//! # Ok::<(), rosenbrock_ga::ConfigError>(())
//! ```

pub mod compute;
pub mod schema;

// Re-export commonly used types
pub use compute::{Candidate, EvolutionEngine, Population, rosenbrock};
pub use schema::{ConfigError, EvolutionConfig, EvolutionResult, GenerationStats};
