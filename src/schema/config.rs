//! Configuration types for the genetic algorithm.

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::compute::evolution::DEFAULT_MUTATION_MAGNITUDE;

/// Top-level configuration for a Rosenbrock GA run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvolutionConfig {
    /// Number of candidates per generation.
    #[serde(default = "default_population_size")]
    pub population_size: usize,
    /// Probability that two selected parents are blended instead of copied (0.0-1.0).
    #[serde(default = "default_crossover_rate")]
    pub crossover_rate: f64,
    /// Per-candidate probability of perturbation each generation (0.0-1.0).
    #[serde(default = "default_mutation_rate")]
    pub mutation_rate: f64,
    /// Half-width of the uniform perturbation applied on mutation.
    #[serde(default = "default_mutation_magnitude")]
    pub mutation_magnitude: f64,
    /// Number of generations to run.
    #[serde(default = "default_max_generations")]
    pub max_generations: usize,
    /// Random seed for reproducibility.
    #[serde(default)]
    pub random_seed: Option<u64>,
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            population_size: default_population_size(),
            crossover_rate: default_crossover_rate(),
            mutation_rate: default_mutation_rate(),
            mutation_magnitude: default_mutation_magnitude(),
            max_generations: default_max_generations(),
            random_seed: None,
        }
    }
}

fn default_population_size() -> usize {
    100
}
fn default_crossover_rate() -> f64 {
    0.8
}
fn default_mutation_rate() -> f64 {
    0.01
}
fn default_mutation_magnitude() -> f64 {
    DEFAULT_MUTATION_MAGNITUDE
}
fn default_max_generations() -> usize {
    100
}

impl EvolutionConfig {
    /// Load a configuration from a JSON file.
    ///
    /// Missing fields take their default values.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path)?;
        let config = serde_json::from_str(&json)?;
        Ok(config)
    }

    /// Validate configuration.
    ///
    /// Rates outside `[0, 1]` are accepted: they behave as "always" or
    /// "never" and only produce a warning.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population_size == 0 {
            return Err(ConfigError::EmptyPopulation);
        }

        if !self.mutation_magnitude.is_finite() || self.mutation_magnitude < 0.0 {
            return Err(ConfigError::InvalidMagnitude(self.mutation_magnitude));
        }

        for (name, rate) in [
            ("crossover_rate", self.crossover_rate),
            ("mutation_rate", self.mutation_rate),
        ] {
            if !(0.0..=1.0).contains(&rate) {
                log::warn!("{name} {rate} is outside [0, 1] and will act as always/never");
            }
        }

        Ok(())
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Population size must be non-zero")]
    EmptyPopulation,
    #[error("Mutation magnitude must be finite and non-negative, got {0}")]
    InvalidMagnitude(f64),
    #[error("Initial population has {actual} candidates, expected {expected}")]
    PopulationSizeMismatch { expected: usize, actual: usize },
    #[error("Failed to read config: {0}")]
    Io(#[from] io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}
