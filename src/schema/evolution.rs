//! Run reporting types: per-generation statistics, history, and final result.

use serde::{Deserialize, Serialize};

use crate::compute::evolution::Candidate;

/// Statistics emitted once per generation, in ascending generation order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerationStats {
    /// Zero-based generation index.
    pub generation: usize,
    /// Best candidate of this generation.
    pub best: Candidate,
    /// Mean fitness of this generation.
    pub avg_fitness: f64,
    /// Lowest-fitness generation best up to and including this generation.
    pub global_best: Candidate,
}

/// Evolution history for plotting.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct EvolutionHistory {
    /// Best fitness per generation.
    pub best_fitness: Vec<f64>,
    /// Average fitness per generation.
    pub avg_fitness: Vec<f64>,
}

impl EvolutionHistory {
    /// Append one generation.
    pub fn record(&mut self, stats: &GenerationStats) {
        self.best_fitness.push(stats.best.fitness());
        self.avg_fitness.push(stats.avg_fitness);
    }

    /// Number of recorded generations.
    pub fn len(&self) -> usize {
        self.avg_fitness.len()
    }

    /// Whether no generation has been recorded.
    pub fn is_empty(&self) -> bool {
        self.avg_fitness.is_empty()
    }
}

/// Lifecycle of an engine. Transitions only move forward.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum EvolutionPhase {
    /// No population yet.
    #[default]
    Uninitialized,
    /// Population created, no generation run.
    Initialized,
    /// The given generation has completed.
    Running { generation: usize },
    /// All generations done.
    Completed,
}

/// Final result of an evolution run.
#[derive(Debug, Clone, Serialize)]
pub struct EvolutionResult {
    /// Global best candidate, or `None` when no generation was run.
    pub best: Option<Candidate>,
    /// Statistics from the run.
    pub stats: EvolutionStats,
    /// Full history for analysis.
    pub history: EvolutionHistory,
}

/// Summary statistics of an evolution run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvolutionStats {
    /// Total generations run.
    pub generations: usize,
    /// Objective evaluations performed: the initial population, every
    /// crossover child (overshoot included) and every applied mutation.
    pub total_evaluations: u64,
    /// Best fitness achieved, `None` when no generation was run.
    pub best_fitness: Option<f64>,
    /// Average fitness of the final population.
    pub final_avg_fitness: f64,
    /// Time taken (in seconds).
    pub elapsed_seconds: f64,
}
