//! Generational genetic algorithm.

use std::time::Instant;

use crate::schema::{
    ConfigError, EvolutionConfig, EvolutionHistory, EvolutionPhase, EvolutionResult,
    EvolutionStats, GenerationStats,
};

use super::{Candidate, GenomeRng, Population};

/// Evolution engine that runs the search.
pub struct EvolutionEngine {
    config: EvolutionConfig,
    rng: GenomeRng,
    population: Population,
    global_best: Option<Candidate>,
    history: EvolutionHistory,
    generation: usize,
    evaluations: u64,
    phase: EvolutionPhase,
}

impl EvolutionEngine {
    /// Create a new evolution engine from a validated configuration.
    pub fn new(config: EvolutionConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let rng = match config.random_seed {
            Some(seed) => GenomeRng::new(seed),
            None => GenomeRng::random(),
        };

        Ok(Self {
            config,
            rng,
            population: Population::default(),
            global_best: None,
            history: EvolutionHistory::default(),
            generation: 0,
            evaluations: 0,
            phase: EvolutionPhase::Uninitialized,
        })
    }

    /// Start from an explicit population instead of a random one.
    pub fn with_population(mut self, candidates: Vec<Candidate>) -> Result<Self, ConfigError> {
        if candidates.len() != self.config.population_size {
            return Err(ConfigError::PopulationSizeMismatch {
                expected: self.config.population_size,
                actual: candidates.len(),
            });
        }
        self.set_population(Population::from_candidates(candidates));
        Ok(self)
    }

    /// Initialize a random population.
    pub fn initialize(&mut self) {
        let population = Population::random(&mut self.rng, self.config.population_size);
        self.set_population(population);
    }

    fn set_population(&mut self, population: Population) {
        self.global_best = None;
        self.evaluations = population.len() as u64;
        self.population = population;
        self.history = EvolutionHistory::default();
        self.generation = 0;
        self.phase = EvolutionPhase::Initialized;
    }

    /// Configuration the engine was built with.
    pub fn config(&self) -> &EvolutionConfig {
        &self.config
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> EvolutionPhase {
        self.phase
    }

    /// Current population.
    pub fn population(&self) -> &Population {
        &self.population
    }

    /// Lowest-fitness generation best seen so far, `None` before the first generation.
    pub fn global_best(&self) -> Option<&Candidate> {
        self.global_best.as_ref()
    }

    /// Per-generation fitness history.
    pub fn history(&self) -> &EvolutionHistory {
        &self.history
    }

    /// Build the next population from the current one.
    fn breed(&mut self) -> Population {
        let size = self.config.population_size;
        let mut next_gen = Vec::with_capacity(size + 1);

        // Parents always come from the previous generation; odd sizes overshoot by one.
        while next_gen.len() < size {
            let parent1 = *self.population.select_parent(&mut self.rng);
            let parent2 = *self.population.select_parent(&mut self.rng);

            if self.rng.chance(self.config.crossover_rate) {
                let (child1, child2) = self.rng.crossover(&parent1, &parent2);
                self.evaluations += 2;
                next_gen.push(child1);
                next_gen.push(child2);
            } else {
                next_gen.push(parent1);
                next_gen.push(parent2);
            }
        }

        for candidate in &mut next_gen {
            if candidate.mutate(
                &mut self.rng,
                self.config.mutation_rate,
                self.config.mutation_magnitude,
            ) {
                self.evaluations += 1;
            }
        }

        next_gen.truncate(size);
        Population::from_candidates(next_gen)
    }

    /// Run a single generation step and report its statistics.
    fn step_generation(&mut self) -> Option<GenerationStats> {
        self.population = self.breed();

        let best = *self.population.best()?;
        let avg_fitness = self.population.average_fitness();

        let global_best = match self.global_best {
            Some(current) if current.fitness() <= best.fitness() => current,
            _ => best,
        };
        self.global_best = Some(global_best);

        let stats = GenerationStats {
            generation: self.generation,
            best,
            avg_fitness,
            global_best,
        };
        self.history.record(&stats);

        log::debug!(
            "generation {}: best {:.6e} at ({:.6}, {:.6}), avg {:.6e}",
            stats.generation,
            best.fitness(),
            best.x(),
            best.y(),
            avg_fitness
        );

        self.phase = EvolutionPhase::Running {
            generation: self.generation,
        };
        self.generation += 1;
        Some(stats)
    }

    /// Run evolution, reporting each generation to `callback` in order.
    ///
    /// Initializes a random population first unless one is already in place.
    pub fn run_with_callback<F>(&mut self, mut callback: F) -> EvolutionResult
    where
        F: FnMut(&GenerationStats),
    {
        let start_time = Instant::now();

        if self.phase == EvolutionPhase::Uninitialized {
            self.initialize();
        }

        log::info!(
            "evolving {} candidates for {} generations",
            self.config.population_size,
            self.config.max_generations
        );

        while self.phase != EvolutionPhase::Completed
            && self.generation < self.config.max_generations
        {
            match self.step_generation() {
                Some(stats) => callback(&stats),
                None => break,
            }
        }
        self.phase = EvolutionPhase::Completed;

        let best = if self.generation == 0 {
            log::warn!("no generations were run, there is no best candidate to report");
            None
        } else {
            self.global_best
        };

        if let Some(best) = &best {
            log::info!(
                "best candidate after {} generations: ({}, {}) with fitness {:e}",
                self.generation,
                best.x(),
                best.y(),
                best.fitness()
            );
        }

        EvolutionResult {
            best,
            stats: EvolutionStats {
                generations: self.generation,
                total_evaluations: self.evaluations,
                best_fitness: best.map(|c| c.fitness()),
                final_avg_fitness: self.population.average_fitness(),
                elapsed_seconds: start_time.elapsed().as_secs_f64(),
            },
            history: self.history.clone(),
        }
    }

    /// Run evolution (blocking).
    pub fn run(&mut self) -> EvolutionResult {
        self.run_with_callback(|_| {})
    }
}
