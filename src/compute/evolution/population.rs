//! Population of candidates and parent selection.

use super::{Candidate, GenomeRng};

/// Ordered collection of candidates.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Population {
    candidates: Vec<Candidate>,
}

impl Population {
    /// Random population with coordinates uniform in `[0, 1)`.
    pub fn random(rng: &mut GenomeRng, size: usize) -> Self {
        let candidates = (0..size).map(|_| rng.random_candidate()).collect();
        Self { candidates }
    }

    /// Wrap an explicit set of candidates.
    pub fn from_candidates(candidates: Vec<Candidate>) -> Self {
        Self { candidates }
    }

    /// Number of candidates.
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    /// Whether the population holds no candidates.
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Candidates in population order.
    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    /// Iterate over candidates in population order.
    pub fn iter(&self) -> impl Iterator<Item = &Candidate> {
        self.candidates.iter()
    }

    /// Binary tournament: draw two candidates with replacement and keep the
    /// one with strictly lower fitness, the second on ties.
    ///
    /// The population must not be empty.
    pub fn select_parent(&self, rng: &mut GenomeRng) -> &Candidate {
        let first = &self.candidates[rng.index(self.candidates.len())];
        let second = &self.candidates[rng.index(self.candidates.len())];
        if first.fitness() < second.fitness() {
            first
        } else {
            second
        }
    }

    /// Lowest-fitness candidate.
    pub fn best(&self) -> Option<&Candidate> {
        self.candidates.iter().min_by(|a, b| a.cmp_fitness(b))
    }

    /// Mean fitness, `0.0` for an empty population.
    pub fn average_fitness(&self) -> f64 {
        if self.candidates.is_empty() {
            return 0.0;
        }
        self.candidates.iter().map(Candidate::fitness).sum::<f64>() / self.candidates.len() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn diagonal() -> Population {
        Population::from_candidates(
            [0.0, 1.0, 2.0, 3.0]
                .into_iter()
                .map(|v| Candidate::new(v, v))
                .collect(),
        )
    }

    #[test]
    fn test_random_population() {
        let mut rng = GenomeRng::new(42);
        let population = Population::random(&mut rng, 25);

        assert_eq!(population.len(), 25);
        for c in population.iter() {
            assert!((0.0..1.0).contains(&c.x()));
            assert!((0.0..1.0).contains(&c.y()));
        }
    }

    #[test]
    fn test_best() {
        let population = diagonal();
        let best = population.best().unwrap();
        assert_eq!((best.x(), best.y()), (1.0, 1.0));
        assert_eq!(best.fitness(), 0.0);

        assert!(Population::default().best().is_none());
    }

    #[test]
    fn test_average_fitness() {
        // 1 + 0 + 401 + 3604
        let population = diagonal();
        assert_eq!(population.average_fitness(), 4006.0 / 4.0);
        assert_eq!(Population::default().average_fitness(), 0.0);
    }

    #[test]
    fn test_select_parent_single() {
        let mut rng = GenomeRng::new(1);
        let population = Population::from_candidates(vec![Candidate::new(0.5, 0.5)]);
        for _ in 0..10 {
            assert_eq!(*population.select_parent(&mut rng), population.candidates()[0]);
        }
    }

    #[test]
    fn test_select_parent_never_returns_worst() {
        // The worst candidate can only win a tournament against itself.
        let mut rng = GenomeRng::new(2);
        let population = diagonal();
        let worst = population.candidates()[3];

        let picks = 4000;
        let worst_picks = (0..picks)
            .filter(|_| *population.select_parent(&mut rng) == worst)
            .count();

        // Expected 1/16 of the picks.
        assert!(worst_picks < picks / 8);
    }

    #[test]
    fn test_select_parent_favours_best() {
        let mut rng = GenomeRng::new(3);
        let population = diagonal();
        let best = *population.best().unwrap();

        let picks = 4000;
        let best_picks = (0..picks)
            .filter(|_| *population.select_parent(&mut rng) == best)
            .count();

        // Expected 7/16 of the picks.
        assert!(best_picks > picks / 4);
    }
}
