//! Population of candidates for one generation.

use super::fitness::target_fitness;
use super::types::Candidate;
use rand::Rng;

/// An ordered set of candidates making up one generation.
///
/// The engine owns exactly one population at a time and swaps in the next
/// one only after it is fully built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Population {
    members: Vec<Candidate>,
    generation: usize,
}

impl Population {
    /// Creates `size` random candidates for an `n_queens` board, generation 0.
    ///
    /// Every gene is drawn independently and uniformly from `0..n_queens`.
    /// Candidates are drawn one after another, genes in row order. No
    /// deduplication is performed.
    pub fn random<R: Rng>(n_queens: usize, size: usize, rng: &mut R) -> Self {
        let members = (0..size)
            .map(|_| {
                let placement = (0..n_queens).map(|_| rng.random_range(0..n_queens)).collect();
                Candidate::new(placement, 0)
            })
            .collect();
        Self {
            members,
            generation: 0,
        }
    }

    /// Wraps already-scored candidates as generation `generation`.
    pub fn from_members(members: Vec<Candidate>, generation: usize) -> Self {
        Self {
            members,
            generation,
        }
    }

    /// Candidates in insertion order.
    pub fn members(&self) -> &[Candidate] {
        &self.members
    }

    /// Generation index of this population.
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Number of candidates.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// True when the population holds no candidates.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Candidate with the highest fitness.
    ///
    /// Ties go to the first occurrence. The scan stops early once a
    /// conflict-free candidate is seen, since nothing can beat it.
    pub fn best(&self) -> Option<&Candidate> {
        let (first, rest) = self.members.split_first()?;
        let target = target_fitness(first.n_queens());

        let mut best = first;
        if best.fitness() == target {
            return Some(best);
        }
        for candidate in rest {
            if candidate.fitness() > best.fitness() {
                best = candidate;
                if best.fitness() == target {
                    break;
                }
            }
        }
        Some(best)
    }

    /// Mean fitness across all members, or 0.0 for an empty population.
    pub fn mean_fitness(&self) -> f64 {
        if self.members.is_empty() {
            return 0.0;
        }
        let total: usize = self.members.iter().map(Candidate::fitness).sum();
        total as f64 / self.members.len() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn population_of(placements: &[&[usize]]) -> Population {
        let members = placements
            .iter()
            .map(|p| Candidate::new(p.to_vec(), 0))
            .collect();
        Population::from_members(members, 0)
    }

    #[test]
    fn test_random_population_shape() {
        let mut rng = StdRng::seed_from_u64(42);
        let pop = Population::random(8, 25, &mut rng);

        assert_eq!(pop.len(), 25);
        assert_eq!(pop.generation(), 0);
        for c in pop.members() {
            assert_eq!(c.n_queens(), 8);
            assert_eq!(c.generation_born(), 0);
            assert!(c.placement().iter().all(|&col| col < 8));
        }
    }

    #[test]
    fn test_random_population_is_deterministic() {
        let a = Population::random(6, 10, &mut StdRng::seed_from_u64(7));
        let b = Population::random(6, 10, &mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
    }

    #[test]
    fn test_best_picks_max_fitness() {
        let pop = population_of(&[&[0, 0, 0, 0], &[0, 2, 0, 2], &[0, 1, 2, 3]]);
        let best = pop.best().unwrap();
        assert_eq!(best.placement(), &[0, 2, 0, 2]);
    }

    #[test]
    fn test_best_ties_go_to_first() {
        let pop = population_of(&[&[0, 0, 0, 0], &[3, 1, 3, 1], &[1, 3, 1, 3]]);
        assert_eq!(pop.members()[1].fitness(), pop.members()[2].fitness());
        assert_eq!(pop.best().unwrap().placement(), &[3, 1, 3, 1]);
    }

    #[test]
    fn test_best_stops_at_solution() {
        let pop = population_of(&[&[0, 0, 0, 0], &[1, 3, 0, 2], &[2, 0, 3, 1]]);
        assert_eq!(pop.best().unwrap().placement(), &[1, 3, 0, 2]);
    }

    #[test]
    fn test_best_of_empty_population() {
        let pop = Population::from_members(Vec::new(), 0);
        assert!(pop.is_empty());
        assert!(pop.best().is_none());
        assert_eq!(pop.mean_fitness(), 0.0);
    }

    #[test]
    fn test_mean_fitness() {
        let pop = population_of(&[&[0, 0, 0, 0], &[1, 3, 0, 2]]);
        assert!((pop.mean_fitness() - 6.0).abs() < 1e-12);
    }
}
