//! Crossover and mutation operators for placement vectors.
//!
//! Placements are plain column vectors (`placement[row] = column`), not
//! permutations, so the operators are free to produce repeated columns.
//!
//! # Crossover
//!
//! - [`single_point_crossover`]: prefix of one parent, suffix of the other
//!
//! # Mutation
//!
//! - [`reset_mutation`]: per-gene random reset with percent probability
//!
//! [`crossover`] chains both and scores the resulting child.
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

use super::types::{Candidate, Placement};
use rand::Rng;

// ============================================================================
// Crossover operators
// ============================================================================

/// Single-point crossover at a fixed cut.
///
/// Returns `first[..cut] ++ second[cut..]`. A cut of 0 copies `second`
/// entirely; a cut of `n - 1` keeps all of `first` except its last gene.
///
/// # Complexity
/// O(n) time, O(n) space
///
/// # Panics
/// Panics if the parents differ in length or `cut > n`.
pub fn single_point_crossover(first: &[usize], second: &[usize], cut: usize) -> Placement {
    assert_eq!(first.len(), second.len(), "parents must have equal length");
    assert!(cut <= first.len(), "cut index out of range");

    let mut child = Vec::with_capacity(first.len());
    child.extend_from_slice(&first[..cut]);
    child.extend_from_slice(&second[cut..]);
    child
}

// ============================================================================
// Mutation operators
// ============================================================================

/// Per-gene random reset.
///
/// For every gene, draws an integer from `0..=100`; if it is strictly below
/// `percent`, the gene is replaced by a fresh uniform draw from
/// `0..n_values`. The new value may equal the old one.
///
/// # Complexity
/// O(n)
pub fn reset_mutation<R: Rng>(genes: &mut [usize], n_values: usize, percent: u32, rng: &mut R) {
    for gene in genes.iter_mut() {
        if rng.random_range(0..=100u32) < percent {
            *gene = rng.random_range(0..n_values);
        }
    }
}

// ============================================================================
// Combined operator
// ============================================================================

/// Produces one child from two parents.
///
/// 1. Draws a cut uniformly from `0..n`
/// 2. Applies [`single_point_crossover`]
/// 3. Applies [`reset_mutation`] with `mutation_percent`
/// 4. Scores the child and tags it with `generation`
///
/// # Panics
/// Panics if the parents are empty or differ in length.
pub fn crossover<R: Rng>(
    parent_a: &Candidate,
    parent_b: &Candidate,
    mutation_percent: u32,
    generation: usize,
    rng: &mut R,
) -> Candidate {
    let n = parent_a.n_queens();
    assert!(n > 0, "parents must not be empty");

    let cut = rng.random_range(0..n);
    let mut child = single_point_crossover(parent_a.placement(), parent_b.placement(), cut);
    reset_mutation(&mut child, n, mutation_percent, rng);

    Candidate::new(child, generation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_crossover_splices_at_cut() {
        let a = [3, 4, 2, 1, 0, 5, 6, 7];
        let b = [4, 3, 2, 7, 1, 3, 5, 7];
        assert_eq!(single_point_crossover(&a, &b, 3), vec![3, 4, 2, 7, 1, 3, 5, 7]);
    }

    #[test]
    fn test_crossover_cut_zero_copies_second() {
        let a = [0, 1, 2, 3];
        let b = [3, 2, 1, 0];
        assert_eq!(single_point_crossover(&a, &b, 0), b.to_vec());
    }

    #[test]
    fn test_crossover_last_cut_takes_one_gene() {
        let a = [0, 1, 2, 3];
        let b = [3, 2, 1, 0];
        assert_eq!(single_point_crossover(&a, &b, 3), vec![0, 1, 2, 0]);
    }

    #[test]
    #[should_panic(expected = "parents must have equal length")]
    fn test_crossover_length_mismatch() {
        single_point_crossover(&[0, 1], &[0, 1, 2], 1);
    }

    #[test]
    fn test_zero_mutation_is_identity() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut genes = vec![5, 1, 7, 3, 0, 2, 6, 4];
        let before = genes.clone();
        for _ in 0..100 {
            reset_mutation(&mut genes, 8, 0, &mut rng);
        }
        assert_eq!(genes, before);
    }

    #[test]
    fn test_full_mutation_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut genes = vec![0; 64];
        reset_mutation(&mut genes, 5, 100, &mut rng);
        assert!(genes.iter().all(|&g| g < 5));
        // 64 genes redrawn over 5 values: some must leave column 0
        assert!(genes.iter().any(|&g| g != 0));
    }

    #[test]
    fn test_child_without_mutation_comes_from_parents() {
        let a = Candidate::new(vec![0, 0, 0, 0, 0, 0], 0);
        let b = Candidate::new(vec![5, 5, 5, 5, 5, 5], 0);
        let mut rng = StdRng::seed_from_u64(3);

        for _ in 0..50 {
            let child = crossover(&a, &b, 0, 4, &mut rng);
            let p = child.placement();
            assert_eq!(child.generation_born(), 4);
            assert_eq!(p.len(), 6);
            // a prefix of zeros followed by a non-empty suffix of fives
            let cut = p.iter().take_while(|&&g| g == 0).count();
            assert!(cut < 6);
            assert!(p[cut..].iter().all(|&g| g == 5));
        }
    }

    #[test]
    fn test_child_is_scored() {
        let a = Candidate::new(vec![1, 3, 0, 2], 0);
        let mut rng = StdRng::seed_from_u64(11);
        let child = crossover(&a, &a, 0, 1, &mut rng);
        assert_eq!(child.placement(), a.placement());
        assert_eq!(child.fitness(), 12);
    }

    #[test]
    fn test_crossover_is_deterministic() {
        let a = Candidate::new(vec![3, 4, 2, 1, 0, 5, 6, 7], 0);
        let b = Candidate::new(vec![4, 3, 2, 7, 1, 3, 5, 7], 0);
        let mut r1 = StdRng::seed_from_u64(5);
        let mut r2 = StdRng::seed_from_u64(5);
        for _ in 0..20 {
            assert_eq!(
                crossover(&a, &b, 30, 2, &mut r1),
                crossover(&a, &b, 30, 2, &mut r2)
            );
        }
    }
}
