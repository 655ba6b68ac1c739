//! Parent selection.
//!
//! Both strategies run a binary tournament: two candidates are drawn
//! uniformly at random, with replacement, and compared head to head. They
//! differ only in which side of the comparison wins.
//!
//! # References
//!
//! - Goldberg & Deb (1991), "A Comparative Analysis of Selection Schemes
//!   Used in Genetic Algorithms"

use super::types::Candidate;
use rand::Rng;

/// Selection strategy for choosing crossover parents.
///
/// # Examples
///
/// ```
/// use u_nqueens::ga::Selection;
///
/// // Default: the lower-fitness draw wins.
/// assert_eq!(Selection::default(), Selection::InvertedTournament);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Selection {
    /// Binary tournament where the draw with the **lower** fitness wins.
    ///
    /// Since higher fitness means fewer conflicts, this favours the weaker
    /// parent; only elitism keeps the best candidate alive. Ties go to the
    /// second draw.
    #[default]
    InvertedTournament,

    /// Binary tournament where the draw with the **higher** fitness wins.
    ///
    /// Ties go to the second draw. Converges noticeably faster than
    /// [`InvertedTournament`](Self::InvertedTournament).
    Tournament,
}

impl Selection {
    /// Selects one parent from `population`.
    ///
    /// Consumes exactly two draws from `rng`.
    ///
    /// # Panics
    /// Panics if `population` is empty.
    pub fn select<'a, R: Rng>(&self, population: &'a [Candidate], rng: &mut R) -> &'a Candidate {
        assert!(
            !population.is_empty(),
            "cannot select from empty population"
        );

        let n = population.len();
        let first = &population[rng.random_range(0..n)];
        let second = &population[rng.random_range(0..n)];

        let first_wins = match self {
            Selection::InvertedTournament => first.fitness() < second.fitness(),
            Selection::Tournament => first.fitness() > second.fitness(),
        };
        if first_wins {
            first
        } else {
            second
        }
    }
}
