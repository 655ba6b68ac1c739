//! Solver configuration.
//!
//! [`QueensConfig`] holds every parameter that stays fixed for the lifetime
//! of an [`EvolutionEngine`](super::EvolutionEngine).

use super::fitness::target_fitness;
use super::selection::Selection;
use crate::error::ConfigError;

/// Configuration for the N-Queens genetic algorithm.
///
/// # Defaults
///
/// ```
/// use u_nqueens::ga::QueensConfig;
///
/// let config = QueensConfig::default();
/// assert_eq!(config.n_queens, 8);
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.mutation_probability_percent, 10);
/// assert_eq!(config.target_fitness(), 56);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_nqueens::ga::{QueensConfig, Selection};
///
/// let config = QueensConfig::new(200, 12, 5)
///     .with_selection(Selection::Tournament)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
///
/// Builders store values as given. Out-of-range values are reported by
/// [`validate`](Self::validate), never clamped.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QueensConfig {
    /// Board size N: number of queens, rows and columns.
    pub n_queens: usize,

    /// Number of candidates in every generation.
    pub population_size: usize,

    /// Per-gene mutation chance in percent (0–100).
    ///
    /// Each gene draws an integer from `0..=100` and mutates when the draw
    /// is strictly below this value, so 100 mutates with probability 100/101.
    pub mutation_probability_percent: u32,

    /// Parent selection rule.
    pub selection: Selection,

    /// Random seed for reproducibility.
    ///
    /// `None` seeds from OS entropy.
    pub seed: Option<u64>,

    /// Optional wall-clock limit in milliseconds.
    ///
    /// Checked between generations, so a run may exceed it by at most one
    /// generation's worth of work.
    pub time_limit_ms: Option<u64>,
}

impl Default for QueensConfig {
    fn default() -> Self {
        Self {
            n_queens: 8,
            population_size: 100,
            mutation_probability_percent: 10,
            selection: Selection::default(),
            seed: None,
            time_limit_ms: None,
        }
    }
}

impl QueensConfig {
    /// Creates a configuration from the three core parameters.
    ///
    /// Argument order follows the engine constructor:
    /// `(population_size, n_queens, mutation_probability_percent)`.
    pub fn new(population_size: usize, n_queens: usize, mutation_probability_percent: u32) -> Self {
        Self {
            n_queens,
            population_size,
            mutation_probability_percent,
            ..Self::default()
        }
    }

    /// Sets the board size.
    pub fn with_n_queens(mut self, n: usize) -> Self {
        self.n_queens = n;
        self
    }

    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the per-gene mutation probability in percent.
    pub fn with_mutation_probability_percent(mut self, percent: u32) -> Self {
        self.mutation_probability_percent = percent;
        self
    }

    /// Sets the parent selection rule.
    pub fn with_selection(mut self, selection: Selection) -> Self {
        self.selection = selection;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the wall-clock time limit in milliseconds.
    pub fn with_time_limit_ms(mut self, ms: u64) -> Self {
        self.time_limit_ms = Some(ms);
        self
    }

    /// Fitness of a conflict-free placement: `n_queens * (n_queens - 1)`.
    pub fn target_fitness(&self) -> usize {
        target_fitness(self.n_queens)
    }

    /// Validates the configuration.
    ///
    /// Returns the first violated rule as a [`ConfigError`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.n_queens < 1 {
            return Err(ConfigError::BoardTooSmall(self.n_queens));
        }
        if self.population_size < 1 {
            return Err(ConfigError::EmptyPopulation(self.population_size));
        }
        if self.mutation_probability_percent > 100 {
            return Err(ConfigError::MutationOutOfRange(
                self.mutation_probability_percent,
            ));
        }
        if self.time_limit_ms == Some(0) {
            return Err(ConfigError::ZeroTimeLimit);
        }
        Ok(())
    }
}
