//! Error types.
//!
//! Configuration is the only thing in the crate that can fail. An exhausted
//! search is a normal outcome and is reported through
//! [`SolveOutcome::NotFound`](crate::ga::SolveOutcome::NotFound), not here.

/// Invalid solver configuration, rejected by
/// [`QueensConfig::validate`](crate::ga::QueensConfig::validate).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("n_queens must be at least 1, got {0}")]
    BoardTooSmall(usize),

    #[error("population_size must be at least 1, got {0}")]
    EmptyPopulation(usize),

    #[error("mutation_probability_percent must be within 0..=100, got {0}")]
    MutationOutOfRange(u32),

    #[error("time_limit_ms must be positive or None")]
    ZeroTimeLimit,
}
