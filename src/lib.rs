//! Genetic-algorithm solver for the N-Queens placement problem.
//!
//! Given a board of size N, the solver evolves a population of candidate
//! placements (one queen per row) toward a configuration in which no two
//! queens attack each other.
//!
//! - [`ga`]: Candidates, fitness, selection, operators and the
//!   [`EvolutionEngine`](ga::EvolutionEngine) that runs the generational loop.
//! - [`board`]: Text rendering of a placement and the run summary.
//! - [`error`]: Configuration errors.
//!
//! # Example
//!
//! ```
//! use u_nqueens::ga::{EvolutionEngine, QueensConfig, Selection};
//!
//! let config = QueensConfig::new(100, 6, 20)
//!     .with_selection(Selection::Tournament)
//!     .with_seed(7);
//! let mut engine = EvolutionEngine::new(config)?;
//! let outcome = engine.solve(3000);
//! println!("{outcome:?} best={:?}", engine.best_candidate().placement());
//! # Ok::<(), u_nqueens::error::ConfigError>(())
//! ```

pub mod board;
pub mod error;
pub mod ga;

pub use error::ConfigError;
