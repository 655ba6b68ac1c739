//! Genetic algorithm for N-Queens.
//!
//! A candidate is a placement vector (`placement[row] = column`) scored by
//! counting non-attacking queen pairs. The engine evolves a fixed-size
//! population with binary-tournament selection, single-point crossover,
//! per-gene reset mutation and single-candidate elitism.
//!
//! # Key Types
//!
//! - [`QueensConfig`]: Board size, population size, mutation rate, seed
//! - [`Candidate`]: A scored placement
//! - [`Population`]: One generation of candidates
//! - [`Selection`]: Parent selection rule
//! - [`EvolutionEngine`]: Executes the evolutionary loop
//! - [`SolveOutcome`]: Solved / not found / cancelled
//!
//! # Submodules
//!
//! - [`fitness`]: Placement scoring
//! - [`operators`]: Single-point crossover and reset mutation
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
mod engine;
pub mod fitness;
pub mod operators;
mod population;
mod selection;
mod types;

pub use config::QueensConfig;
pub use engine::{EngineState, EvolutionEngine, SolveOutcome};
pub use population::Population;
pub use selection::Selection;
pub use types::{Candidate, Placement};
