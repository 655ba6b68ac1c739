//! Generational loop.
//!
//! [`EvolutionEngine`] owns one population at a time and drives it through
//! generations: select → crossover → mutate → elitism → replace, until a
//! conflict-free candidate appears or the generation budget runs out.

use super::config::QueensConfig;
use super::operators::crossover;
use super::population::Population;
use super::types::Candidate;
use crate::error::ConfigError;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Lifecycle of an engine.
///
/// `Seeded → Evolving → Solved | Exhausted`. A run stopped by cancellation
/// or the time limit stays in `Evolving`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EngineState {
    /// Initial population created, no generation run yet.
    Seeded,
    /// At least one generation created, no terminal outcome yet.
    Evolving,
    /// The best candidate reached the target fitness.
    Solved,
    /// The last `solve` call used its whole budget without a solution.
    Exhausted,
}

/// Result of [`EvolutionEngine::solve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SolveOutcome {
    /// A conflict-free candidate was found after `generation` generations of
    /// this call. 0 means the population was already solved.
    Solved {
        /// Generation (1-based within the call) in which the target was hit.
        generation: usize,
    },

    /// The generation budget ran out without reaching the target fitness.
    NotFound,

    /// Stopped early by the cancel flag or the configured time limit.
    Cancelled {
        /// Generations completed before stopping.
        generations: usize,
    },
}

impl SolveOutcome {
    /// Generation at which the target was reached, if it was.
    pub fn generation(&self) -> Option<usize> {
        match self {
            SolveOutcome::Solved { generation } => Some(*generation),
            _ => None,
        }
    }

    /// True for [`SolveOutcome::Solved`].
    pub fn is_solved(&self) -> bool {
        matches!(self, SolveOutcome::Solved { .. })
    }
}

/// Genetic-algorithm engine for one N-Queens run.
///
/// The engine is generic over its random source so tests can inject a
/// seeded generator. All draws happen in a fixed order, so equal seeds give
/// equal runs.
///
/// # Usage
///
/// ```
/// use u_nqueens::ga::{EvolutionEngine, QueensConfig, Selection, SolveOutcome};
///
/// let config = QueensConfig::new(100, 4, 10)
///     .with_selection(Selection::Tournament)
///     .with_seed(42);
/// let mut engine = EvolutionEngine::new(config).unwrap();
///
/// match engine.solve(1000) {
///     SolveOutcome::Solved { generation } => {
///         assert!(generation <= engine.current_generation());
///         assert!(engine.best_candidate().is_solution());
///     }
///     other => panic!("4-queens should solve quickly, got {other:?}"),
/// }
/// ```
#[derive(Debug)]
pub struct EvolutionEngine<R: Rng = StdRng> {
    config: QueensConfig,
    population: Population,
    generation: usize,
    state: EngineState,
    fitness_history: Vec<usize>,
    rng: R,
}

impl EvolutionEngine<StdRng> {
    /// Creates an engine seeded from `config.seed`, or from OS entropy when
    /// no seed is set.
    pub fn new(config: QueensConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::with_rng(config, rng)
    }

    /// Creates an engine from the three core parameters with default
    /// selection and an entropy-seeded generator.
    pub fn from_params(
        population_size: usize,
        n_queens: usize,
        mutation_probability_percent: u32,
    ) -> Result<Self, ConfigError> {
        Self::new(QueensConfig::new(
            population_size,
            n_queens,
            mutation_probability_percent,
        ))
    }
}

impl<R: Rng> EvolutionEngine<R> {
    /// Creates an engine that draws from `rng`.
    ///
    /// `config.seed` is ignored; the caller owns seeding.
    pub fn with_rng(config: QueensConfig, mut rng: R) -> Result<Self, ConfigError> {
        config.validate()?;

        let population = Population::random(config.n_queens, config.population_size, &mut rng);
        let best = best_of(&population).fitness();
        debug!(
            n_queens = config.n_queens,
            population_size = config.population_size,
            best_fitness = best,
            "seeded initial population"
        );

        Ok(Self {
            config,
            population,
            generation: 0,
            state: EngineState::Seeded,
            fitness_history: vec![best],
            rng,
        })
    }

    /// The configuration this engine was built with.
    pub fn config(&self) -> &QueensConfig {
        &self.config
    }

    /// Fitness of a conflict-free placement for this board size.
    pub fn target_fitness(&self) -> usize {
        self.config.target_fitness()
    }

    /// Current lifecycle state.
    pub fn state(&self) -> EngineState {
        self.state
    }

    /// Number of generations created so far.
    pub fn current_generation(&self) -> usize {
        self.generation
    }

    /// The current population.
    pub fn population(&self) -> &Population {
        &self.population
    }

    /// Best fitness after seeding and after every generation since.
    ///
    /// Grows by one entry per generation for the lifetime of the engine, so
    /// an unbounded `solve` (e.g. `usize::MAX` with a time limit) keeps
    /// growing it until it stops.
    pub fn fitness_history(&self) -> &[usize] {
        &self.fitness_history
    }

    /// Candidate with the highest fitness in the current population.
    ///
    /// Ties go to the first occurrence.
    pub fn best_candidate(&self) -> &Candidate {
        best_of(&self.population)
    }

    /// Replaces the population with the next generation.
    ///
    /// Builds `population_size - 1` children from selected parents, then
    /// appends the previous best unchanged.
    pub fn create_next_generation(&mut self) {
        self.generation += 1;

        let size = self.config.population_size;
        let selection = self.config.selection;
        let mutation = self.config.mutation_probability_percent;
        let parents = self.population.members();

        let mut next = Vec::with_capacity(size);
        for _ in 1..size {
            let a = selection.select(parents, &mut self.rng);
            let b = selection.select(parents, &mut self.rng);
            next.push(crossover(a, b, mutation, self.generation, &mut self.rng));
        }
        next.push(best_of(&self.population).clone());

        self.population = Population::from_members(next, self.generation);
        self.state = EngineState::Evolving;

        let best = self.best_candidate().fitness();
        self.fitness_history.push(best);
        debug!(
            generation = self.generation,
            best_fitness = best,
            mean_fitness = self.population.mean_fitness(),
            "generation complete"
        );
    }

    /// Evolves for at most `max_generations` generations.
    ///
    /// Returns as soon as the best candidate reaches the target fitness.
    pub fn solve(&mut self, max_generations: usize) -> SolveOutcome {
        self.solve_with_cancel(max_generations, None)
    }

    /// Like [`solve`](Self::solve), with an optional cancellation token.
    ///
    /// The flag and the configured time limit are checked before each
    /// generation; a generation in progress always completes.
    pub fn solve_with_cancel(
        &mut self,
        max_generations: usize,
        cancel: Option<Arc<AtomicBool>>,
    ) -> SolveOutcome {
        let target = self.target_fitness();

        if self.best_candidate().fitness() == target {
            self.state = EngineState::Solved;
            info!(generation = 0, "initial population already solved");
            return SolveOutcome::Solved { generation: 0 };
        }

        let start = Instant::now();
        let time_limit = self.config.time_limit_ms.map(Duration::from_millis);

        for k in 0..max_generations {
            let flagged = cancel
                .as_ref()
                .is_some_and(|flag| flag.load(Ordering::Relaxed));
            let timed_out = time_limit.is_some_and(|limit| start.elapsed() >= limit);
            if flagged || timed_out {
                info!(
                    generations = k,
                    best_fitness = self.best_candidate().fitness(),
                    timed_out,
                    "search stopped early"
                );
                return SolveOutcome::Cancelled { generations: k };
            }

            self.create_next_generation();

            if self.best_candidate().fitness() == target {
                self.state = EngineState::Solved;
                info!(generation = k + 1, "solution found");
                return SolveOutcome::Solved { generation: k + 1 };
            }
        }

        self.state = EngineState::Exhausted;
        info!(
            max_generations,
            best_fitness = self.best_candidate().fitness(),
            target_fitness = target,
            "no solution within generation budget"
        );
        SolveOutcome::NotFound
    }
}

/// Best candidate of a population the engine built.
fn best_of(population: &Population) -> &Candidate {
    population
        .best()
        .expect("engine population must not be empty")
}

// ============================================================================
// Tests
// ============================================================================
