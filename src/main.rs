//! Command-line front end for the N-Queens genetic algorithm.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use u_nqueens::board::{side_by_side, summary, BoardStyle, BANNER, REPORT_COLUMN_WIDTH};
use u_nqueens::ga::{EvolutionEngine, QueensConfig, Selection, SolveOutcome};

/// Solve N-Queens with a genetic algorithm.
#[derive(Parser, Debug)]
#[command(name = "u-nqueens", version, about)]
struct Cli {
    /// Number of queens (board size)
    #[arg(short = 'n', long = "n-queens", default_value_t = 8)]
    n_queens: usize,

    /// Population size
    #[arg(short = 'p', long = "population", default_value_t = 100)]
    population: usize,

    /// Per-gene mutation probability in percent (0-100)
    #[arg(short = 'm', long = "mutation-probability", default_value_t = 10)]
    mutation_probability: u32,

    /// Maximum number of generations
    #[arg(short = 'g', long = "generations", default_value_t = 100)]
    generations: usize,

    /// Random seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// Stop after this many milliseconds
    #[arg(long = "time-limit-ms")]
    time_limit_ms: Option<u64>,

    /// Parent selection rule
    #[arg(long, value_enum, default_value_t = SelectionArg::Inverted)]
    selection: SelectionArg,

    /// Draw the board without ANSI colours
    #[arg(long)]
    plain: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SelectionArg {
    /// Lower-fitness draw wins
    Inverted,
    /// Higher-fitness draw wins
    Tournament,
}

impl From<SelectionArg> for Selection {
    fn from(arg: SelectionArg) -> Self {
        match arg {
            SelectionArg::Inverted => Selection::InvertedTournament,
            SelectionArg::Tournament => Selection::Tournament,
        }
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    if let Err(e) = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .try_init()
    {
        eprintln!("logging disabled: {e}");
    }
}

/// Flag set by Ctrl-C so the run stops after the current generation.
fn install_interrupt_flag() -> Result<Arc<AtomicBool>> {
    let flag = Arc::new(AtomicBool::new(false));
    let handler_flag = flag.clone();
    ctrlc::set_handler(move || handler_flag.store(true, Ordering::Relaxed))
        .context("failed to install Ctrl-C handler")?;
    Ok(flag)
}

fn outcome_line(outcome: SolveOutcome, max_generations: usize, interrupted: bool) -> String {
    match outcome {
        SolveOutcome::Solved { generation } => format!("Solved in generation {generation}"),
        SolveOutcome::NotFound => format!("No solution within {max_generations} generations"),
        SolveOutcome::Cancelled { generations } if interrupted => {
            format!("Interrupted after {generations} generations")
        }
        SolveOutcome::Cancelled { generations } => {
            format!("Stopped early after {generations} generations")
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = QueensConfig::new(cli.population, cli.n_queens, cli.mutation_probability)
        .with_selection(cli.selection.into());
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }
    if let Some(ms) = cli.time_limit_ms {
        config = config.with_time_limit_ms(ms);
    }

    let mut engine = EvolutionEngine::new(config).context("invalid solver configuration")?;

    let interrupt = install_interrupt_flag()?;

    let start = Instant::now();
    let outcome = engine.solve_with_cancel(cli.generations, Some(interrupt.clone()));
    let elapsed = start.elapsed();
    let interrupted = interrupt.load(Ordering::Relaxed);

    let style = if cli.plain {
        BoardStyle::Plain
    } else {
        BoardStyle::Ansi
    };
    let report = format!(
        "Duration: {elapsed:?}\n{}\n{}",
        outcome_line(outcome, cli.generations, interrupted),
        summary(
            engine.best_candidate(),
            engine.target_fitness(),
            engine.current_generation(),
            style,
        )
    );
    print!("{}", side_by_side(BANNER, &report, REPORT_COLUMN_WIDTH));

    Ok(())
}
