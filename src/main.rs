//! Kilordle Planner - CLI
//!
//! Picks guesses for a Kilordle snapshot, explains the planner's view of one,
//! or plays whole seeded games against an in-process Kilordle.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use kilordle_planner::{
    commands::{Snapshot, analyze_snapshot, pick_next, run_simulation},
    core::Word,
    driver::{DEFAULT_MAX_GUESSES, GameOptions, SimulationConfig},
    lexicon::{Lexicon, loader::load_from_file},
    output::{print_analysis_result, print_pick_result, print_simulation_result},
    solver::{DEFAULT_FALLBACK, Planner, PlannerConfig, SearchMode},
};
use log::LevelFilter;
use rayon::ThreadPoolBuilder;
use std::borrow::Cow;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "kilordle",
    about = "Guess planner for Kilordle, the 1000-board Wordle variant",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Answer pool file (one word per line, optionally .gz) instead of the packaged list
    #[arg(long, global = true)]
    answers: Option<PathBuf>,

    /// Extra accepted guesses file instead of the packaged list
    #[arg(long, global = true)]
    vocabulary: Option<PathBuf>,

    /// Evaluate guesses on one thread
    #[arg(long, global = true)]
    sequential: bool,

    /// Worker threads for the parallel search (default: one per core)
    #[arg(short = 't', long, global = true)]
    threads: Option<usize>,

    /// Guess to fall back on when nothing scores above zero
    #[arg(long, global = true, default_value = DEFAULT_FALLBACK)]
    fallback: String,

    /// Log planner internals (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Pick the next guess for a game snapshot
    Pick {
        #[command(flatten)]
        state: StateArgs,
    },

    /// Show candidates per board and rank the best guesses
    Analyze {
        #[command(flatten)]
        state: StateArgs,

        /// Number of guesses to list
        #[arg(short = 'k', long, default_value = "10")]
        top: usize,
    },

    /// Play a full simulated game
    Simulate {
        /// Number of hidden boards
        #[arg(short, long, default_value = "1000")]
        boards: usize,

        /// Boards shown at once
        #[arg(long, default_value = "32")]
        visible: usize,

        /// Seed for drawing the answers
        #[arg(short, long, default_value = "0")]
        seed: u64,

        /// Give up after this many guesses
        #[arg(short, long, default_value_t = DEFAULT_MAX_GUESSES)]
        max_guesses: usize,

        /// Hide the progress bar
        #[arg(short, long)]
        quiet: bool,
    },
}

#[derive(Args)]
struct StateArgs {
    /// Guesses made so far, in order
    #[arg(short, long = "guess", num_args = 1..)]
    guesses: Vec<String>,

    /// Feedback rows of one visible board, comma-separated, one per guess
    /// (O/G exact, o/Y present, space/-/. absent), or "" before any guess;
    /// repeat per board
    #[arg(short, long = "board")]
    boards: Vec<String>,

    /// Unsolved boards, visible or not
    #[arg(short, long)]
    remaining: usize,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Some(threads) = cli.threads {
        ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .context("could not configure the thread pool")?;
    }

    let lexicon = load_lexicon(cli.answers.as_ref(), cli.vocabulary.as_ref())?;
    let config = PlannerConfig {
        search: if cli.sequential {
            SearchMode::Sequential
        } else {
            SearchMode::Parallel
        },
        fallback: Word::new(&cli.fallback.to_lowercase())
            .with_context(|| format!("invalid fallback word {:?}", cli.fallback))?,
    };
    let planner = Planner::new(&lexicon).with_config(config);

    match cli.command {
        Commands::Pick { state } => run_pick_command(&planner, &state),
        Commands::Analyze { state, top } => run_analyze_command(&planner, &state, top),
        Commands::Simulate {
            boards,
            visible,
            seed,
            max_guesses,
            quiet,
        } => {
            let config = SimulationConfig {
                boards,
                visible,
                seed,
            };
            let options = GameOptions { max_guesses };
            run_simulate_command(&lexicon, &planner, &config, &options, !quiet)
        }
    }
}

/// Install `env_logger`, honouring `RUST_LOG` over `-v`
fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(LevelFilter::Warn)
        .filter_module("kilordle_planner", level)
        .parse_default_env()
        .init();
}

/// The packaged lists, with either replaced by a file if given
fn load_lexicon(
    answers: Option<&PathBuf>,
    vocabulary: Option<&PathBuf>,
) -> Result<Cow<'static, Lexicon>> {
    let packaged = Lexicon::embedded().context("packaged word lists are corrupt")?;
    if answers.is_none() && vocabulary.is_none() {
        return Ok(Cow::Borrowed(packaged));
    }

    let answers = match answers {
        Some(path) => load_from_file(path)
            .with_context(|| format!("failed to load answers from {}", path.display()))?,
        None => packaged.answers().to_vec(),
    };
    let vocabulary = match vocabulary {
        Some(path) => load_from_file(path)
            .with_context(|| format!("failed to load vocabulary from {}", path.display()))?,
        None => packaged.extended().to_vec(),
    };

    Ok(Cow::Owned(Lexicon::new(answers, vocabulary)?))
}

fn parse_state(state: &StateArgs) -> Result<Snapshot> {
    Snapshot::parse(&state.guesses, &state.boards, state.remaining)
        .context("invalid game snapshot")
}

fn run_pick_command(planner: &Planner<'_>, state: &StateArgs) -> Result<()> {
    let snapshot = parse_state(state)?;
    let result = pick_next(planner, &snapshot)?;
    print_pick_result(&result);
    Ok(())
}

fn run_analyze_command(planner: &Planner<'_>, state: &StateArgs, top: usize) -> Result<()> {
    let snapshot = parse_state(state)?;
    let result = analyze_snapshot(planner, &snapshot, top)?;
    print_analysis_result(&result);
    Ok(())
}

fn run_simulate_command(
    lexicon: &Lexicon,
    planner: &Planner<'_>,
    config: &SimulationConfig,
    options: &GameOptions,
    show_progress: bool,
) -> Result<()> {
    println!(
        "🎯 Simulating {} boards ({} visible, seed {})...",
        config.boards, config.visible, config.seed
    );
    let result = run_simulation(lexicon, planner, config, options, show_progress)?;
    print_simulation_result(&result);
    Ok(())
}
