//! Simulated game command
//!
//! Plays a whole seeded game against the in-process Kilordle and collects
//! timing for the summary.

use crate::driver::{
    DriverError, GameOptions, GameSummary, SimulatedGame, SimulationConfig, TurnReport,
    play_game,
};
use crate::lexicon::Lexicon;
use crate::solver::Planner;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::{Duration, Instant};

/// Result of a simulated game
#[derive(Debug, Clone)]
pub struct SimulationResult {
    pub config: SimulationConfig,
    pub summary: GameSummary,
    pub total_time: Duration,
    /// Longest time spent picking a single guess
    pub slowest_turn: Duration,
    /// First turn on which every unsolved board was visible
    pub all_visible_turn: Option<usize>,
}

impl SimulationResult {
    /// Boards solved per guess, 0 for a game that needed no guesses
    #[must_use]
    pub fn boards_per_guess(&self) -> f64 {
        match self.summary.turns() {
            0 => 0.0,
            turns => self.config.boards as f64 / turns as f64,
        }
    }
}

/// Play a simulated game to the end
///
/// # Errors
/// Returns `DriverError` if the game cannot be set up, the planner rejects a
/// state, or the guess limit is reached.
pub fn run_simulation(
    lexicon: &Lexicon,
    planner: &Planner<'_>,
    config: &SimulationConfig,
    options: &GameOptions,
    show_progress: bool,
) -> Result<SimulationResult, DriverError> {
    let mut game = SimulatedGame::new(lexicon, config)?;

    let pb = if show_progress {
        ProgressBar::new(config.boards as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} solved | {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
    );

    let mut slowest_turn = Duration::ZERO;
    let mut all_visible_turn = None;
    let start = Instant::now();

    let outcome = play_game(&mut game, planner, options, |report: &TurnReport| {
        slowest_turn = slowest_turn.max(report.elapsed);
        if all_visible_turn.is_none() && report.turn > 1 && report.visible == report.remaining {
            all_visible_turn = Some(report.turn);
        }
        pb.set_position((config.boards - report.remaining) as u64);
        pb.set_message(format!("#{} {}", report.turn, report.guess.word));
    });

    match outcome {
        Ok(summary) => {
            pb.set_position(config.boards as u64);
            pb.finish_with_message("Complete!");
            Ok(SimulationResult {
                config: *config,
                summary,
                total_time: start.elapsed(),
                slowest_turn,
                all_visible_turn,
            })
        }
        Err(err) => {
            pb.abandon_with_message("Stopped");
            Err(err)
        }
    }
}
