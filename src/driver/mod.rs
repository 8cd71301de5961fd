//! Game automation
//!
//! A `GameDriver` exposes a running Kilordle game as snapshots and accepts
//! guesses. `play_game` drives any such game to completion with a `Planner`.

mod simulated;

pub use simulated::{SimulatedGame, SimulationConfig};

use crate::core::{Feedback, Word};
use crate::error::PlanError;
use crate::solver::{Planner, ScoredGuess};
use log::info;
use std::time::{Duration, Instant};
use thiserror::Error;

/// Kilordle's guess allowance
pub const DEFAULT_MAX_GUESSES: usize = 1005;

/// What the player can currently see of a game
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GameState {
    /// Every guess made so far, shared by all boards
    pub guess_history: Vec<Word>,
    /// Feedback history of each visible board, aligned with `guess_history`
    pub result_histories: Vec<Vec<Feedback>>,
    /// Unsolved boards, visible or not
    pub remaining: usize,
}

impl GameState {
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.remaining == 0
    }

    #[must_use]
    pub fn visible(&self) -> usize {
        self.result_histories.len()
    }
}

/// A game the planner can play
pub trait GameDriver {
    /// Snapshot the current game
    ///
    /// # Errors
    /// Implementation-specific failures reading the game.
    fn read_state(&mut self) -> Result<GameState, DriverError>;

    /// Enter a guess
    ///
    /// # Errors
    /// `DriverError::UnknownWord` if the game rejects the word,
    /// `DriverError::GameOver` if every board is already solved.
    fn submit_guess(&mut self, guess: Word) -> Result<(), DriverError>;
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DriverError {
    #[error("{0} is not an accepted guess")]
    UnknownWord(Word),
    #[error("the game is already over")]
    GameOver,
    #[error("gave up after {limit} guesses")]
    GuessLimit { limit: usize },
    #[error("{requested} boards requested but only {available} answers are known")]
    NotEnoughAnswers { requested: usize, available: usize },
    #[error(transparent)]
    Plan(#[from] PlanError),
}

/// Limits for an automatic game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOptions {
    pub max_guesses: usize,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            max_guesses: DEFAULT_MAX_GUESSES,
        }
    }
}

/// One completed turn of `play_game`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TurnReport {
    /// 1-based turn number
    pub turn: usize,
    pub guess: ScoredGuess,
    /// Unsolved boards before the guess
    pub remaining: usize,
    /// Visible boards before the guess
    pub visible: usize,
    /// Time spent picking the guess
    pub elapsed: Duration,
}

/// Outcome of a finished game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSummary {
    pub guesses: Vec<Word>,
}

impl GameSummary {
    #[must_use]
    pub fn turns(&self) -> usize {
        self.guesses.len()
    }
}

/// Play a game until every board is solved
///
/// Reads the state, picks a guess, submits it and reports the turn to
/// `observer`, until the game reports no boards remaining.
///
/// # Errors
/// Returns `DriverError::GuessLimit` once `options.max_guesses` guesses have
/// been submitted without finishing, and propagates driver and planner errors.
pub fn play_game<D, F>(
    driver: &mut D,
    planner: &Planner<'_>,
    options: &GameOptions,
    mut observer: F,
) -> Result<GameSummary, DriverError>
where
    D: GameDriver + ?Sized,
    F: FnMut(&TurnReport),
{
    let mut guesses = Vec::new();
    loop {
        let state = driver.read_state()?;
        if state.is_finished() {
            return Ok(GameSummary { guesses });
        }
        if guesses.len() >= options.max_guesses {
            return Err(DriverError::GuessLimit {
                limit: options.max_guesses,
            });
        }

        let start = Instant::now();
        let guess = planner.pick_scored(
            &state.guess_history,
            &state.result_histories,
            state.remaining,
        )?;
        let elapsed = start.elapsed();

        driver.submit_guess(guess.word)?;
        guesses.push(guess.word);
        info!(
            "guess {}: {} (score {:.2}, {} boards left)",
            guesses.len(),
            guess.word,
            guess.score,
            state.remaining
        );

        observer(&TurnReport {
            turn: guesses.len(),
            guess,
            remaining: state.remaining,
            visible: state.visible(),
            elapsed,
        });
    }
}
