//! Next-guess command
//!
//! Turns the text form of a game snapshot into typed values and asks the
//! planner for the next guess.

use crate::core::{Feedback, Word};
use crate::error::PlanError;
use crate::solver::{Planner, ScoredGuess};
use std::time::{Duration, Instant};

/// A game snapshot given on the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub guesses: Vec<Word>,
    pub boards: Vec<Vec<Feedback>>,
    pub remaining: usize,
}

impl Snapshot {
    /// Parse guesses and comma-separated board rows
    ///
    /// Guesses are case-insensitive. Each board string holds one feedback row
    /// per guess, separated by commas; an empty string is a board with no
    /// rows yet.
    ///
    /// # Errors
    /// Returns `PlanError::InvalidWord` or `PlanError::InvalidFeedback` for
    /// text that does not parse.
    ///
    /// # Examples
    /// ```
    /// use kilordle_planner::commands::Snapshot;
    ///
    /// let snapshot = Snapshot::parse(&["CRANE", "moist"], &["..O.o,.O..."], 40).unwrap();
    /// assert_eq!(snapshot.guesses.len(), 2);
    /// assert_eq!(snapshot.boards[0].len(), 2);
    /// ```
    pub fn parse<G, B>(guesses: &[G], boards: &[B], remaining: usize) -> Result<Self, PlanError>
    where
        G: AsRef<str>,
        B: AsRef<str>,
    {
        let guesses = guesses
            .iter()
            .map(|g| Word::new(&g.as_ref().trim().to_lowercase()))
            .collect::<Result<Vec<_>, _>>()?;

        let boards = boards
            .iter()
            .map(|rows| match rows.as_ref() {
                // A board shown before any guess has no rows
                "" => Ok(Vec::new()),
                rows => rows
                    .split(',')
                    .map(str::parse::<Feedback>)
                    .collect::<Result<Vec<_>, _>>(),
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            guesses,
            boards,
            remaining,
        })
    }
}

/// Result of picking a guess
#[derive(Debug, Clone, Copy)]
pub struct PickResult {
    pub guess: ScoredGuess,
    pub visible: usize,
    pub remaining: usize,
    pub elapsed: Duration,
}

/// Pick the next guess for a snapshot
///
/// # Errors
/// Propagates the planner's validation errors.
pub fn pick_next(planner: &Planner<'_>, snapshot: &Snapshot) -> Result<PickResult, PlanError> {
    let start = Instant::now();
    let guess = planner.pick_scored(&snapshot.guesses, &snapshot.boards, snapshot.remaining)?;
    Ok(PickResult {
        guess,
        visible: snapshot.boards.len(),
        remaining: snapshot.remaining,
        elapsed: start.elapsed(),
    })
}
