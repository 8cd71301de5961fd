//! Error types for planning and word list loading

use crate::core::{FeedbackError, WordError};
use thiserror::Error;

/// Caller-input contract violations detected while planning
///
/// A candidate failing a board's history is not an error; these only cover
/// state that cannot describe a real game.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanError {
    #[error("invalid word: {0}")]
    InvalidWord(#[from] WordError),
    #[error("invalid feedback: {0}")]
    InvalidFeedback(#[from] FeedbackError),
    #[error("{guesses} guesses made but {results} results given")]
    HistoryLengthMismatch { guesses: usize, results: usize },
    #[error("board {board} has {results} results but {guesses} guesses have been made")]
    BoardHistoryMismatch {
        board: usize,
        guesses: usize,
        results: usize,
    },
    #[error("{remaining} boards remaining is fewer than the {visible} visible boards")]
    TooFewRemaining { remaining: usize, visible: usize },
    #[error("there are no boards left to plan for")]
    NothingRemaining,
    #[error("the answer pool is empty")]
    EmptyPool,
}

/// Problems with a packaged or user-supplied word list
#[derive(Debug, Error)]
pub enum LexiconError {
    #[error("could not read word list")]
    Io(#[from] std::io::Error),
    #[error("word list {list} has an invalid word {text:?} on line {line}")]
    InvalidEntry {
        list: String,
        line: usize,
        text: String,
        #[source]
        source: WordError,
    },
    #[error("word list {list} is empty")]
    Empty { list: String },
}
