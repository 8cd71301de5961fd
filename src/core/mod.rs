//! Core domain types for Kilordle
//!
//! Words, feedback rows and the rule that decides whether a candidate word is
//! consistent with what a board has shown so far.

mod feedback;
mod word;

pub use feedback::{Feedback, FeedbackError, Mark, is_possible_history};
pub use word::{ALPHABET_SIZE, WORD_LENGTH, Word, WordError};
