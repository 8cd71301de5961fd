//! History scoring
//!
//! Measures how much the guesses made so far would already have revealed
//! about a word if it were some board's answer. Each position scores:
//! - 3 if some guess had the same letter at that position (it would show exact)
//! - 1 otherwise, if the letter appears anywhere in some guess (it would show present)
//! - 0 if no guess touched the letter
//!
//! The total lies in `0..=15`; a word at 15 has been guessed letter-for-letter
//! and can no longer be an unsolved board's answer.

use crate::core::{WORD_LENGTH, Word};

/// Score of a position pinned by an earlier guess
pub const EXACT_SCORE: u8 = 3;

/// Score of a letter seen somewhere in an earlier guess
pub const PRESENT_SCORE: u8 = 1;

/// Highest possible history score
pub const MAX_SCORE: u8 = EXACT_SCORE * WORD_LENGTH as u8;

/// Per-position history score of a word
///
/// Can be extended one guess at a time, which is what lets the planner try
/// thousands of hypothetical guesses without rescoring the whole history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryScore {
    word: Word,
    positions: [u8; WORD_LENGTH],
}

impl HistoryScore {
    /// Score of a word against an empty history
    #[must_use]
    pub const fn new(word: Word) -> Self {
        Self {
            word,
            positions: [0; WORD_LENGTH],
        }
    }

    /// Score of a word against a full history
    #[must_use]
    pub fn for_history(word: Word, history: &[Word]) -> Self {
        let mut score = Self::new(word);
        for guess in history {
            score.add_guess(guess);
        }
        score
    }

    /// Fold one more guess into the score
    pub fn add_guess(&mut self, guess: &Word) {
        for (i, position) in self.positions.iter_mut().enumerate() {
            let letter = self.word.char_at(i);
            if guess.char_at(i) == letter {
                *position = EXACT_SCORE;
            } else if *position < PRESENT_SCORE && guess.has_letter(letter) {
                *position = PRESENT_SCORE;
            }
        }
    }

    /// Copy of this score with one more guess folded in
    #[inline]
    #[must_use]
    pub fn with_guess(mut self, guess: &Word) -> Self {
        self.add_guess(guess);
        self
    }

    #[inline]
    #[must_use]
    pub const fn word(&self) -> Word {
        self.word
    }

    #[inline]
    #[must_use]
    pub const fn positions(&self) -> &[u8; WORD_LENGTH] {
        &self.positions
    }

    /// Sum of the per-position scores
    #[inline]
    #[must_use]
    pub fn total(&self) -> u8 {
        self.positions.iter().sum()
    }

    /// Whether every position is already pinned
    #[inline]
    #[must_use]
    pub fn is_maxed(&self) -> bool {
        self.total() == MAX_SCORE
    }
}

/// History score of a word
///
/// # Examples
/// ```
/// use kilordle_planner::core::Word;
/// use kilordle_planner::solver::score::score_in_history;
///
/// let history = [Word::new("hello").unwrap(), Word::new("world").unwrap()];
/// assert_eq!(score_in_history(&history, &Word::new("hello").unwrap()), 15);
/// assert_eq!(score_in_history(&history, &Word::new("holds").unwrap()), 10);
/// ```
#[must_use]
pub fn score_in_history(history: &[Word], word: &Word) -> u8 {
    HistoryScore::for_history(*word, history).total()
}

/// Mean history score over a set of words
///
/// An empty set averages to 0.
#[must_use]
pub fn average_score(history: &[Word], words: &[Word]) -> f64 {
    mean(words.iter().map(|word| score_in_history(history, word)), words.len())
}

/// Mean score of prepared words once `guess` is added to their history
#[must_use]
pub fn average_with_guess(scores: &[HistoryScore], guess: &Word) -> f64 {
    mean(
        scores.iter().map(|score| score.with_guess(guess).total()),
        scores.len(),
    )
}

pub(crate) fn mean(totals: impl Iterator<Item = u8>, count: usize) -> f64 {
    if count == 0 {
        return 0.0;
    }
    let sum: u64 = totals.map(u64::from).sum();
    sum as f64 / count as f64
}
