//! Wordle feedback rows and consistency checking
//!
//! A feedback row holds one mark per letter of a guess:
//! - `Exact`: right letter, right position (green)
//! - `Present`: letter is in the word somewhere else (yellow)
//! - `Absent`: no further copies of the letter in the word (gray)
//!
//! Repeated letters follow the usual multiset rule: a letter is only marked
//! `Exact`/`Present` as many times as it occurs in the hidden word, and any
//! further copies in the guess are `Absent`.

use super::word::{Word, WORD_LENGTH, letter_index};
use crate::error::PlanError;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Feedback for a single letter of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    Absent,
    Present,
    Exact,
}

/// Feedback for a whole guess, one mark per position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([Mark; WORD_LENGTH]);

/// Error type for unparseable feedback rows
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedbackError {
    #[error("feedback must be exactly 5 symbols, got {0}")]
    InvalidLength(usize),
    #[error("unknown feedback symbol {0:?} (use O/G for exact, o/Y for present, space/-/. for absent)")]
    InvalidSymbol(char),
}

impl Feedback {
    /// All exact: the guess was the hidden word
    pub const SOLVED: Self = Self([Mark::Exact; WORD_LENGTH]);

    /// Nothing matched
    pub const NONE: Self = Self([Mark::Absent; WORD_LENGTH]);

    #[inline]
    #[must_use]
    pub const fn new(marks: [Mark; WORD_LENGTH]) -> Self {
        Self(marks)
    }

    #[inline]
    #[must_use]
    pub const fn marks(&self) -> &[Mark; WORD_LENGTH] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn is_solved(&self) -> bool {
        *self == Self::SOLVED
    }

    #[must_use]
    pub fn count_exact(&self) -> usize {
        self.0.iter().filter(|&&m| m == Mark::Exact).count()
    }

    #[must_use]
    pub fn count_present(&self) -> usize {
        self.0.iter().filter(|&&m| m == Mark::Present).count()
    }

    /// Calculate the feedback shown when `guess` is played against `answer`
    ///
    /// # Examples
    /// ```
    /// use kilordle_planner::core::{Feedback, Word};
    ///
    /// let guess = Word::new("sassy").unwrap();
    /// let answer = Word::new("mesas").unwrap();
    /// // Only two s's in "mesas": one lines up, one is elsewhere, the third is gray
    /// assert_eq!(Feedback::calculate(&guess, &answer).to_string(), "ooO..");
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, answer: &Word) -> Self {
        let mut marks = [Mark::Absent; WORD_LENGTH];
        let mut available = answer.letter_counts();

        // First pass: greens consume their letter
        for (i, mark) in marks.iter_mut().enumerate() {
            if guess.char_at(i) == answer.char_at(i) {
                *mark = Mark::Exact;
                available[letter_index(guess.char_at(i))] -= 1;
            }
        }

        // Second pass: yellows from what is left, left to right
        for (i, mark) in marks.iter_mut().enumerate() {
            if *mark == Mark::Exact {
                continue;
            }
            let slot = &mut available[letter_index(guess.char_at(i))];
            if *slot > 0 {
                *mark = Mark::Present;
                *slot -= 1;
            }
        }

        Self(marks)
    }

    /// Check whether `candidate` could be the hidden word that produced this
    /// feedback for `guess`
    ///
    /// Exact marks are checked and removed from the candidate's letters first,
    /// then every present mark must consume one remaining copy of its letter,
    /// and finally no absent letter may have a copy left over.
    ///
    /// # Examples
    /// ```
    /// use kilordle_planner::core::{Feedback, Word};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let feedback: Feedback = ".O.O.".parse().unwrap();
    /// assert!(!feedback.is_possible(&guess, &Word::new("brine").unwrap()));
    /// assert!(feedback.is_possible(&guess, &Word::new("drunk").unwrap()));
    /// ```
    #[must_use]
    pub fn is_possible(&self, guess: &Word, candidate: &Word) -> bool {
        let mut remaining = candidate.letter_counts();

        for (i, &mark) in self.0.iter().enumerate() {
            if mark == Mark::Exact {
                if candidate.char_at(i) != guess.char_at(i) {
                    return false;
                }
                remaining[letter_index(guess.char_at(i))] -= 1;
            }
        }

        for (i, &mark) in self.0.iter().enumerate() {
            if mark == Mark::Present {
                // A letter sitting at its own position would have shown exact
                if candidate.char_at(i) == guess.char_at(i) {
                    return false;
                }
                let slot = &mut remaining[letter_index(guess.char_at(i))];
                if *slot == 0 {
                    return false;
                }
                *slot -= 1;
            }
        }

        self.0
            .iter()
            .enumerate()
            .filter(|&(_, &mark)| mark == Mark::Absent)
            .all(|(i, _)| remaining[letter_index(guess.char_at(i))] == 0)
    }

    /// Render as colored squares
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0
            .iter()
            .map(|mark| match mark {
                Mark::Exact => '🟩',
                Mark::Present => '🟨',
                Mark::Absent => '⬜',
            })
            .collect()
    }
}

/// Check a candidate against a whole board history
///
/// `Ok(false)` just means the candidate is eliminated.
///
/// # Errors
/// Returns `PlanError::HistoryLengthMismatch` if the guess and result
/// histories are not index-aligned.
pub fn is_possible_history(
    guess_history: &[Word],
    result_history: &[Feedback],
    candidate: &Word,
) -> Result<bool, PlanError> {
    if guess_history.len() != result_history.len() {
        return Err(PlanError::HistoryLengthMismatch {
            guesses: guess_history.len(),
            results: result_history.len(),
        });
    }

    Ok(guess_history
        .iter()
        .zip(result_history)
        .all(|(guess, feedback)| feedback.is_possible(guess, candidate)))
}

impl FromStr for Feedback {
    type Err = FeedbackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbols: Vec<char> = s.chars().collect();
        if symbols.len() != WORD_LENGTH {
            return Err(FeedbackError::InvalidLength(symbols.len()));
        }

        let mut marks = [Mark::Absent; WORD_LENGTH];
        for (mark, symbol) in marks.iter_mut().zip(symbols) {
            *mark = match symbol {
                'O' | 'G' | 'g' | '🟩' => Mark::Exact,
                'o' | 'Y' | 'y' | '🟨' => Mark::Present,
                ' ' | '-' | '_' | '.' | '⬜' => Mark::Absent,
                other => return Err(FeedbackError::InvalidSymbol(other)),
            };
        }

        Ok(Self(marks))
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for mark in &self.0 {
            let symbol = match mark {
                Mark::Exact => 'O',
                Mark::Present => 'o',
                Mark::Absent => '.',
            };
            write!(f, "{symbol}")?;
        }
        Ok(())
    }
}
