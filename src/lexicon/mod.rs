//! Answer pool and extended vocabulary
//!
//! The answer pool holds every word that can be a board's answer; the
//! extended vocabulary holds further words the game accepts as guesses.
//!
//! The packaged vocabulary is only the `a` section of the accepted-guess
//! list. Pass a full list with `--vocabulary` (or `Lexicon::new`) to plan
//! over every accepted guess.

mod embedded;
pub mod loader;

use crate::core::Word;
use crate::error::LexiconError;
use once_cell::sync::OnceCell;
use rustc_hash::FxHashSet;

/// The two word lists a game is played with
#[derive(Debug, Clone)]
pub struct Lexicon {
    answers: Vec<Word>,
    extended: Vec<Word>,
    known: FxHashSet<Word>,
}

impl Lexicon {
    /// Build a lexicon from raw lists
    ///
    /// Duplicates are dropped keeping the first occurrence, and extended words
    /// that are also answers are only kept in the answer pool.
    ///
    /// # Errors
    /// Returns `LexiconError::Empty` if the answer pool is empty.
    ///
    /// # Examples
    /// ```
    /// use kilordle_planner::core::Word;
    /// use kilordle_planner::lexicon::Lexicon;
    ///
    /// let w = |s| Word::new(s).unwrap();
    /// let lexicon = Lexicon::new(vec![w("crane"), w("slate")], vec![w("slate"), w("deair")]).unwrap();
    /// assert_eq!(lexicon.extended(), [w("deair")]);
    /// assert_eq!(lexicon.guess_pool().count(), 3);
    /// ```
    pub fn new(answers: Vec<Word>, extended: Vec<Word>) -> Result<Self, LexiconError> {
        if answers.is_empty() {
            return Err(LexiconError::Empty {
                list: "answers".to_string(),
            });
        }

        let mut known = FxHashSet::default();
        let answers: Vec<Word> = answers.into_iter().filter(|w| known.insert(*w)).collect();
        let extended: Vec<Word> = extended.into_iter().filter(|w| known.insert(*w)).collect();

        Ok(Self {
            answers,
            extended,
            known,
        })
    }

    /// The packaged lists, decoded once per process
    ///
    /// # Errors
    /// Returns `LexiconError` if a packaged list fails to decode, which only
    /// happens with a corrupt build.
    pub fn embedded() -> Result<&'static Self, LexiconError> {
        static EMBEDDED: OnceCell<Lexicon> = OnceCell::new();
        EMBEDDED.get_or_try_init(|| Self::new(embedded::answers()?, embedded::other_words()?))
    }

    #[must_use]
    pub fn answers(&self) -> &[Word] {
        &self.answers
    }

    #[must_use]
    pub fn extended(&self) -> &[Word] {
        &self.extended
    }

    /// Every accepted guess, answers first
    pub fn guess_pool(&self) -> impl Iterator<Item = &Word> {
        self.answers.iter().chain(self.extended.iter())
    }

    /// Whether the game accepts `word` as a guess
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.known.contains(word)
    }

    /// Number of accepted guesses
    #[must_use]
    pub fn len(&self) -> usize {
        self.known.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.known.is_empty()
    }
}
