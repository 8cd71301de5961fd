//! Next-guess selection
//!
//! Tries every answer and every extended-vocabulary word as the next guess and
//! keeps the one with the highest expected score. The first candidate to reach
//! the maximum wins, so the result is reproducible for a fixed word order
//! whether the search runs on one thread or many.

use super::evaluator::Evaluator;
use crate::core::{Feedback, Word};
use crate::error::PlanError;
use crate::lexicon::Lexicon;
use log::debug;
use rayon::prelude::*;
use std::time::Instant;

/// Word used when no candidate scores above zero
pub const DEFAULT_FALLBACK: &str = "deair";

/// How the candidate guesses are evaluated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchMode {
    /// Spread candidates over the rayon thread pool
    #[default]
    Parallel,
    /// Evaluate candidates one after another
    Sequential,
}

/// Planner settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlannerConfig {
    pub search: SearchMode,
    pub fallback: Word,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            search: SearchMode::default(),
            fallback: Word::new(DEFAULT_FALLBACK).expect("fallback guess is a valid word"),
        }
    }
}

/// A candidate guess with its expected score
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredGuess {
    pub word: Word,
    pub score: f64,
}

/// Chooses the next guess for a game snapshot
pub struct Planner<'a> {
    answers: &'a [Word],
    extended: &'a [Word],
    config: PlannerConfig,
}

impl<'a> Planner<'a> {
    /// Planner over a loaded lexicon
    #[must_use]
    pub fn new(lexicon: &'a Lexicon) -> Self {
        Self::from_lists(lexicon.answers(), lexicon.extended())
    }

    /// Planner over explicit word lists
    ///
    /// # Parameters
    /// - `answers`: words that can be a board's answer, also tried as guesses first
    /// - `extended`: further words accepted as guesses
    #[must_use]
    pub fn from_lists(answers: &'a [Word], extended: &'a [Word]) -> Self {
        Self {
            answers,
            extended,
            config: PlannerConfig::default(),
        }
    }

    #[must_use]
    pub const fn with_config(mut self, config: PlannerConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub const fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Every word tried as a guess, answers first
    pub fn guess_pool(&self) -> impl Iterator<Item = &'a Word> + 'a {
        self.answers.iter().chain(self.extended.iter())
    }

    /// Build the evaluator for a snapshot over this planner's answer pool
    ///
    /// # Errors
    /// See [`Evaluator::prepare`].
    pub fn prepare<R>(
        &self,
        guess_history: &[Word],
        result_histories: &[R],
        remaining: usize,
    ) -> Result<Evaluator, PlanError>
    where
        R: AsRef<[Feedback]> + Sync,
    {
        Evaluator::prepare(self.answers, guess_history, result_histories, remaining)
    }

    /// Pick the next guess to submit
    ///
    /// # Errors
    /// Returns a `PlanError` if the snapshot is inconsistent (see
    /// [`Evaluator::prepare`]).
    ///
    /// # Examples
    /// ```
    /// use kilordle_planner::core::{Feedback, Word};
    /// use kilordle_planner::solver::Planner;
    ///
    /// let answers: Vec<Word> = ["pudgy", "slate", "crane"].iter().map(|w| Word::new(w).unwrap()).collect();
    /// let planner = Planner::from_lists(&answers, &[]);
    ///
    /// let no_boards: &[Vec<Feedback>] = &[];
    /// let first = planner.pick_guess(&[], no_boards, 3).unwrap();
    /// assert_eq!(first, planner.pick_guess(&[], no_boards, 3).unwrap());
    /// ```
    pub fn pick_guess<R>(
        &self,
        guess_history: &[Word],
        result_histories: &[R],
        remaining: usize,
    ) -> Result<Word, PlanError>
    where
        R: AsRef<[Feedback]> + Sync,
    {
        Ok(self
            .pick_scored(guess_history, result_histories, remaining)?
            .word)
    }

    /// Pick the next guess along with its expected score
    ///
    /// # Errors
    /// Same as [`Planner::pick_guess`].
    pub fn pick_scored<R>(
        &self,
        guess_history: &[Word],
        result_histories: &[R],
        remaining: usize,
    ) -> Result<ScoredGuess, PlanError>
    where
        R: AsRef<[Feedback]> + Sync,
    {
        let evaluator = self.prepare(guess_history, result_histories, remaining)?;
        Ok(self.best_guess(&evaluator))
    }

    /// Search the guess pool against a prepared evaluator
    ///
    /// Returns the configured fallback with a score of 0 if nothing scores
    /// above zero.
    #[must_use]
    pub fn best_guess(&self, evaluator: &Evaluator) -> ScoredGuess {
        let start = Instant::now();
        let pool: Vec<Word> = self.guess_pool().copied().collect();

        let best = match self.config.search {
            SearchMode::Sequential => pool
                .iter()
                .enumerate()
                .map(|(index, guess)| (index, evaluator.score_with_guess(guess)))
                .filter(|&(_, score)| score > 0.0)
                .reduce(keep_better),
            SearchMode::Parallel => pool
                .par_iter()
                .enumerate()
                .map(|(index, guess)| (index, evaluator.score_with_guess(guess)))
                .filter(|&(_, score)| score > 0.0)
                .reduce_with(keep_better),
        };

        let picked = best.map_or(
            ScoredGuess {
                word: self.config.fallback,
                score: 0.0,
            },
            |(index, score)| ScoredGuess {
                word: pool[index],
                score,
            },
        );

        debug!(
            "picked {} (score {:.3}) from {} guesses in {:?}",
            picked.word,
            picked.score,
            pool.len(),
            start.elapsed()
        );
        picked
    }

    /// The `top` highest-scoring guesses, best first
    ///
    /// Ties keep guess pool order, so the first entry is the guess
    /// `best_guess` would pick.
    #[must_use]
    pub fn rank_guesses(&self, evaluator: &Evaluator, top: usize) -> Vec<ScoredGuess> {
        let pool: Vec<Word> = self.guess_pool().copied().collect();
        let mut ranked: Vec<ScoredGuess> = match self.config.search {
            SearchMode::Sequential => pool
                .iter()
                .map(|&word| ScoredGuess {
                    word,
                    score: evaluator.score_with_guess(&word),
                })
                .collect(),
            SearchMode::Parallel => pool
                .par_iter()
                .map(|&word| ScoredGuess {
                    word,
                    score: evaluator.score_with_guess(&word),
                })
                .collect(),
        };

        ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
        ranked.truncate(top);
        ranked
    }
}

/// Higher score wins; on equal scores the earlier pool index wins
fn keep_better(current: (usize, f64), other: (usize, f64)) -> (usize, f64) {
    let other_wins = other
        .1
        .total_cmp(&current.1)
        .then(current.0.cmp(&other.0))
        .is_gt();
    if other_wins { other } else { current }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|s| word(s)).collect()
    }

    fn feedback(s: &str) -> Feedback {
        s.parse().unwrap()
    }

    const NO_BOARDS: &[Vec<Feedback>] = &[];

    fn sequential() -> PlannerConfig {
        PlannerConfig {
            search: SearchMode::Sequential,
            ..PlannerConfig::default()
        }
    }

    #[test]
    fn keep_better_prefers_higher_then_earlier() {
        assert_eq!(keep_better((3, 1.0), (1, 2.0)), (1, 2.0));
        assert_eq!(keep_better((3, 2.0), (1, 1.0)), (3, 2.0));
        assert_eq!(keep_better((3, 2.0), (1, 2.0)), (1, 2.0));
        assert_eq!(keep_better((1, 2.0), (3, 2.0)), (1, 2.0));
    }

    #[test]
    fn ties_go_to_the_first_guess() {
        // Both answers are symmetric, the extended word shares no letters
        let answers = words(&["aaaaa", "bbbbb"]);
        let extended = words(&["ccccc"]);
        for config in [PlannerConfig::default(), sequential()] {
            let planner = Planner::from_lists(&answers, &extended).with_config(config);
            let picked = planner.pick_scored(&[], NO_BOARDS, 1).unwrap();
            assert_eq!(picked.word, word("aaaaa"));
            assert!((picked.score - 7.5).abs() < 1e-12);
        }
    }

    #[test]
    fn guess_pool_lists_answers_then_extended() {
        let answers = words(&["saucy", "about"]);
        let extended = words(&["sabot"]);
        let planner = Planner::from_lists(&answers, &extended);
        let pool: Vec<Word> = planner.guess_pool().copied().collect();
        assert_eq!(pool, words(&["saucy", "about", "sabot"]));

        // sabot: saucy 6, about 6
        let evaluator = planner.prepare(&[], NO_BOARDS, 2).unwrap();
        let ranked = planner.rank_guesses(&evaluator, 3);
        let sabot = ranked.iter().find(|g| g.word == word("sabot")).unwrap();
        assert!((sabot.score - 12.0).abs() < 1e-12);
    }

    #[test]
    fn falls_back_when_nothing_scores() {
        // The only visible board has no candidates and there are no unseen boards
        let answers = words(&["pudgy"]);
        let history = words(&["crane"]);
        let boards = vec![vec![feedback("OOOOO")]];
        let planner = Planner::from_lists(&answers, &[]);
        let picked = planner.pick_scored(&history, &boards, 1).unwrap();
        assert_eq!(picked.word, word(DEFAULT_FALLBACK));
        assert!(picked.score.abs() < f64::EPSILON);
    }

    #[test]
    fn custom_fallback_is_used() {
        let answers = words(&["pudgy"]);
        let boards = vec![vec![feedback("OOOOO")]];
        let config = PlannerConfig {
            fallback: word("slate"),
            ..sequential()
        };
        let planner = Planner::from_lists(&answers, &[]).with_config(config);
        assert_eq!(
            planner.pick_guess(&words(&["crane"]), &boards, 1).unwrap(),
            word("slate")
        );
    }

    #[test]
    fn sequential_and_parallel_agree() {
        let answers = words(&[
            "crane", "trite", "bribe", "slate", "brine", "prose", "drake", "grove", "pudgy",
        ]);
        let extended = words(&["moist", "deair", "lymph"]);
        let history = words(&["crane"]);
        let boards = vec![
            vec![feedback(" O  O")],
            vec![Feedback::calculate(&word("crane"), &word("pudgy"))],
        ];

        let parallel = Planner::from_lists(&answers, &extended);
        let serial = Planner::from_lists(&answers, &extended).with_config(sequential());
        assert_eq!(
            parallel.pick_scored(&history, &boards, 30).unwrap(),
            serial.pick_scored(&history, &boards, 30).unwrap()
        );
    }

    #[test]
    fn ranking_starts_with_the_pick() {
        let answers = words(&["crane", "trite", "bribe", "slate", "pudgy"]);
        let extended = words(&["moist", "lymph"]);
        let planner = Planner::from_lists(&answers, &extended);
        let evaluator = planner.prepare(&[], NO_BOARDS, 100).unwrap();

        let ranked = planner.rank_guesses(&evaluator, 3);
        assert_eq!(ranked.len(), 3);
        assert_eq!(ranked[0], planner.best_guess(&evaluator));
        assert!(ranked.windows(2).all(|pair| pair[0].score >= pair[1].score));
    }

    #[test]
    fn picking_is_idempotent_and_leaves_input_alone() {
        let answers = words(&["crane", "trite", "bribe", "slate", "pudgy"]);
        let planner = Planner::from_lists(&answers, &[]);
        let history = words(&["moist"]);
        let boards = vec![vec![Feedback::calculate(&word("moist"), &word("slate"))]];
        let before = (history.clone(), boards.clone());

        let first = planner.pick_guess(&history, &boards, 10).unwrap();
        let second = planner.pick_guess(&history, &boards, 10).unwrap();
        assert_eq!(first, second);
        assert_eq!((history, boards), before);
    }

    fn any_word() -> impl Strategy<Value = Word> {
        proptest::array::uniform5(b'a'..=b'f').prop_map(|chars| Word::from_bytes(chars).unwrap())
    }

    proptest! {
        #[test]
        fn search_modes_agree(
            answers in proptest::collection::vec(any_word(), 1..30),
            extended in proptest::collection::vec(any_word(), 0..10),
            history in proptest::collection::vec(any_word(), 0..4),
            hidden in proptest::collection::vec(any_word(), 0..4),
            unseen in 0usize..20,
        ) {
            let boards: Vec<Vec<Feedback>> = hidden
                .iter()
                .map(|answer| history.iter().map(|g| Feedback::calculate(g, answer)).collect())
                .collect();
            let remaining = (boards.len() + unseen).max(1);

            let parallel = Planner::from_lists(&answers, &extended);
            let serial = Planner::from_lists(&answers, &extended).with_config(sequential());
            prop_assert_eq!(
                parallel.pick_scored(&history, &boards, remaining).unwrap(),
                serial.pick_scored(&history, &boards, remaining).unwrap()
            );
        }
    }

    #[test]
    fn errors_propagate() {
        let answers = words(&["crane"]);
        let planner = Planner::from_lists(&answers, &[]);
        let boards = vec![vec![feedback(".....")]; 2];
        assert_eq!(
            planner.pick_guess(&words(&["moist"]), &boards, 1),
            Err(PlanError::TooFewRemaining {
                remaining: 1,
                visible: 2
            })
        );
    }
}
