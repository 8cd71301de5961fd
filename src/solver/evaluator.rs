//! Candidate filtering and expected-score evaluation
//!
//! An `Evaluator` is built once per planning cycle from a snapshot of the
//! game. It filters the answer pool down to the words each visible board can
//! still hide, estimates a "pile" of words standing in for the boards that are
//! not visible, and then scores any number of hypothetical guess histories
//! against those prepared lists.

use super::score::{HistoryScore, MAX_SCORE, average_with_guess, mean, score_in_history};
use crate::core::{Feedback, Word, is_possible_history};
use crate::error::PlanError;
use log::{debug, warn};
use rayon::prelude::*;

/// Surviving candidates for one visible board
#[derive(Debug, Clone)]
pub struct BoardCandidates {
    scores: Vec<HistoryScore>,
}

impl BoardCandidates {
    /// Number of words the board can still hide
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    pub fn words(&self) -> impl Iterator<Item = Word> + '_ {
        self.scores.iter().map(HistoryScore::word)
    }

    /// Highest history score among the survivors, `None` if there are none
    #[must_use]
    pub fn max_score(&self) -> Option<u8> {
        self.scores.iter().map(HistoryScore::total).max()
    }
}

/// Prepared scoring state for one planning cycle
///
/// Only obtainable through [`Evaluator::prepare`], so every instance has
/// validated input and fully filtered candidate lists.
#[derive(Debug, Clone)]
pub struct Evaluator {
    guess_history: Vec<Word>,
    boards: Vec<BoardCandidates>,
    pile: Vec<HistoryScore>,
    pile_cap: u8,
    pile_count: usize,
}

impl Evaluator {
    /// Filter the answer pool against a game snapshot
    ///
    /// # Parameters
    /// - `answer_pool`: every word that can be a board's answer
    /// - `guess_history`: guesses made so far, shared by every board
    /// - `result_histories`: one feedback history per visible board
    /// - `remaining`: unsolved boards, visible or not
    ///
    /// # Errors
    /// Returns a `PlanError` if fewer boards remain than are visible, no boards
    /// remain, the pool is empty, or a board's history is not aligned with
    /// `guess_history`.
    ///
    /// # Examples
    /// ```
    /// use kilordle_planner::core::{Feedback, Word};
    /// use kilordle_planner::solver::Evaluator;
    ///
    /// let pool: Vec<Word> = ["crane", "trite", "grove", "slate"]
    ///     .iter()
    ///     .map(|w| Word::new(w).unwrap())
    ///     .collect();
    /// let history = [Word::new("crane").unwrap()];
    /// let boards = [vec![".O..O".parse::<Feedback>().unwrap()]];
    ///
    /// let evaluator = Evaluator::prepare(&pool, &history, &boards, 10).unwrap();
    /// let survivors: Vec<String> = evaluator.boards()[0].words().map(|w| w.to_string()).collect();
    /// assert_eq!(survivors, ["trite", "grove"]);
    /// assert_eq!(evaluator.pile_count(), 9);
    /// ```
    pub fn prepare<R>(
        answer_pool: &[Word],
        guess_history: &[Word],
        result_histories: &[R],
        remaining: usize,
    ) -> Result<Self, PlanError>
    where
        R: AsRef<[Feedback]> + Sync,
    {
        let visible = result_histories.len();
        if remaining < visible {
            return Err(PlanError::TooFewRemaining { remaining, visible });
        }
        if remaining < 1 {
            return Err(PlanError::NothingRemaining);
        }
        if answer_pool.is_empty() {
            return Err(PlanError::EmptyPool);
        }
        for (board, results) in result_histories.iter().enumerate() {
            let results = results.as_ref().len();
            if results != guess_history.len() {
                return Err(PlanError::BoardHistoryMismatch {
                    board,
                    guesses: guess_history.len(),
                    results,
                });
            }
        }

        // Words already guessed outright are solved boards' answers
        let active: Vec<HistoryScore> = answer_pool
            .iter()
            .map(|&word| HistoryScore::for_history(word, guess_history))
            .filter(|score| !score.is_maxed())
            .collect();

        let boards = result_histories
            .par_iter()
            .map(|results| -> Result<BoardCandidates, PlanError> {
                let results = results.as_ref();
                let mut scores = Vec::new();
                for score in &active {
                    if is_possible_history(guess_history, results, &score.word())? {
                        scores.push(*score);
                    }
                }
                Ok(BoardCandidates { scores })
            })
            .collect::<Result<Vec<_>, PlanError>>()?;

        for (index, board) in boards.iter().enumerate() {
            if board.is_empty() {
                warn!("board {index} has no candidates left in the answer pool");
            }
        }

        // Unseen boards are assumed no further along than the least-solved visible one
        let pile_cap = boards
            .iter()
            .filter_map(BoardCandidates::max_score)
            .min()
            .unwrap_or(MAX_SCORE - 1);
        let pile: Vec<HistoryScore> = active
            .into_iter()
            .filter(|score| score.total() <= pile_cap)
            .collect();
        // Approximate: the unseen boards' real candidate sets are unknown
        let pile_count = remaining - visible;

        debug!(
            "prepared {} boards ({} candidates), pile of {} words capped at {} for {} unseen boards",
            boards.len(),
            boards.iter().map(BoardCandidates::len).sum::<usize>(),
            pile.len(),
            pile_cap,
            pile_count
        );

        Ok(Self {
            guess_history: guess_history.to_vec(),
            boards,
            pile,
            pile_cap,
            pile_count,
        })
    }

    /// Expected total score if the guesses were `hypothetical_history`
    ///
    /// Sums the mean history score of every board's candidates, plus the pile's
    /// mean score weighted by the number of unseen boards.
    #[must_use]
    pub fn score_extended_history(&self, hypothetical_history: &[Word]) -> f64 {
        let rescored = |scores: &[HistoryScore]| {
            mean(
                scores
                    .iter()
                    .map(|score| score_in_history(hypothetical_history, &score.word())),
                scores.len(),
            )
        };

        let visible: f64 = self.boards.iter().map(|board| rescored(&board.scores)).sum();
        visible + self.pile_count as f64 * rescored(&self.pile)
    }

    /// Expected total score of the prepared history followed by `guess`
    ///
    /// Same value as `score_extended_history` on the extended history, computed
    /// from the prepared per-word scores.
    #[must_use]
    pub fn score_with_guess(&self, guess: &Word) -> f64 {
        let visible: f64 = self
            .boards
            .iter()
            .map(|board| average_with_guess(&board.scores, guess))
            .sum();
        visible + self.pile_count as f64 * average_with_guess(&self.pile, guess)
    }

    /// Guesses the evaluator was prepared with
    #[must_use]
    pub fn guess_history(&self) -> &[Word] {
        &self.guess_history
    }

    /// Candidates for each visible board, in input order
    #[must_use]
    pub fn boards(&self) -> &[BoardCandidates] {
        &self.boards
    }

    /// Words standing in for the unseen boards
    pub fn pile_words(&self) -> impl Iterator<Item = Word> + '_ {
        self.pile.iter().map(HistoryScore::word)
    }

    #[must_use]
    pub fn pile_len(&self) -> usize {
        self.pile.len()
    }

    /// Highest history score a pile word may have
    #[must_use]
    pub const fn pile_cap(&self) -> u8 {
        self.pile_cap
    }

    /// Estimated number of boards without a visible history
    #[must_use]
    pub const fn pile_count(&self) -> usize {
        self.pile_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|s| word(s)).collect()
    }

    fn feedback(s: &str) -> Feedback {
        s.parse().unwrap()
    }

    fn pool() -> Vec<Word> {
        words(&[
            "crane", "trite", "bribe", "slate", "brine", "prose", "drake", "grove", "pudgy",
        ])
    }

    const NO_BOARDS: &[Vec<Feedback>] = &[];

    #[test]
    fn rejects_fewer_remaining_than_visible() {
        let boards = vec![vec![feedback(".O..O")]; 3];
        let err = Evaluator::prepare(&pool(), &words(&["crane"]), &boards, 2).unwrap_err();
        assert_eq!(
            err,
            PlanError::TooFewRemaining {
                remaining: 2,
                visible: 3
            }
        );
    }

    #[test]
    fn rejects_nothing_remaining() {
        let err = Evaluator::prepare(&pool(), &[], NO_BOARDS, 0).unwrap_err();
        assert_eq!(err, PlanError::NothingRemaining);
    }

    #[test]
    fn rejects_empty_pool() {
        let err = Evaluator::prepare(&[], &[], NO_BOARDS, 5).unwrap_err();
        assert_eq!(err, PlanError::EmptyPool);
    }

    #[test]
    fn rejects_misaligned_board_history() {
        let boards = vec![
            vec![feedback(".O..O")],
            vec![feedback(".O..O"), feedback(".....")],
        ];
        let err = Evaluator::prepare(&pool(), &words(&["crane"]), &boards, 10).unwrap_err();
        assert_eq!(
            err,
            PlanError::BoardHistoryMismatch {
                board: 1,
                guesses: 1,
                results: 2
            }
        );
    }

    #[test]
    fn board_candidates_are_consistent_with_history() {
        let history = words(&["crane"]);
        let results = vec![feedback(" O  O")];
        let evaluator =
            Evaluator::prepare(&pool(), &history, std::slice::from_ref(&results), 50).unwrap();

        let survivors: Vec<Word> = evaluator.boards()[0].words().collect();
        assert_eq!(survivors, words(&["trite", "bribe", "prose", "grove"]));
        for candidate in &survivors {
            assert_eq!(is_possible_history(&history, &results, candidate), Ok(true));
        }
        // Missing the pinned r and e, or containing a gray letter
        for rejected in words(&["slate", "brine", "drake", "pudgy"]) {
            assert!(!survivors.contains(&rejected));
        }
    }

    #[test]
    fn guessed_words_are_excluded_everywhere() {
        let history = words(&["crane"]);
        let boards = vec![vec![feedback("OOOOO")]];
        let evaluator = Evaluator::prepare(&pool(), &history, &boards, 5).unwrap();

        assert!(evaluator.boards()[0].is_empty());
        assert!(evaluator.pile_words().all(|w| w != word("crane")));
    }

    #[test]
    fn pile_without_visible_boards() {
        let evaluator = Evaluator::prepare(&pool(), &[], NO_BOARDS, 1000).unwrap();
        assert_eq!(evaluator.pile_cap(), MAX_SCORE - 1);
        assert_eq!(evaluator.pile_count(), 1000);
        assert_eq!(evaluator.pile_len(), pool().len());
        assert!(evaluator.boards().is_empty());
    }

    #[test]
    fn pile_cap_is_least_solved_board() {
        let history = words(&["crane"]);
        let boards = vec![
            vec![feedback(" O  O")],
            vec![Feedback::calculate(&word("crane"), &word("pudgy"))],
        ];
        let evaluator = Evaluator::prepare(&pool(), &history, &boards, 20).unwrap();

        let worst = evaluator
            .boards()
            .iter()
            .filter_map(BoardCandidates::max_score)
            .min()
            .unwrap();
        assert_eq!(evaluator.pile_cap(), worst);
        assert_eq!(evaluator.pile_count(), 18);
        assert!(
            evaluator
                .pile_words()
                .all(|w| score_in_history(&history, &w) <= evaluator.pile_cap())
        );
    }

    #[test]
    fn empty_board_is_ignored_by_pile_cap() {
        let history = words(&["crane"]);
        // No pool word starts with c, so the first board has no candidates
        let boards = vec![vec![feedback("O....")], vec![feedback("..o..")]];
        let pool = words(&["zzzzz", "pudgy", "slate", "basil"]);
        let evaluator = Evaluator::prepare(&pool, &history, &boards, 4).unwrap();
        assert!(evaluator.boards()[0].is_empty());
        assert_eq!(evaluator.pile_cap(), evaluator.boards()[1].max_score().unwrap());
    }

    #[test]
    fn score_counts_pile_per_unseen_board() {
        let pool = words(&["pudgy", "slate"]);
        let evaluator = Evaluator::prepare(&pool, &[], NO_BOARDS, 2).unwrap();
        // slate scores 15, pudgy 0: mean 7.5 for each of two unseen boards
        assert!((evaluator.score_with_guess(&word("slate")) - 15.0).abs() < 1e-12);
        assert!(
            (evaluator.score_extended_history(&words(&["slate"])) - 15.0).abs() < 1e-12
        );
    }

    #[test]
    fn incremental_score_matches_extended_history() {
        let history = words(&["crane"]);
        let boards = vec![
            vec![feedback(" O  O")],
            vec![Feedback::calculate(&word("crane"), &word("slate"))],
        ];
        let evaluator = Evaluator::prepare(&pool(), &history, &boards, 40).unwrap();

        for guess in words(&["moist", "bribe", "pudgy", "crane", "aaaaa"]) {
            let mut extended = history.clone();
            extended.push(guess);
            assert_eq!(
                evaluator.score_with_guess(&guess).to_bits(),
                evaluator.score_extended_history(&extended).to_bits()
            );
        }
    }

    #[test]
    fn prepared_history_is_kept() {
        let history = words(&["crane", "moist"]);
        let evaluator = Evaluator::prepare(&pool(), &history, NO_BOARDS, 3).unwrap();
        assert_eq!(evaluator.guess_history(), history.as_slice());
    }
}
