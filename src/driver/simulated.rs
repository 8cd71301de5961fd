//! In-process Kilordle
//!
//! Hides a set of distinct answers, applies every guess to every unsolved
//! board and shows the most advanced boards first, like the real page. A
//! board is solved once every position has shown exact in some guess, so an
//! answer can be solved without ever being typed.

use super::{DriverError, GameDriver, GameState};
use crate::core::{Feedback, Mark, WORD_LENGTH, Word};
use crate::lexicon::Lexicon;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use std::cmp::Reverse;

/// Parameters of a simulated game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationConfig {
    /// Number of hidden answers
    pub boards: usize,
    /// Most boards shown at once
    pub visible: usize,
    /// RNG seed for drawing the answers
    pub seed: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            boards: 1000,
            visible: 32,
            seed: 0,
        }
    }
}

#[derive(Debug, Clone)]
struct Board {
    answer: Word,
    results: Vec<Feedback>,
    pinned: [bool; WORD_LENGTH],
    solved: bool,
}

impl Board {
    const fn new(answer: Word) -> Self {
        Self {
            answer,
            results: Vec::new(),
            pinned: [false; WORD_LENGTH],
            solved: false,
        }
    }

    fn apply(&mut self, guess: &Word) {
        let feedback = Feedback::calculate(guess, &self.answer);
        for (pinned, mark) in self.pinned.iter_mut().zip(feedback.marks()) {
            *pinned |= *mark == Mark::Exact;
        }
        // Guessing the answer pins every position too
        if self.pinned.iter().all(|&p| p) {
            self.solved = true;
            return;
        }
        self.results.push(feedback);
    }

    fn progress(&self) -> usize {
        self.pinned.iter().filter(|&&p| p).count()
    }
}

/// A Kilordle game played locally
#[derive(Debug, Clone)]
pub struct SimulatedGame<'a> {
    lexicon: &'a Lexicon,
    boards: Vec<Board>,
    guesses: Vec<Word>,
    visible: usize,
}

impl<'a> SimulatedGame<'a> {
    /// Draw `config.boards` distinct answers from the lexicon's answer pool
    ///
    /// # Errors
    /// Returns `DriverError::NotEnoughAnswers` if the pool is smaller than the
    /// number of boards.
    ///
    /// # Examples
    /// ```
    /// use kilordle_planner::driver::{GameDriver, SimulatedGame, SimulationConfig};
    /// use kilordle_planner::lexicon::Lexicon;
    ///
    /// let lexicon = Lexicon::embedded().unwrap();
    /// let config = SimulationConfig { boards: 10, visible: 4, seed: 7 };
    /// let mut game = SimulatedGame::new(lexicon, &config).unwrap();
    ///
    /// let state = game.read_state().unwrap();
    /// assert_eq!(state.remaining, 10);
    /// assert!(state.result_histories.is_empty());
    /// ```
    pub fn new(lexicon: &'a Lexicon, config: &SimulationConfig) -> Result<Self, DriverError> {
        let pool = lexicon.answers();
        if config.boards > pool.len() {
            return Err(DriverError::NotEnoughAnswers {
                requested: config.boards,
                available: pool.len(),
            });
        }

        let mut rng = StdRng::seed_from_u64(config.seed);
        let answers = pool
            .choose_multiple(&mut rng, config.boards)
            .copied()
            .collect();
        Ok(Self::with_answers(lexicon, answers, config.visible))
    }

    /// Game with fixed answers, one board per word
    #[must_use]
    pub fn with_answers(lexicon: &'a Lexicon, answers: Vec<Word>, visible: usize) -> Self {
        Self {
            lexicon,
            boards: answers.into_iter().map(Board::new).collect(),
            guesses: Vec::new(),
            visible,
        }
    }

    /// Hidden answers in board order
    pub fn answers(&self) -> impl Iterator<Item = Word> + '_ {
        self.boards.iter().map(|board| board.answer)
    }

    #[must_use]
    pub fn guesses(&self) -> &[Word] {
        &self.guesses
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        self.boards.iter().filter(|board| !board.solved).count()
    }

    #[must_use]
    pub fn solved(&self) -> usize {
        self.boards.len() - self.remaining()
    }
}

impl GameDriver for SimulatedGame<'_> {
    fn read_state(&mut self) -> Result<GameState, DriverError> {
        let remaining = self.remaining();
        if self.guesses.is_empty() {
            return Ok(GameState {
                remaining,
                ..GameState::default()
            });
        }

        let mut shown: Vec<&Board> = self.boards.iter().filter(|board| !board.solved).collect();
        // Stable sort keeps board order among equal progress
        shown.sort_by_key(|board| Reverse(board.progress()));
        shown.truncate(self.visible);

        Ok(GameState {
            guess_history: self.guesses.clone(),
            result_histories: shown.into_iter().map(|board| board.results.clone()).collect(),
            remaining,
        })
    }

    fn submit_guess(&mut self, guess: Word) -> Result<(), DriverError> {
        if self.remaining() == 0 {
            return Err(DriverError::GameOver);
        }
        if !self.lexicon.contains(&guess) {
            return Err(DriverError::UnknownWord(guess));
        }

        self.guesses.push(guess);
        for board in self.boards.iter_mut().filter(|board| !board.solved) {
            board.apply(&guess);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::{GameOptions, play_game};
    use crate::solver::Planner;
    use crate::solver::score::{MAX_SCORE, score_in_history};

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|s| word(s)).collect()
    }

    fn small_lexicon() -> Lexicon {
        Lexicon::new(
            words(&["pudgy", "crane", "slate", "trite", "bribe", "grove"]),
            words(&["trace", "slant", "deair"]),
        )
        .unwrap()
    }

    #[test]
    fn seed_reproduces_the_game() {
        let lexicon = Lexicon::embedded().unwrap();
        let config = SimulationConfig {
            boards: 50,
            visible: 8,
            seed: 42,
        };
        let first: Vec<Word> = SimulatedGame::new(lexicon, &config).unwrap().answers().collect();
        let again: Vec<Word> = SimulatedGame::new(lexicon, &config).unwrap().answers().collect();
        let other: Vec<Word> = SimulatedGame::new(lexicon, &SimulationConfig { seed: 43, ..config })
            .unwrap()
            .answers()
            .collect();

        assert_eq!(first, again);
        assert_ne!(first, other);

        let mut distinct = first.clone();
        distinct.sort();
        distinct.dedup();
        assert_eq!(distinct.len(), 50);
    }

    #[test]
    fn too_many_boards_is_rejected() {
        let lexicon = small_lexicon();
        let config = SimulationConfig {
            boards: 7,
            ..SimulationConfig::default()
        };
        assert_eq!(
            SimulatedGame::new(&lexicon, &config).unwrap_err(),
            DriverError::NotEnoughAnswers {
                requested: 7,
                available: 6
            }
        );
    }

    #[test]
    fn nothing_is_visible_before_the_first_guess() {
        let lexicon = small_lexicon();
        let mut game = SimulatedGame::with_answers(&lexicon, words(&["pudgy", "crane"]), 32);
        let state = game.read_state().unwrap();
        assert!(state.guess_history.is_empty());
        assert!(state.result_histories.is_empty());
        assert_eq!(state.remaining, 2);
    }

    #[test]
    fn boards_are_shown_most_advanced_first() {
        let lexicon = small_lexicon();
        let mut game =
            SimulatedGame::with_answers(&lexicon, words(&["pudgy", "crane", "slate"]), 2);
        game.submit_guess(word("trace")).unwrap();

        // trace pins r, a, e on crane and a, e on slate
        let state = game.read_state().unwrap();
        assert_eq!(state.guess_history, words(&["trace"]));
        assert_eq!(
            state.result_histories,
            vec![
                vec![Feedback::calculate(&word("trace"), &word("crane"))],
                vec![Feedback::calculate(&word("trace"), &word("slate"))],
            ]
        );
        assert_eq!(state.remaining, 3);
    }

    #[test]
    fn guessing_an_answer_solves_its_board() {
        let lexicon = small_lexicon();
        let mut game = SimulatedGame::with_answers(&lexicon, words(&["pudgy", "crane"]), 32);
        game.submit_guess(word("crane")).unwrap();

        let state = game.read_state().unwrap();
        assert_eq!(state.remaining, 1);
        assert_eq!(
            state.result_histories,
            vec![vec![Feedback::calculate(&word("crane"), &word("pudgy"))]]
        );
        assert_eq!(game.solved(), 1);
    }

    #[test]
    fn covering_every_position_solves_a_board() {
        let lexicon = small_lexicon();
        let mut game = SimulatedGame::with_answers(&lexicon, words(&["slate", "pudgy"]), 32);

        // slant pins s, l, a
        game.submit_guess(word("slant")).unwrap();
        assert_eq!(game.solved(), 0);
        assert_eq!(game.read_state().unwrap().result_histories[0].len(), 1);

        // trite pins t, e without slate ever being typed
        game.submit_guess(word("trite")).unwrap();
        assert_eq!(game.solved(), 1);
        let state = game.read_state().unwrap();
        assert_eq!(state.remaining, 1);
        assert_eq!(
            state.result_histories,
            vec![vec![
                Feedback::calculate(&word("slant"), &word("pudgy")),
                Feedback::calculate(&word("trite"), &word("pudgy")),
            ]]
        );
    }

    #[test]
    fn unknown_words_and_finished_games_are_rejected() {
        let lexicon = small_lexicon();
        let mut game = SimulatedGame::with_answers(&lexicon, words(&["pudgy"]), 32);
        assert_eq!(
            game.submit_guess(word("zzzzz")),
            Err(DriverError::UnknownWord(word("zzzzz")))
        );
        assert!(game.guesses().is_empty());

        game.submit_guess(word("pudgy")).unwrap();
        assert_eq!(game.submit_guess(word("crane")), Err(DriverError::GameOver));
    }

    #[test]
    fn planner_finishes_a_small_game() {
        let lexicon = small_lexicon();
        let answers = words(&["pudgy", "crane", "slate", "trite", "bribe", "grove"]);
        let mut game = SimulatedGame::with_answers(&lexicon, answers.clone(), 3);
        let planner = Planner::new(&lexicon);

        let summary = play_game(&mut game, &planner, &GameOptions::default(), |_| {}).unwrap();
        assert_eq!(game.remaining(), 0);
        for answer in &answers {
            assert_eq!(score_in_history(&summary.guesses, answer), MAX_SCORE);
        }
    }
}
