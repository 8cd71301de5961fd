//! Kilordle Planner
//!
//! Picks guesses for Kilordle, a Wordle variant with 1000 simultaneous boards
//! where each guess applies to every unsolved board and a board is solved once
//! every position of its answer has shown green in some guess, whether or not
//! the answer itself was typed. Only a window of boards is visible at a time,
//! so the planner also estimates the boards it cannot see.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use kilordle_planner::core::{Feedback, Word};
//! use kilordle_planner::lexicon::Lexicon;
//! use kilordle_planner::solver::Planner;
//!
//! let lexicon = Lexicon::embedded().unwrap();
//! let planner = Planner::new(lexicon);
//!
//! let history = [Word::new("crane").unwrap()];
//! let boards = [vec![" O  O".parse::<Feedback>().unwrap()]];
//! let next = planner.pick_guess(&history, &boards, 999).unwrap();
//! println!("next guess: {next}");
//! ```

// Core domain types
pub mod core;

// Error types
pub mod error;

// Guess planning
pub mod solver;

// Word lists
pub mod lexicon;

// Game automation
pub mod driver;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
