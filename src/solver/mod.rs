//! Guess planning
//!
//! Scores how much of every board a guess history has uncovered and picks
//! the guess that uncovers the most.

mod evaluator;
mod planner;
pub mod score;

pub use evaluator::{BoardCandidates, Evaluator};
pub use planner::{DEFAULT_FALLBACK, Planner, PlannerConfig, ScoredGuess, SearchMode};
