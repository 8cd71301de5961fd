//! Snapshot analysis command
//!
//! Reports what the planner sees: surviving candidates per visible board, the
//! pile standing in for the unseen boards, and the best-ranked guesses.

use super::pick::Snapshot;
use crate::core::{Feedback, Word};
use crate::error::PlanError;
use crate::solver::{Planner, ScoredGuess};

/// Candidates shown per board
const SAMPLE_SIZE: usize = 5;

/// One visible board's state
#[derive(Debug, Clone)]
pub struct BoardSummary {
    /// Most recent guess and its feedback
    pub last_row: Option<(Word, Feedback)>,
    pub candidates: usize,
    /// First few surviving candidates
    pub sample: Vec<Word>,
}

/// Result of analyzing a snapshot
#[derive(Debug, Clone)]
pub struct AnalysisResult {
    pub boards: Vec<BoardSummary>,
    pub pile_len: usize,
    pub pile_cap: u8,
    pub pile_count: usize,
    /// Expected score of the history as it stands
    pub current_score: f64,
    pub top: Vec<ScoredGuess>,
}

/// Analyze a snapshot and rank the `top` best guesses
///
/// # Errors
/// Propagates the planner's validation errors.
pub fn analyze_snapshot(
    planner: &Planner<'_>,
    snapshot: &Snapshot,
    top: usize,
) -> Result<AnalysisResult, PlanError> {
    let evaluator = planner.prepare(&snapshot.guesses, &snapshot.boards, snapshot.remaining)?;

    let boards = evaluator
        .boards()
        .iter()
        .zip(&snapshot.boards)
        .map(|(candidates, results)| BoardSummary {
            last_row: snapshot.guesses.last().copied().zip(results.last().copied()),
            candidates: candidates.len(),
            sample: candidates.words().take(SAMPLE_SIZE).collect(),
        })
        .collect();

    Ok(AnalysisResult {
        boards,
        pile_len: evaluator.pile_len(),
        pile_cap: evaluator.pile_cap(),
        pile_count: evaluator.pile_count(),
        current_score: evaluator.score_extended_history(&snapshot.guesses),
        top: planner.rank_guesses(&evaluator, top),
    })
}
