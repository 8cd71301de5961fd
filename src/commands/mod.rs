//! Command implementations

pub mod analyze;
pub mod pick;
pub mod simulate;

pub use analyze::{AnalysisResult, BoardSummary, analyze_snapshot};
pub use pick::{PickResult, Snapshot, pick_next};
pub use simulate::{SimulationResult, run_simulation};
