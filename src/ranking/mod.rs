//! The ranking pipeline: normalize -> assign ranks -> analyze gaps ->
//! compute progress.
//!
//! Every stage is a pure, total function with no cross-call state; the
//! whole pipeline is wired together by `engine::compute_leaderboard`.

pub mod assign;
pub mod gaps;
pub mod normalize;
pub mod progress;

use crate::core::ScoreRecord;

pub use assign::assign_ranks;
pub use gaps::analyze_gaps;
pub use normalize::normalize;
pub use progress::compute_progress;

/// Canonical record with its positional rank
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedRecord {
    pub record: ScoreRecord,

    /// 1-based index in score-descending order; ties get distinct
    /// consecutive ranks, there is no skip-compression
    pub rank: usize,
}

impl RankedRecord {
    pub fn new(record: ScoreRecord, rank: usize) -> Self {
        Self { record, rank }
    }
}
