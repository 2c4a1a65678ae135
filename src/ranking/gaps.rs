use crate::core::GapStatus;
use crate::ranking::RankedRecord;

/// Classify every record's competitive position in rank order.
///
/// Input must be the output of `assign_ranks` (score-descending). The
/// classification per position `i`:
///
/// 1. score 0 -> `ZeroScore`
/// 2. `i == 0`, or score equals the list maximum -> `SoleLeader`, every
///    record tied at the top reports `SoleLeader`, not `Tied`
/// 3. score equals the record at `i - 1` -> `Tied`, a record ties only
///    with its immediate predecessor
/// 4. otherwise `Trailing`: the predecessor holds the nearest distinct
///    higher score (adjacent equal scores were consumed by step 3), so
///    `points_needed = prev.score - score + 1` and `ahead_rank = prev.rank`
///
/// Single O(N) pass, total, no failure modes.
pub fn analyze_gaps(ranked: &[RankedRecord]) -> Vec<GapStatus> {
    let top_score = ranked.first().map(|r| r.record.score).unwrap_or(0);

    ranked
        .iter()
        .enumerate()
        .map(|(i, r)| {
            let score = r.record.score;

            if score == 0 {
                return GapStatus::ZeroScore;
            }
            if i == 0 || score == top_score {
                return GapStatus::SoleLeader;
            }

            let prev = &ranked[i - 1];
            if score == prev.record.score {
                return GapStatus::Tied;
            }

            GapStatus::Trailing {
                points_needed: prev.record.score - score + 1,
                ahead_rank: prev.rank,
            }
        })
        .collect()
}
