use crate::core::{ProgressPercent, ScoreRecord};

/// Compute the percent-of-maximum for one record.
///
/// A zero maximum means the percentage is undefined, never a division
/// by zero, NaN or Infinity. Otherwise the result is `score / max * 100`
/// rounded half-up. Scores above the maximum yield values above 100;
/// upstream data is not guaranteed consistent, so that is valid output.
pub fn compute_progress(record: &ScoreRecord) -> ProgressPercent {
    if record.max_possible_score == 0 {
        return ProgressPercent::Undefined;
    }

    let pct = (record.score as f64 / record.max_possible_score as f64) * 100.0;
    // f64 -> u32 casts saturate, so absurd score/max ratios stay finite.
    ProgressPercent::Value(pct.round() as u32)
}
