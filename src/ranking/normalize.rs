use crate::core::{RawRecord, ScoreRecord, FALLBACK_DISPLAY_NAME};

/// Normalize raw participant records into canonical ranking input.
///
/// The coercion contract:
/// - records with both `id` and `name` absent/empty are placeholders and
///   are dropped from the output entirely
/// - `display_name` falls back to `"Unknown"` when absent or empty
/// - absent or negative scores coerce to 0, same for the maximum
///
/// Pure and total: invalid input is coerced, never rejected.
pub fn normalize(raw: &[RawRecord]) -> Vec<ScoreRecord> {
    raw.iter()
        .filter(|r| !r.is_placeholder())
        .map(normalize_one)
        .collect()
}

fn normalize_one(raw: &RawRecord) -> ScoreRecord {
    let display_name = raw
        .name
        .as_deref()
        .filter(|s| !s.is_empty())
        .unwrap_or(FALLBACK_DISPLAY_NAME)
        .to_string();

    ScoreRecord {
        id: raw.id.clone().unwrap_or_default(),
        display_name,
        score: coerce_points(raw.score),
        max_possible_score: coerce_points(raw.total_possible_score),
    }
}

/// Absent or negative point values default to 0
fn coerce_points(value: Option<i64>) -> u64 {
    value.filter(|v| *v >= 0).unwrap_or(0) as u64
}
