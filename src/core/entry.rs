use serde::{Deserialize, Serialize};

/// A participant's competitive position relative to its neighbors in the
/// sorted ranking.
///
/// Classification only; display strings, icons and colors are the
/// renderer's concern (see `render`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum GapStatus {
    /// The record's score is exactly 0
    ZeroScore,

    /// Strictly highest score, or tied with the list maximum
    SoleLeader,

    /// Same score as the record immediately above (below the top score)
    Tied,

    /// Strictly behind the nearest distinct higher score
    Trailing {
        /// Minimal points to strictly exceed the score ahead; always >= 1
        points_needed: u64,

        /// Positional rank of the record holding that higher score
        ahead_rank: usize,
    },
}

impl GapStatus {
    /// True for the leader variants (top of the board)
    pub fn is_leading(&self) -> bool {
        matches!(self, GapStatus::SoleLeader)
    }
}

/// Score expressed as a percentage of the maximum attainable score.
///
/// `Undefined` stands in for a missing/zero maximum, never NaN or
/// Infinity. Values above 100 are valid (upstream data is not guaranteed
/// consistent), not clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressPercent {
    /// No maximum known; nothing meaningful to display
    Undefined,

    /// Rounded percentage, may exceed 100
    Value(u32),
}

impl ProgressPercent {
    /// The percentage, or `None` when undefined
    pub fn value(&self) -> Option<u32> {
        match self {
            ProgressPercent::Undefined => None,
            ProgressPercent::Value(pct) => Some(*pct),
        }
    }

    pub fn is_defined(&self) -> bool {
        self.value().is_some()
    }
}

// On the wire this is a plain number-or-null, matching what the
// consuming views expect.
impl Serialize for ProgressPercent {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.value().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ProgressPercent {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Ok(match Option::<u32>::deserialize(deserializer)? {
            Some(pct) => ProgressPercent::Value(pct),
            None => ProgressPercent::Undefined,
        })
    }
}

/// One fully-computed leaderboard row: canonical record fields plus rank,
/// gap classification and progress.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    /// Opaque participant identifier
    pub id: String,

    /// Display name, never empty
    pub display_name: String,

    /// Positional rank: 1-based index in score-descending order, no
    /// skip-compression for ties
    pub rank: usize,

    /// Points scored
    pub score: u64,

    /// Maximum attainable points (0 = unknown)
    pub max_possible_score: u64,

    /// Competitive position relative to neighbors
    pub gap_status: GapStatus,

    /// Percent of maximum, or null when the maximum is unknown
    pub progress_percent: ProgressPercent,
}
