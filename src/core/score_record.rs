use serde::{Deserialize, Serialize};

/// Fallback display name for participants that did not report one
pub const FALLBACK_DISPLAY_NAME: &str = "Unknown";

/// A canonical, fully-defaulted participant record.
///
/// Produced by `ranking::normalize` from a `RawRecord`; all fields are
/// present and total-ordered by `score`. Treated as immutable once built;
/// every ranking computation starts from a fresh set of these.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ScoreRecord {
    /// Opaque participant identifier (unique upstream; may be empty when
    /// only a name was reported)
    pub id: String,

    /// Display name, never empty
    pub display_name: String,

    /// Points scored so far
    pub score: u64,

    /// Maximum attainable points; 0 means "unknown", which makes the
    /// progress percentage undefined
    pub max_possible_score: u64,
}

impl ScoreRecord {
    /// Create a record with required fields
    pub fn new(id: impl Into<String>, display_name: impl Into<String>, score: u64) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            score,
            max_possible_score: 0,
        }
    }

    /// Builder-style maximum setter
    pub fn with_max(mut self, max_possible_score: u64) -> Self {
        self.max_possible_score = max_possible_score;
        self
    }

    /// Get display string (for logging/UI)
    pub fn display(&self) -> String {
        format!("{} ({} pts)", self.display_name, self.score)
    }
}
