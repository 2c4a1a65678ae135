use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::LeaderboardEntry;

/// A computed leaderboard for one event, with fetch metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardSnapshot {
    /// Event the scores belong to
    pub event_id: String,

    /// Ranked entries, iterated from rank 1 to the last
    pub entries: Vec<LeaderboardEntry>,

    /// Provider that returned the raw scores
    pub provider: String,

    /// Fetch + compute latency in milliseconds
    pub latency_ms: f64,

    /// Timestamp when the raw scores were fetched
    #[serde(default = "Utc::now")]
    pub fetched_at: DateTime<Utc>,
}

impl LeaderboardSnapshot {
    /// Create a new snapshot
    pub fn new(
        event_id: impl Into<String>,
        entries: Vec<LeaderboardEntry>,
        provider: impl Into<String>,
        latency_ms: f64,
    ) -> Self {
        Self {
            event_id: event_id.into(),
            entries,
            provider: provider.into(),
            latency_ms,
            fetched_at: Utc::now(),
        }
    }

    /// Number of ranked participants
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up a participant's entry by id
    pub fn entry(&self, id: &str) -> Option<&LeaderboardEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// The top `n` entries, from rank 1 down
    pub fn top(&self, n: usize) -> &[LeaderboardEntry] {
        &self.entries[..n.min(self.entries.len())]
    }

    /// Get display string for logging
    pub fn display(&self) -> String {
        format!(
            "{}: {} entries ({}) {:.1}ms",
            self.event_id,
            self.entries.len(),
            self.provider,
            self.latency_ms
        )
    }
}
