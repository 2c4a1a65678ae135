use std::sync::Arc;
use std::time::Instant;

use crate::core::{LeaderboardEntry, LeaderboardSnapshot, RawRecord};
use crate::error::{RankEngineError, Result};
use crate::providers::ScoreProvider;
use crate::ranking::{analyze_gaps, assign_ranks, compute_progress, normalize};

/// Main leaderboard engine orchestrator
///
/// Owns nothing but its providers: every refresh fetches fresh raw
/// records and recomputes the board from scratch, so there is no cached
/// state to go stale between calls.
pub struct LeaderboardEngine {
    providers: Vec<Arc<dyn ScoreProvider>>,
}

/// Refresh parameters
#[derive(Debug, Clone)]
pub struct LeaderboardQuery {
    pub event_id: String,
}

impl LeaderboardQuery {
    pub fn new(event_id: impl Into<String>) -> Self {
        Self {
            event_id: event_id.into(),
        }
    }
}

/// Compute a full leaderboard from raw participant records.
///
/// The complete pipeline as a pure function: normalize, rank, classify
/// gaps, compute progress. Empty input yields an empty board; repeated
/// calls on the same input yield identical output.
pub fn compute_leaderboard(raw: &[RawRecord]) -> Vec<LeaderboardEntry> {
    let ranked = assign_ranks(normalize(raw));
    let statuses = analyze_gaps(&ranked);

    ranked
        .into_iter()
        .zip(statuses)
        .map(|(ranked, gap_status)| {
            let progress_percent = compute_progress(&ranked.record);
            LeaderboardEntry {
                id: ranked.record.id,
                display_name: ranked.record.display_name,
                rank: ranked.rank,
                score: ranked.record.score,
                max_possible_score: ranked.record.max_possible_score,
                gap_status,
                progress_percent,
            }
        })
        .collect()
}

impl LeaderboardEngine {
    /// Create an engine with no providers; add feeds with `add_provider`
    pub fn new() -> Self {
        Self {
            providers: Vec::new(),
        }
    }

    /// Add a score provider; providers are tried in registration order
    pub fn add_provider(&mut self, provider: Arc<dyn ScoreProvider>) {
        self.providers.push(provider);
    }

    /// Fetch raw scores and compute a fresh leaderboard snapshot.
    ///
    /// The first provider that answers wins; failures are logged and the
    /// next provider is tried. An empty record list is a valid (empty)
    /// board, not an error; `NoData` is returned only when
    /// every provider fails.
    pub async fn refresh(&self, query: LeaderboardQuery) -> Result<LeaderboardSnapshot> {
        let start = Instant::now();

        let mut fetched: Option<(&str, Vec<RawRecord>)> = None;
        for provider in &self.providers {
            match provider.fetch_scores(&query.event_id).await {
                Ok(records) => {
                    tracing::debug!(
                        "Provider {} returned {} raw records for {}",
                        provider.name(),
                        records.len(),
                        query.event_id
                    );
                    fetched = Some((provider.name(), records));
                    break;
                }
                Err(e) => {
                    tracing::warn!("Provider {} failed: {}", provider.name(), e);
                }
            }
        }

        let (provider, raw) = match fetched {
            Some(f) => f,
            None => return Err(RankEngineError::NoData(query.event_id)),
        };

        let entries = compute_leaderboard(&raw);
        let latency_ms = start.elapsed().as_secs_f64() * 1000.0;

        let snapshot = LeaderboardSnapshot::new(query.event_id, entries, provider, latency_ms);
        tracing::info!("Refreshed leaderboard {}", snapshot.display());
        Ok(snapshot)
    }
}

impl Default for LeaderboardEngine {
    fn default() -> Self {
        Self::new()
    }
}
