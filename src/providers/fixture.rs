use std::collections::HashMap;

use async_trait::async_trait;

use crate::core::RawRecord;
use crate::error::{RankEngineError, Result};
use crate::providers::ScoreProvider;

/// In-memory score feed, used in tests and demos in place of a live
/// backend.
#[derive(Default)]
pub struct StaticProvider {
    events: HashMap<String, Vec<RawRecord>>,
}

impl StaticProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the raw records served for an event
    pub fn with_event(mut self, event_id: impl Into<String>, records: Vec<RawRecord>) -> Self {
        self.events.insert(event_id.into(), records);
        self
    }
}

#[async_trait]
impl ScoreProvider for StaticProvider {
    async fn fetch_scores(&self, event_id: &str) -> Result<Vec<RawRecord>> {
        self.events
            .get(event_id)
            .cloned()
            .ok_or_else(|| RankEngineError::Provider {
                provider: self.name().to_string(),
                message: format!("unknown event: {}", event_id),
            })
    }

    fn name(&self) -> &str {
        "static"
    }

    async fn is_available(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_serves_registered_event() {
        let provider = StaticProvider::new()
            .with_event("evt-1", vec![RawRecord::new("p1", "Ada").with_score(10)]);

        let records = provider.fetch_scores("evt-1").await.unwrap();
        assert_eq!(records.len(), 1);
        assert!(provider.is_available().await);
    }

    #[tokio::test]
    async fn test_unknown_event_is_a_provider_error() {
        let provider = StaticProvider::new();
        let err = provider.fetch_scores("nope").await.unwrap_err();
        assert!(matches!(err, RankEngineError::Provider { .. }));
    }
}
