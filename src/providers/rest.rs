use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use crate::core::RawRecord;
use crate::error::{RankEngineError, Result};
use crate::providers::ScoreProvider;

/// REST backend score feed
///
/// Fetches `GET {base_url}/events/{event_id}/leaderboard` and tolerates
/// the two response shapes the backend has been seen to produce: a bare
/// JSON array of records, or an object wrapping them in `participants`.
pub struct RestProvider {
    client: Client,
    base_url: String,
    bearer_token: Option<String>,
}

/// The backend wraps the records in an object on newer deployments and
/// returns a bare array on older ones.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum LeaderboardPayload {
    Wrapped { participants: Vec<RawRecord> },
    Bare(Vec<RawRecord>),
}

impl LeaderboardPayload {
    fn into_records(self) -> Vec<RawRecord> {
        match self {
            LeaderboardPayload::Wrapped { participants } => participants,
            LeaderboardPayload::Bare(records) => records,
        }
    }
}

impl RestProvider {
    /// Create a new REST provider against the given backend base URL
    pub fn new(base_url: impl Into<String>, bearer_token: Option<String>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            bearer_token,
        }
    }

    fn leaderboard_url(&self, event_id: &str) -> String {
        format!(
            "{}/events/{}/leaderboard",
            self.base_url,
            urlencoding::encode(event_id)
        )
    }

    fn provider_error(&self, message: impl Into<String>) -> RankEngineError {
        RankEngineError::Provider {
            provider: self.name().to_string(),
            message: message.into(),
        }
    }
}

#[async_trait]
impl ScoreProvider for RestProvider {
    async fn fetch_scores(&self, event_id: &str) -> Result<Vec<RawRecord>> {
        let url = self.leaderboard_url(event_id);

        let mut request = self.client.get(&url);
        if let Some(token) = &self.bearer_token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| self.provider_error(format!("Leaderboard request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(self.provider_error(format!("HTTP {}", response.status())));
        }

        let payload: LeaderboardPayload = response
            .json()
            .await
            .map_err(|e| self.provider_error(format!("Invalid JSON: {}", e)))?;

        Ok(payload.into_records())
    }

    fn name(&self) -> &str {
        "rest"
    }

    async fn is_available(&self) -> bool {
        let url = format!("{}/health", self.base_url);
        match self.client.get(&url).send().await {
            Ok(response) => response.status().is_success(),
            Err(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_encodes_event_id() {
        let provider = RestProvider::new("https://api.example.com/", None);
        assert_eq!(
            provider.leaderboard_url("spring cup/2026"),
            "https://api.example.com/events/spring%20cup%2F2026/leaderboard"
        );
    }

    #[test]
    fn test_parses_bare_array_payload() {
        let payload: LeaderboardPayload =
            serde_json::from_str(r#"[{"id": "p1", "score": 10}]"#).unwrap();
        let records = payload.into_records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].score, Some(10));
    }

    #[test]
    fn test_parses_wrapped_payload() {
        let payload: LeaderboardPayload = serde_json::from_str(
            r#"{"participants": [{"id": "p1"}, {"name": "Ada", "score": "12"}]}"#,
        )
        .unwrap();
        let records = payload.into_records();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].score, Some(12));
    }
}
