use thiserror::Error;

/// Main error type for the ranking engine
///
/// The ranking computation itself is total and never fails; errors only
/// arise at the provider boundary when fetching raw scores.
#[derive(Error, Debug)]
pub enum RankEngineError {
    /// HTTP request errors
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] reqwest::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Provider errors
    #[error("Provider '{provider}' error: {message}")]
    Provider { provider: String, message: String },

    /// No provider could deliver scores for an event
    #[error("No provider returned scores for event: {0}")]
    NoData(String),

    /// Generic errors
    #[error("{0}")]
    Other(String),
}

impl From<String> for RankEngineError {
    fn from(s: String) -> Self {
        RankEngineError::Other(s)
    }
}

impl From<&str> for RankEngineError {
    fn from(s: &str) -> Self {
        RankEngineError::Other(s.to_string())
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, RankEngineError>;
