pub mod fixture;
pub mod rest;

use async_trait::async_trait;

use crate::core::RawRecord;
use crate::error::Result;

pub use fixture::StaticProvider;
pub use rest::RestProvider;

/// Trait for raw score feeds (REST backend, fixtures, etc.)
///
/// Providers own fetching and nothing else: whatever they return goes
/// through the normalizer, so they may pass partial records through as-is.
#[async_trait]
pub trait ScoreProvider: Send + Sync {
    /// Fetch the raw participant records for an event
    async fn fetch_scores(&self, event_id: &str) -> Result<Vec<RawRecord>>;

    /// Get provider name for logging
    fn name(&self) -> &str;

    /// Check if provider is available
    async fn is_available(&self) -> bool;
}
