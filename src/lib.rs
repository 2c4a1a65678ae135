//! # Arena Rank Engine
//!
//! Leaderboard ranking engine for gamified events with:
//! - Defensive normalization of partial/untrusted score feeds
//! - Positional ranking with stable tie ordering
//! - Competitive-gap analysis ("N pts to overtake rank M")
//! - Progress-percentage computation
//! - Pluggable async score providers and renderers
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use arena_rank_engine::{LeaderboardEngine, LeaderboardQuery, providers::RestProvider};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let mut engine = LeaderboardEngine::new();
//!     engine.add_provider(Arc::new(RestProvider::new("https://api.example.com", None)));
//!
//!     let snapshot = engine.refresh(LeaderboardQuery::new("spring-cup")).await?;
//!
//!     for entry in &snapshot.entries {
//!         println!("#{} {} - {} pts", entry.rank, entry.display_name, entry.score);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! The computation itself is a pure function: `compute_leaderboard` can be
//! called directly on raw records without any provider wiring.

pub mod core;
pub mod engine;
pub mod error;
pub mod providers;
pub mod ranking;
pub mod render;

// Re-export primary types
pub use crate::core::{
    GapStatus, LeaderboardEntry, LeaderboardSnapshot, ProgressPercent, RawRecord, ScoreRecord,
};
pub use engine::{compute_leaderboard, LeaderboardEngine, LeaderboardQuery};
pub use error::{RankEngineError, Result};
pub use render::{LeaderboardRenderer, TextRenderer};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
