pub mod entry;
pub mod raw_record;
pub mod score_record;
pub mod snapshot;

pub use entry::{GapStatus, LeaderboardEntry, ProgressPercent};
pub use raw_record::RawRecord;
pub use score_record::{ScoreRecord, FALLBACK_DISPLAY_NAME};
pub use snapshot::LeaderboardSnapshot;
