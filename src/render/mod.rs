use crate::core::{GapStatus, LeaderboardEntry};

/// Trait for leaderboard presentation
///
/// The engine classifies (`GapStatus`); renderers own wording, icons and
/// layout, so different surfaces can present the same board their own way.
pub trait LeaderboardRenderer: Send + Sync {
    /// Render a full board to a displayable string
    fn render(&self, entries: &[LeaderboardEntry]) -> String;

    /// Get renderer name for logging
    fn name(&self) -> &str;
}

/// Plain-text renderer, one line per entry
pub struct TextRenderer;

impl TextRenderer {
    pub fn new() -> Self {
        Self
    }

    fn status_line(entry: &LeaderboardEntry) -> String {
        match entry.gap_status {
            GapStatus::ZeroScore => "no points yet".to_string(),
            GapStatus::SoleLeader => "leading the board".to_string(),
            GapStatus::Tied => "tied with the rank above".to_string(),
            GapStatus::Trailing {
                points_needed,
                ahead_rank,
            } => format!("{} pts to overtake rank {}", points_needed, ahead_rank),
        }
    }
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl LeaderboardRenderer for TextRenderer {
    fn render(&self, entries: &[LeaderboardEntry]) -> String {
        entries
            .iter()
            .map(|entry| {
                let progress = match entry.progress_percent.value() {
                    Some(pct) => format!("{}%", pct),
                    None => "-".to_string(),
                };
                format!(
                    "#{} {}, {} pts ({}) [{}]",
                    entry.rank,
                    entry.display_name,
                    entry.score,
                    progress,
                    Self::status_line(entry)
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn name(&self) -> &str {
        "text"
    }
}
