use chrono::Utc;
use clap::Subcommand;

use artflow_core::{stats, Config, Database};

use super::common;

#[derive(Subcommand)]
pub enum StatsAction {
    /// Counts, averages, streak and week-over-week change
    Summary,
    /// Anxiety levels of the most recent sessions, oldest first
    Trend,
    /// Most recent sessions, newest first
    Recent,
}

pub fn run(action: StatsAction) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::open()?;
    let profile = common::require_user(&db)?;
    let config = Config::load_or_default();

    match action {
        StatsAction::Summary => {
            let summary = stats::summary(profile.sessions.all(), Utc::now());
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        StatsAction::Trend => {
            let trend = stats::recent_trend(profile.sessions.all(), config.tracking.trend_window);
            println!("{}", serde_json::to_string_pretty(&trend)?);
        }
        StatsAction::Recent => {
            let recent = stats::recent_sessions(profile.sessions.all(), config.tracking.recent_limit);
            println!("{}", serde_json::to_string_pretty(&recent)?);
        }
    }
    Ok(())
}
