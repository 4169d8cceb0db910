use clap::Subcommand;

use artflow_core::{stats, Database};

use super::common;

#[derive(Subcommand)]
pub enum SessionAction {
    /// Record the current activity session and return home
    Finish {
        /// Optional mood label for the reflection step
        #[arg(long)]
        mood: Option<String>,
    },
    /// List recorded sessions, most recent first
    List {
        #[arg(long, default_value = "5")]
        limit: usize,
    },
    /// Delete all recorded history (signing out never does this)
    Erase {
        /// Required confirmation
        #[arg(long)]
        yes: bool,
    },
}

pub fn run(action: SessionAction) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::open()?;
    let mut profile = common::require_user(&db)?;

    match action {
        SessionAction::Finish { mood } => {
            let mut flow = common::load_flow(&db, &profile.id);
            match flow.finish(&mut profile, mood) {
                Some(event) => {
                    db.save_user(&profile)?;
                    common::save_flow(&db, &profile.id, &flow)?;
                    println!("{}", serde_json::to_string_pretty(&event)?);
                }
                None => return Err("no activity selected (run `activity start` first)".into()),
            }
        }
        SessionAction::List { limit } => {
            let recent = stats::recent_sessions(profile.sessions.all(), limit);
            println!("{}", serde_json::to_string_pretty(&recent)?);
        }
        SessionAction::Erase { yes } => {
            if !yes {
                return Err("pass --yes to delete all recorded history".into());
            }
            profile.erase_history();
            db.save_user(&profile)?;
            println!("{{\"type\": \"history_erased\"}}");
        }
    }
    Ok(())
}
