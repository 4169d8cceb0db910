use clap::Subcommand;

use artflow_core::{Config, Database};

use super::common;

#[derive(Subcommand)]
pub enum AnxietyAction {
    /// Set the current anxiety level (1-10)
    Set { level: u8 },
    /// Print the current anxiety level
    Show,
}

pub fn run(action: AnxietyAction) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::open()?;
    let mut profile = common::require_user(&db)?;

    match action {
        AnxietyAction::Set { level } => {
            let event = profile.set_anxiety_level(level)?;
            db.save_user(&profile)?;
            println!("{}", serde_json::to_string_pretty(&event)?);

            let config = Config::load_or_default();
            if level >= config.tracking.high_anxiety_threshold {
                eprintln!("Try a quick activity right now. Even 5 minutes can help.");
            }
        }
        AnxietyAction::Show => {
            println!("{{\"anxiety_level\": {}}}", profile.anxiety_level);
        }
    }
    Ok(())
}
