use clap::Subcommand;

use artflow_core::{ActivityCatalog, Database};

use super::common;

#[derive(Subcommand)]
pub enum ActivityAction {
    /// List the builtin activity catalog
    List,
    /// Select an activity and arm the timer at the default duration
    Start {
        /// Activity title, e.g. "Mandala Patterns"
        title: String,
    },
    /// Leave the current activity without recording a session
    Stop,
}

pub fn run(action: ActivityAction) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = ActivityCatalog::builtin();

    match action {
        ActivityAction::List => {
            println!("{}", serde_json::to_string_pretty(catalog.all())?);
        }
        ActivityAction::Start { title } => {
            let db = Database::open()?;
            let profile = common::require_user(&db)?;
            let mut flow = common::load_flow(&db, &profile.id);

            let event = flow.select_activity(&catalog, &title)?;
            common::save_flow(&db, &profile.id, &flow)?;
            println!("{}", serde_json::to_string_pretty(&event)?);
        }
        ActivityAction::Stop => {
            let db = Database::open()?;
            let profile = common::require_user(&db)?;
            let mut flow = common::load_flow(&db, &profile.id);

            match flow.clear_activity() {
                Some(event) => {
                    common::save_flow(&db, &profile.id, &flow)?;
                    println!("{}", serde_json::to_string_pretty(&event)?);
                }
                None => println!("{{\"type\": \"no_active_activity\"}}"),
            }
        }
    }
    Ok(())
}
