use clap::Subcommand;

use artflow_core::{Config, Database, ValidationError};

use super::common;

#[derive(Subcommand)]
pub enum TimerAction {
    /// Arm the countdown with a preset duration (seconds)
    Select {
        /// One of the configured presets, e.g. 300, 600 or 1200
        secs: u32,
    },
    /// Start the countdown
    Start,
    /// Start or pause, whichever applies
    Toggle,
    /// Deliver elapsed seconds to the running countdown
    Tick {
        #[arg(long, default_value = "1")]
        count: u32,
    },
    /// Print the current timer state as JSON
    Status,
    /// Reset the countdown to idle
    Reset,
}

pub fn run(action: TimerAction) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::open()?;
    let profile = common::require_user(&db)?;
    let mut flow = common::load_flow(&db, &profile.id);

    match action {
        TimerAction::Select { secs } => {
            let config = Config::load_or_default();
            if !config.timer.preset_secs.contains(&secs) {
                return Err(ValidationError::InvalidDuration { secs }.into());
            }
            match flow.select_duration(secs) {
                Some(event) => println!("{}", serde_json::to_string_pretty(&event)?),
                None => println!("{}", serde_json::to_string_pretty(&flow.snapshot())?),
            }
        }
        TimerAction::Start => match flow.start() {
            Some((event, _)) => println!("{}", serde_json::to_string_pretty(&event)?),
            None => println!("{}", serde_json::to_string_pretty(&flow.snapshot())?),
        },
        TimerAction::Toggle => match flow.toggle() {
            Some(event) => println!("{}", serde_json::to_string_pretty(&event)?),
            None => println!("{}", serde_json::to_string_pretty(&flow.snapshot())?),
        },
        TimerAction::Tick { count } => {
            let handle = flow.handle();
            for _ in 0..count {
                if let Some(event) = flow.tick(&handle) {
                    println!("{}", serde_json::to_string_pretty(&event)?);
                }
            }
            println!("{}", serde_json::to_string_pretty(&flow.snapshot())?);
        }
        TimerAction::Status => {
            println!("{}", serde_json::to_string_pretty(&flow.snapshot())?);
        }
        TimerAction::Reset => match flow.reset() {
            Some(event) => println!("{}", serde_json::to_string_pretty(&event)?),
            None => println!("{}", serde_json::to_string_pretty(&flow.snapshot())?),
        },
    }

    common::save_flow(&db, &profile.id, &flow)?;
    Ok(())
}
