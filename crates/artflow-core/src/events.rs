use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::timer::TimerState;

/// Every state change in the system produces an Event.
/// The CLI prints them; a graphical front end would subscribe to the same stream.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    ActivitySelected {
        title: String,
        duration_secs: u32,
        at: DateTime<Utc>,
    },
    DurationSelected {
        duration_secs: u32,
        at: DateTime<Utc>,
    },
    TimerStarted {
        duration_secs: u32,
        remaining_secs: u32,
        at: DateTime<Utc>,
    },
    TimerPaused {
        remaining_secs: u32,
        at: DateTime<Utc>,
    },
    TimerResumed {
        remaining_secs: u32,
        at: DateTime<Utc>,
    },
    /// The countdown reached zero; further ticks are dropped.
    TimerExpired {
        duration_secs: u32,
        at: DateTime<Utc>,
    },
    TimerReset {
        at: DateTime<Utc>,
    },
    /// A completed (or early-terminated) activity was appended to the log.
    SessionRecorded {
        session_id: String,
        activity_title: String,
        anxiety_level: u8,
        duration_secs: u32,
        at: DateTime<Utc>,
    },
    AnxietyUpdated {
        level: u8,
        at: DateTime<Utc>,
    },
    StateSnapshot {
        state: TimerState,
        activity_title: Option<String>,
        remaining_secs: u32,
        duration_secs: u32,
        elapsed_secs: u32,
        at: DateTime<Utc>,
    },
}
