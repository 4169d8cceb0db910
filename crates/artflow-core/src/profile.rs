//! The account-scoped user record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ValidationError;
use crate::events::Event;
use crate::session::{Session, SessionLog};

pub const MIN_ANXIETY_LEVEL: u8 = 1;
pub const MAX_ANXIETY_LEVEL: u8 = 10;
pub const DEFAULT_ANXIETY_LEVEL: u8 = 5;

/// One user: credentials, the current anxiety scalar and the full session
/// log. Persisted whole as a single snapshot on every mutation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub email: String,
    /// Argon2 PHC string; the plaintext never leaves the sign-up/sign-in call.
    pub password_hash: String,
    #[serde(default = "default_anxiety_level")]
    pub anxiety_level: u8,
    #[serde(default)]
    pub sessions: SessionLog,
    pub updated_at: DateTime<Utc>,
}

fn default_anxiety_level() -> u8 {
    DEFAULT_ANXIETY_LEVEL
}

impl UserProfile {
    pub fn new(email: impl Into<String>, password_hash: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            email: email.into(),
            password_hash: password_hash.into(),
            anxiety_level: DEFAULT_ANXIETY_LEVEL,
            sessions: SessionLog::new(),
            updated_at: Utc::now(),
        }
    }

    /// Update the current anxiety scalar. Values outside 1..=10 are rejected.
    pub fn set_anxiety_level(&mut self, level: u8) -> Result<Event, ValidationError> {
        if !(MIN_ANXIETY_LEVEL..=MAX_ANXIETY_LEVEL).contains(&level) {
            return Err(ValidationError::AnxietyOutOfRange { value: level });
        }
        self.anxiety_level = level;
        self.updated_at = Utc::now();
        Ok(Event::AnxietyUpdated {
            level,
            at: self.updated_at,
        })
    }

    /// Append a session to the log and stamp the record dirty.
    pub fn record(&mut self, session: Session) {
        self.sessions.append(session);
        self.updated_at = Utc::now();
    }

    /// Delete all recorded history. Distinct from signing out, which keeps
    /// the log untouched.
    pub fn erase_history(&mut self) {
        self.sessions.clear();
        self.updated_at = Utc::now();
    }
}
