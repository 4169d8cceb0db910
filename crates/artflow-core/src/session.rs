//! Session records and the append-only session log.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Mood recorded when the caller supplies none at finish.
pub const COMPLETION_MOOD: &str = "completed";

/// One completed (or early-terminated) timed activity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub id: String,
    pub activity_title: String,
    /// User-reported scale of 1..=10, captured at recording time.
    pub anxiety_level: u8,
    pub duration_secs: u32,
    pub completed_at: DateTime<Utc>,
    pub mood: String,
}

impl Session {
    pub fn new(
        activity_title: impl Into<String>,
        anxiety_level: u8,
        duration_secs: u32,
        completed_at: DateTime<Utc>,
        mood: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            activity_title: activity_title.into(),
            anxiety_level,
            duration_secs,
            completed_at,
            mood: mood.unwrap_or_else(|| COMPLETION_MOOD.to_string()),
        }
    }
}

/// Chronological, append-only list of a user's sessions.
///
/// Entries are never mutated or removed individually; recency-based slicing
/// in the statistics deriver relies on insertion order being completion
/// order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionLog {
    #[serde(default)]
    sessions: Vec<Session>,
}

impl SessionLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a session to the end of the log.
    pub fn append(&mut self, session: Session) {
        self.sessions.push(session);
    }

    /// All sessions in insertion order.
    pub fn all(&self) -> &[Session] {
        &self.sessions
    }

    pub fn last(&self) -> Option<&Session> {
        self.sessions.last()
    }

    /// Empty the log. Only the explicit erase-history path calls this.
    pub fn clear(&mut self) {
        self.sessions.clear();
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(title: &str, level: u8) -> Session {
        Session::new(title, level, 300, Utc::now(), None)
    }

    #[test]
    fn append_preserves_order_and_prior_entries() {
        let mut log = SessionLog::new();
        log.append(session("Mandala Patterns", 7));
        let first_id = log.all()[0].id.clone();

        log.append(session("Quick Sketching", 4));
        assert_eq!(log.len(), 2);
        assert_eq!(log.all()[0].id, first_id);
        assert_eq!(log.last().unwrap().activity_title, "Quick Sketching");
    }

    #[test]
    fn default_mood_is_completion_marker() {
        let s = session("5-Senses Drawing", 5);
        assert_eq!(s.mood, COMPLETION_MOOD);

        let chosen = Session::new("5-Senses Drawing", 5, 300, Utc::now(), Some("calm".into()));
        assert_eq!(chosen.mood, "calm");
    }

    #[test]
    fn session_ids_are_unique() {
        let a = session("Emotion Spectrum", 6);
        let b = session("Emotion Spectrum", 6);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn clear_empties_the_log() {
        let mut log = SessionLog::new();
        log.append(session("Anxiety Color Map", 8));
        log.clear();
        assert!(log.is_empty());
    }
}
