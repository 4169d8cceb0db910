//! Activity flow orchestration.
//!
//! Ties the pieces together: pick an activity, run the countdown, record the
//! elapsed time as a session on the signed-in profile. The flow is the sole
//! owner of the timer; every transition away from the active activity retires
//! the outstanding tick source before anything else happens.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::activity::ActivityCatalog;
use crate::error::ValidationError;
use crate::events::Event;
use crate::profile::UserProfile;
use crate::session::Session;
use crate::timer::{CountdownTimer, DEFAULT_DURATION_SECS};

/// Issued by [`ActivityFlow::start`] to whichever scheduler drives the
/// countdown. The handle is only valid for the activity it was issued for;
/// once the flow moves on, ticks delivered with the old handle are dropped,
/// so a leaked interval can never decrement a successor timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickHandle {
    epoch: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityFlow {
    activity: Option<String>,
    timer: CountdownTimer,
    /// Bumped on every transition away from the active activity; stale
    /// [`TickHandle`]s compare unequal and their ticks are ignored.
    epoch: u64,
}

impl ActivityFlow {
    pub fn new() -> Self {
        Self {
            activity: None,
            timer: CountdownTimer::new(DEFAULT_DURATION_SECS),
            epoch: 0,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn activity(&self) -> Option<&str> {
        self.activity.as_deref()
    }

    pub fn timer(&self) -> &CountdownTimer {
        &self.timer
    }

    /// Handle for the current activity's tick source.
    pub fn handle(&self) -> TickHandle {
        TickHandle { epoch: self.epoch }
    }

    pub fn snapshot(&self) -> Event {
        Event::StateSnapshot {
            state: self.timer.state(),
            activity_title: self.activity.clone(),
            remaining_secs: self.timer.remaining_secs(),
            duration_secs: self.timer.duration_secs(),
            elapsed_secs: self.timer.elapsed_secs(),
            at: Utc::now(),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Select an activity from the catalog and arm a fresh timer at the
    /// default duration.
    pub fn select_activity(
        &mut self,
        catalog: &ActivityCatalog,
        title: &str,
    ) -> Result<Event, ValidationError> {
        let template = catalog
            .find(title)
            .ok_or_else(|| ValidationError::UnknownActivity(title.to_string()))?;
        self.retire_ticks();
        self.activity = Some(template.title.clone());
        self.timer = CountdownTimer::new(DEFAULT_DURATION_SECS);
        Ok(Event::ActivitySelected {
            title: template.title.clone(),
            duration_secs: DEFAULT_DURATION_SECS,
            at: Utc::now(),
        })
    }

    /// Re-arm the timer with a preset duration. No-op without an activity or
    /// once the countdown has left `Idle`.
    pub fn select_duration(&mut self, secs: u32) -> Option<Event> {
        self.activity.as_ref()?;
        self.timer.select_duration(secs)
    }

    /// Start (or resume) the countdown, returning the tick handle the
    /// scheduler must present with every tick.
    pub fn start(&mut self) -> Option<(Event, TickHandle)> {
        self.activity.as_ref()?;
        let event = self.timer.start()?;
        Some((event, self.handle()))
    }

    /// The single start/pause control.
    pub fn toggle(&mut self) -> Option<Event> {
        self.activity.as_ref()?;
        self.timer.toggle()
    }

    /// Deliver one elapsed second on behalf of `handle`'s tick source.
    /// Stale handles are ignored.
    pub fn tick(&mut self, handle: &TickHandle) -> Option<Event> {
        if handle.epoch != self.epoch {
            return None;
        }
        self.timer.tick()
    }

    /// Reset the countdown without leaving the activity.
    pub fn reset(&mut self) -> Option<Event> {
        self.activity.as_ref()?;
        self.retire_ticks();
        self.timer.reset()
    }

    /// Record the elapsed time as a session on `profile` and return home.
    /// Requires an active activity; a zero-elapsed finish is recorded, not
    /// rejected.
    pub fn finish(&mut self, profile: &mut UserProfile, mood: Option<String>) -> Option<Event> {
        let title = self.activity.take()?;
        let session = Session::new(
            title.clone(),
            profile.anxiety_level,
            self.timer.elapsed_secs(),
            Utc::now(),
            mood,
        );
        let event = Event::SessionRecorded {
            session_id: session.id.clone(),
            activity_title: title,
            anxiety_level: session.anxiety_level,
            duration_secs: session.duration_secs,
            at: session.completed_at,
        };
        profile.record(session);
        self.retire_ticks();
        self.timer = CountdownTimer::new(DEFAULT_DURATION_SECS);
        Some(event)
    }

    /// Leave the current activity without recording anything.
    pub fn clear_activity(&mut self) -> Option<Event> {
        self.activity.take()?;
        self.retire_ticks();
        self.timer = CountdownTimer::new(DEFAULT_DURATION_SECS);
        Some(Event::TimerReset { at: Utc::now() })
    }

    fn retire_ticks(&mut self) {
        self.epoch += 1;
    }
}

impl Default for ActivityFlow {
    fn default() -> Self {
        Self::new()
    }
}
