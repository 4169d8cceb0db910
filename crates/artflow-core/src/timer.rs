//! Countdown timer implementation.
//!
//! The timer is a tick-driven state machine. It does not use internal
//! threads - the caller delivers one `tick()` per elapsed second while the
//! timer is running.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Running <-> Paused
//!           |
//!           v
//!        Expired
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! let mut timer = CountdownTimer::new(600);
//! timer.start();
//! // Once per second:
//! timer.tick(); // Returns Some(Event::TimerExpired) when the countdown hits zero
//! ```

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::events::Event;

/// Preset durations offered to the user, in seconds.
pub const DURATION_PRESETS: [u32; 3] = [300, 600, 1200];

/// Duration the timer is armed with when an activity is selected.
pub const DEFAULT_DURATION_SECS: u32 = 600;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimerState {
    Idle,
    Running,
    Paused,
    Expired,
}

/// Core countdown timer.
///
/// Operates on delivered ticks -- no internal thread. One tick is one elapsed
/// second; nothing decrements between ticks, so the machine is fully
/// deterministic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountdownTimer {
    duration_secs: u32,
    remaining_secs: u32,
    state: TimerState,
}

impl CountdownTimer {
    /// Create a new timer armed with `duration_secs`, in the `Idle` state.
    pub fn new(duration_secs: u32) -> Self {
        Self {
            duration_secs,
            remaining_secs: duration_secs,
            state: TimerState::Idle,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn state(&self) -> TimerState {
        self.state
    }

    pub fn duration_secs(&self) -> u32 {
        self.duration_secs
    }

    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    /// Active seconds consumed so far. Valid in every state; this is the
    /// figure a recorded session's duration comes from, whether the countdown
    /// expired or was stopped early.
    pub fn elapsed_secs(&self) -> u32 {
        self.duration_secs - self.remaining_secs
    }

    /// 0.0 .. 1.0 progress through the selected duration.
    pub fn progress(&self) -> f64 {
        if self.duration_secs == 0 {
            return 0.0;
        }
        1.0 - (f64::from(self.remaining_secs) / f64::from(self.duration_secs))
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Arm the timer with a new duration. Only honored while `Idle`; from
    /// `Paused` or `Expired` the caller must `reset()` first.
    pub fn select_duration(&mut self, secs: u32) -> Option<Event> {
        if self.state != TimerState::Idle || secs == 0 {
            return None;
        }
        self.duration_secs = secs;
        self.remaining_secs = secs;
        Some(Event::DurationSelected {
            duration_secs: secs,
            at: Utc::now(),
        })
    }

    pub fn start(&mut self) -> Option<Event> {
        match self.state {
            TimerState::Idle => {
                self.state = TimerState::Running;
                Some(Event::TimerStarted {
                    duration_secs: self.duration_secs,
                    remaining_secs: self.remaining_secs,
                    at: Utc::now(),
                })
            }
            TimerState::Paused => {
                self.state = TimerState::Running;
                Some(Event::TimerResumed {
                    remaining_secs: self.remaining_secs,
                    at: Utc::now(),
                })
            }
            TimerState::Running | TimerState::Expired => None,
        }
    }

    /// The single control the user sees: start, pause and resume are the same
    /// button applied to whichever state is active.
    pub fn toggle(&mut self) -> Option<Event> {
        match self.state {
            TimerState::Running => {
                self.state = TimerState::Paused;
                Some(Event::TimerPaused {
                    remaining_secs: self.remaining_secs,
                    at: Utc::now(),
                })
            }
            TimerState::Idle | TimerState::Paused => self.start(),
            TimerState::Expired => None,
        }
    }

    /// Deliver one elapsed second. Returns `Some(Event::TimerExpired)` when
    /// the countdown reaches zero; any other state swallows the tick.
    pub fn tick(&mut self) -> Option<Event> {
        if self.state != TimerState::Running {
            return None;
        }
        self.remaining_secs = self.remaining_secs.saturating_sub(1);
        if self.remaining_secs == 0 {
            self.state = TimerState::Expired;
            return Some(Event::TimerExpired {
                duration_secs: self.duration_secs,
                at: Utc::now(),
            });
        }
        None
    }

    /// Back to `Idle` with the full selected duration.
    pub fn reset(&mut self) -> Option<Event> {
        self.state = TimerState::Idle;
        self.remaining_secs = self.duration_secs;
        Some(Event::TimerReset { at: Utc::now() })
    }
}

impl Default for CountdownTimer {
    fn default() -> Self {
        Self::new(DEFAULT_DURATION_SECS)
    }
}
