//! Derived statistics over the session log.
//!
//! Pure functions: input is a session slice, output is a number or a slice
//! view. Nothing here mutates state or touches storage, so every figure the
//! UI shows can be recomputed from scratch on each read.

use std::collections::BTreeSet;

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::session::Session;

/// Number of sessions shown in the anxiety trend chart.
pub const TREND_WINDOW: usize = 7;

/// Number of entries shown in the recent-sessions list.
pub const RECENT_LIMIT: usize = 5;

/// Serializable roll-up of every derived figure, for one-shot display.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Summary {
    pub sessions: u64,
    pub average_anxiety: u8,
    pub total_minutes: u64,
    pub streak_days: u32,
    pub weekly_change: i32,
}

pub fn count(sessions: &[Session]) -> usize {
    sessions.len()
}

/// Rounded mean of the recorded anxiety levels; 0 for an empty log.
pub fn average_anxiety(sessions: &[Session]) -> u8 {
    if sessions.is_empty() {
        return 0;
    }
    let sum: u32 = sessions.iter().map(|s| u32::from(s.anxiety_level)).sum();
    (f64::from(sum) / sessions.len() as f64).round() as u8
}

/// Rounded total of active time across the log, in minutes; 0 when empty.
pub fn total_minutes(sessions: &[Session]) -> u64 {
    let secs: u64 = sessions.iter().map(|s| u64::from(s.duration_secs)).sum();
    (secs as f64 / 60.0).round() as u64
}

/// Anxiety levels of the last `window` sessions, in chronological order.
/// Always a suffix of the log; empty when there are no sessions.
pub fn recent_trend(sessions: &[Session], window: usize) -> Vec<u8> {
    let start = sessions.len().saturating_sub(window);
    sessions[start..].iter().map(|s| s.anxiety_level).collect()
}

/// The last `limit` sessions, most recent first.
pub fn recent_sessions(sessions: &[Session], limit: usize) -> Vec<&Session> {
    sessions.iter().rev().take(limit).collect()
}

/// Consecutive calendar days with at least one session, counted back from
/// `today` -- or from yesterday when today has no session yet, so a streak is
/// not broken before the day is over.
pub fn streak_days(sessions: &[Session], today: NaiveDate) -> u32 {
    let days: BTreeSet<NaiveDate> = sessions
        .iter()
        .map(|s| s.completed_at.date_naive())
        .collect();

    let mut day = if days.contains(&today) {
        today
    } else {
        match today.pred_opt() {
            Some(yesterday) if days.contains(&yesterday) => yesterday,
            _ => return 0,
        }
    };

    let mut streak = 0;
    while days.contains(&day) {
        streak += 1;
        match day.pred_opt() {
            Some(prev) => day = prev,
            None => break,
        }
    }
    streak
}

/// Mean anxiety over the last 7 days minus the mean over the 7 days before
/// that, rounded. Negative means anxiety went down. 0 when either window has
/// no sessions to compare.
pub fn weekly_change(sessions: &[Session], now: DateTime<Utc>) -> i32 {
    let week = Duration::days(7);
    let mean = |window: &[&Session]| {
        window
            .iter()
            .map(|s| f64::from(s.anxiety_level))
            .sum::<f64>()
            / window.len() as f64
    };

    let current: Vec<&Session> = sessions
        .iter()
        .filter(|s| s.completed_at > now - week && s.completed_at <= now)
        .collect();
    let previous: Vec<&Session> = sessions
        .iter()
        .filter(|s| s.completed_at > now - week - week && s.completed_at <= now - week)
        .collect();

    if current.is_empty() || previous.is_empty() {
        return 0;
    }
    (mean(&current) - mean(&previous)).round() as i32
}

/// Compute every derived figure at once.
pub fn summary(sessions: &[Session], now: DateTime<Utc>) -> Summary {
    Summary {
        sessions: sessions.len() as u64,
        average_anxiety: average_anxiety(sessions),
        total_minutes: total_minutes(sessions),
        streak_days: streak_days(sessions, now.date_naive()),
        weekly_change: weekly_change(sessions, now),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn session_at(level: u8, duration_secs: u32, completed_at: DateTime<Utc>) -> Session {
        Session::new("Quick Sketching", level, duration_secs, completed_at, None)
    }

    fn sessions_with_levels(levels: &[u8]) -> Vec<Session> {
        levels
            .iter()
            .map(|&l| session_at(l, 300, Utc::now()))
            .collect()
    }

    #[test]
    fn average_anxiety_empty_is_zero() {
        assert_eq!(average_anxiety(&[]), 0);
    }

    #[test]
    fn average_anxiety_rounds_the_mean() {
        // mean 5.5 rounds away from zero to 6
        assert_eq!(average_anxiety(&sessions_with_levels(&[5, 6])), 6);
        assert_eq!(average_anxiety(&sessions_with_levels(&[7, 6, 8])), 7);
        assert_eq!(average_anxiety(&sessions_with_levels(&[1, 2])), 2);
    }

    #[test]
    fn total_minutes_rounds_summed_seconds() {
        assert_eq!(total_minutes(&[]), 0);

        let sessions = vec![
            session_at(5, 120, Utc::now()),
            session_at(5, 180, Utc::now()),
        ];
        assert_eq!(total_minutes(&sessions), 5);

        // 90s rounds up to 2 minutes
        assert_eq!(total_minutes(&[session_at(5, 90, Utc::now())]), 2);
    }

    #[test]
    fn recent_trend_empty_log() {
        assert!(recent_trend(&[], TREND_WINDOW).is_empty());
    }

    #[test]
    fn recent_sessions_is_reverse_of_trend_slice() {
        let sessions = sessions_with_levels(&[8, 7, 6, 7, 5, 4, 5, 3]);
        let trend = recent_trend(&sessions, 5);
        let recent: Vec<u8> = recent_sessions(&sessions, 5)
            .iter()
            .map(|s| s.anxiety_level)
            .collect();

        let mut reversed = trend.clone();
        reversed.reverse();
        assert_eq!(recent, reversed);
    }

    #[test]
    fn streak_counts_back_from_today() {
        let now = Utc::now();
        let sessions: Vec<Session> = (0..3)
            .map(|d| session_at(5, 300, now - Duration::days(d)))
            .collect();
        assert_eq!(streak_days(&sessions, now.date_naive()), 3);
    }

    #[test]
    fn streak_survives_a_day_with_no_session_yet() {
        let now = Utc::now();
        let sessions = vec![
            session_at(5, 300, now - Duration::days(1)),
            session_at(5, 300, now - Duration::days(2)),
        ];
        assert_eq!(streak_days(&sessions, now.date_naive()), 2);
    }

    #[test]
    fn streak_is_zero_after_a_gap() {
        let now = Utc::now();
        let sessions = vec![session_at(5, 300, now - Duration::days(3))];
        assert_eq!(streak_days(&sessions, now.date_naive()), 0);
    }

    #[test]
    fn streak_ignores_duplicate_sessions_on_one_day() {
        let now = Utc::now();
        let sessions = vec![
            session_at(5, 300, now),
            session_at(6, 600, now),
        ];
        assert_eq!(streak_days(&sessions, now.date_naive()), 1);
    }

    #[test]
    fn weekly_change_compares_adjacent_weeks() {
        let now = Utc::now();
        let sessions = vec![
            session_at(8, 300, now - Duration::days(10)),
            session_at(8, 300, now - Duration::days(9)),
            session_at(6, 300, now - Duration::days(2)),
            session_at(6, 300, now - Duration::days(1)),
        ];
        assert_eq!(weekly_change(&sessions, now), -2);
    }

    #[test]
    fn weekly_change_needs_both_windows() {
        let now = Utc::now();
        let sessions = vec![session_at(6, 300, now - Duration::days(1))];
        assert_eq!(weekly_change(&sessions, now), 0);
        assert_eq!(weekly_change(&[], now), 0);
    }

    #[test]
    fn summary_rolls_up_all_figures() {
        let now = Utc::now();
        let sessions = vec![
            session_at(7, 120, now),
            session_at(5, 180, now),
        ];
        let s = summary(&sessions, now);
        assert_eq!(s.sessions, 2);
        assert_eq!(s.average_anxiety, 6);
        assert_eq!(s.total_minutes, 5);
        assert_eq!(s.streak_days, 1);
        assert_eq!(s.weekly_change, 0);
    }

    proptest! {
        #[test]
        fn trend_is_a_chronological_suffix(levels in proptest::collection::vec(1u8..=10, 0..30)) {
            let sessions = sessions_with_levels(&levels);
            let trend = recent_trend(&sessions, TREND_WINDOW);

            prop_assert!(trend.len() <= TREND_WINDOW);
            let start = levels.len().saturating_sub(TREND_WINDOW);
            prop_assert_eq!(&trend[..], &levels[start..]);
        }

        #[test]
        fn recent_mirrors_trend(levels in proptest::collection::vec(1u8..=10, 0..30)) {
            let sessions = sessions_with_levels(&levels);
            let trend = recent_trend(&sessions, RECENT_LIMIT);
            let recent: Vec<u8> = recent_sessions(&sessions, RECENT_LIMIT)
                .iter()
                .map(|s| s.anxiety_level)
                .collect();

            let mut reversed = trend;
            reversed.reverse();
            prop_assert_eq!(recent, reversed);
        }

        #[test]
        fn average_stays_on_the_scale(levels in proptest::collection::vec(1u8..=10, 1..30)) {
            let avg = average_anxiety(&sessions_with_levels(&levels));
            prop_assert!((1..=10).contains(&avg));
        }
    }
}
