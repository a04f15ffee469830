//! Offer countdown backed by a persisted deadline.
//!
//! The deadline renews itself: once it has passed, the next tick moves it
//! another 24 hours ahead, so the banner never freezes at zero.

use std::fmt;

use log::warn;

use crate::config::{COUNTDOWN_STORAGE_KEY, OFFER_WINDOW_MS};
use crate::storage::KeyValueStore;

const SECOND_MS: i64 = 1_000;
const MINUTE_MS: i64 = 60 * SECOND_MS;
const HOUR_MS: i64 = 60 * MINUTE_MS;
const DAY_MS: i64 = 24 * HOUR_MS;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Remaining {
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl Remaining {
    pub fn from_millis(delta: i64) -> Self {
        Self {
            hours: (delta % DAY_MS) / HOUR_MS,
            minutes: (delta % HOUR_MS) / MINUTE_MS,
            seconds: (delta % MINUTE_MS) / SECOND_MS,
        }
    }

    pub fn hours_text(&self) -> String {
        format!("{:02}", self.hours)
    }

    pub fn minutes_text(&self) -> String {
        format!("{:02}", self.minutes)
    }

    pub fn seconds_text(&self) -> String {
        format!("{:02}", self.seconds)
    }
}

impl fmt::Display for Remaining {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hours, self.minutes, self.seconds)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownTick {
    Running(Remaining),
    /// Only reachable if the deadline is behind `now` after renewal.
    Ended,
}

/// Current deadline, creating or renewing it as needed.
pub fn current_target(store: &dyn KeyValueStore, now_ms: i64) -> i64 {
    let stored = store.get(COUNTDOWN_STORAGE_KEY).and_then(|raw| {
        let parsed = raw.trim().parse::<i64>();
        if parsed.is_err() {
            warn!("Ignoring unreadable countdown target {:?}", raw);
        }
        parsed.ok()
    });

    match stored {
        Some(target) if now_ms <= target => target,
        _ => {
            let target = now_ms + OFFER_WINDOW_MS;
            if let Err(e) = store.set(COUNTDOWN_STORAGE_KEY, &target.to_string()) {
                warn!("Countdown target not persisted: {}", e);
            }
            target
        }
    }
}

pub fn tick(store: &dyn KeyValueStore, now_ms: i64) -> CountdownTick {
    let time_left = current_target(store, now_ms) - now_ms;
    if time_left < 0 {
        CountdownTick::Ended
    } else {
        CountdownTick::Running(Remaining::from_millis(time_left))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    const NOW: i64 = 1_760_000_000_000;

    fn stored_target(store: &MemoryStorage) -> i64 {
        store.get(COUNTDOWN_STORAGE_KEY).unwrap().parse().unwrap()
    }

    #[test]
    fn first_visit_starts_a_full_day() {
        let store = MemoryStorage::new();
        let tick = tick(&store, NOW);
        assert_eq!(stored_target(&store), NOW + OFFER_WINDOW_MS);
        // a full 24h wraps to 00 hours, matching the modulo-day display
        assert_eq!(
            tick,
            CountdownTick::Running(Remaining { hours: 0, minutes: 0, seconds: 0 })
        );
    }

    #[test]
    fn existing_target_is_kept() {
        let store = MemoryStorage::new();
        let target = NOW + 2 * HOUR_MS + 3 * MINUTE_MS + 4 * SECOND_MS + 999;
        store.set(COUNTDOWN_STORAGE_KEY, &target.to_string()).unwrap();

        let tick = tick(&store, NOW);
        assert_eq!(stored_target(&store), target);
        let CountdownTick::Running(remaining) = tick else {
            panic!("countdown should be running");
        };
        assert_eq!(remaining.to_string(), "02:03:04");
        assert_eq!(remaining.hours_text(), "02");
    }

    #[test]
    fn elapsed_target_is_renewed_into_the_future() {
        let store = MemoryStorage::new();
        store.set(COUNTDOWN_STORAGE_KEY, &(NOW - 1_000).to_string()).unwrap();

        let tick = tick(&store, NOW);
        assert!(stored_target(&store) > NOW);
        assert!(matches!(tick, CountdownTick::Running(_)));
    }

    #[test]
    fn target_equal_to_now_is_not_renewed() {
        let store = MemoryStorage::new();
        store.set(COUNTDOWN_STORAGE_KEY, &NOW.to_string()).unwrap();
        assert_eq!(current_target(&store, NOW), NOW);
    }

    #[test]
    fn unreadable_target_is_replaced() {
        let store = MemoryStorage::new();
        store.set(COUNTDOWN_STORAGE_KEY, "amanhã").unwrap();
        assert_eq!(current_target(&store, NOW), NOW + OFFER_WINDOW_MS);
        assert_eq!(stored_target(&store), NOW + OFFER_WINDOW_MS);
    }

    #[test]
    fn remaining_pads_two_digits() {
        let r = Remaining::from_millis(23 * HOUR_MS + 59 * MINUTE_MS + 9 * SECOND_MS);
        assert_eq!(r.to_string(), "23:59:09");
        assert_eq!(r.seconds_text(), "09");
    }
}
