//! Booking allocation policy configuration.

use chrono::Duration;
use serde::{Deserialize, Serialize};

/// Booking allocation policy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingConfig {
    /// How long a waitlist entry (or a promoted offer) stays confirmable, in minutes.
    #[serde(default = "default_waitlist_hold")]
    pub waitlist_hold_minutes: u64,
    /// Longest allowed conference window, in hours.
    #[serde(default = "default_max_conference_hours")]
    pub max_conference_hours: u64,
}

impl BookingConfig {
    /// Waitlist hold as a chrono duration.
    pub fn waitlist_hold(&self) -> Duration {
        i64::try_from(self.waitlist_hold_minutes)
            .ok()
            .and_then(Duration::try_minutes)
            .unwrap_or(Duration::MAX)
    }

    /// Maximum conference window as a chrono duration.
    pub fn max_conference_duration(&self) -> Duration {
        i64::try_from(self.max_conference_hours)
            .ok()
            .and_then(Duration::try_hours)
            .unwrap_or(Duration::MAX)
    }
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            waitlist_hold_minutes: default_waitlist_hold(),
            max_conference_hours: default_max_conference_hours(),
        }
    }
}

fn default_waitlist_hold() -> u64 {
    60
}

fn default_max_conference_hours() -> u64 {
    12
}
