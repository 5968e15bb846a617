//! Conference entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use confbook_core::types::TimeWindow;

/// A scheduled conference with a fixed number of seats.
///
/// `name` is the primary key. `available_slots` is the live counter that
/// booking confirmations decrement and cancellations restore; `capacity`
/// is the seat count the conference was created with and never changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conference {
    /// Unique conference name.
    pub name: String,
    /// When the conference starts.
    pub start_time: DateTime<Utc>,
    /// When the conference ends.
    pub end_time: DateTime<Utc>,
    /// Seats not currently held by a confirmed booking.
    pub available_slots: u32,
    /// Seats the conference was created with.
    pub capacity: u32,
}

impl Conference {
    /// Create a conference with all of its seats available.
    pub fn new(
        name: impl Into<String>,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
        slots: u32,
    ) -> Self {
        Self {
            name: name.into(),
            start_time,
            end_time,
            available_slots: slots,
            capacity: slots,
        }
    }

    /// The conference's scheduling window.
    pub fn window(&self) -> TimeWindow {
        TimeWindow::new(self.start_time, self.end_time)
    }

    /// Whether at least one seat is free.
    pub fn has_available_slot(&self) -> bool {
        self.available_slots > 0
    }

    /// Number of seats currently held by confirmed bookings.
    pub fn confirmed_count(&self) -> u32 {
        self.capacity.saturating_sub(self.available_slots)
    }

    /// Whether the conference window has fully elapsed.
    pub fn has_ended(&self, now: DateTime<Utc>) -> bool {
        self.window().has_ended(now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_new_conference_is_fully_available() {
        let start = Utc::now();
        let conf = Conference::new("RustConf", start, start + Duration::hours(8), 3);
        assert_eq!(conf.available_slots, 3);
        assert_eq!(conf.capacity, 3);
        assert_eq!(conf.confirmed_count(), 0);
        assert!(conf.has_available_slot());
    }

    #[test]
    fn test_zero_slot_conference() {
        let start = Utc::now();
        let conf = Conference::new("Closed", start, start + Duration::hours(1), 0);
        assert!(!conf.has_available_slot());
    }
}
