//! Request and response types for the booking engine.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use confbook_entity::BookingStatus;

/// Request to book a seat at a conference.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookConferenceRequest {
    /// Name of the conference to book.
    pub conference_name: String,
    /// The booking user.
    pub user_id: String,
}

impl BookConferenceRequest {
    /// Convenience constructor.
    pub fn new(conference_name: impl Into<String>, user_id: impl Into<String>) -> Self {
        Self {
            conference_name: conference_name.into(),
            user_id: user_id.into(),
        }
    }
}

/// Externally visible status of a booking.
///
/// `status` may be a derived `Expired` that is not yet stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingStatusView {
    /// Reported status.
    pub status: BookingStatus,
    /// Confirmation deadline, present only while one applies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub waitlist_until: Option<DateTime<Utc>>,
}

/// Per-rule counts from one sweep pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SweepReport {
    /// Waitlist entries past their deadline, now canceled.
    pub expired_waitlist: usize,
    /// Promoted offers past their deadline, now expired.
    pub lapsed_offers: usize,
    /// Waitlist entries canceled for overlapping a confirmed booking.
    pub overlaps_cleared: usize,
    /// Bookings closed because their conference ended.
    pub closed_out: usize,
}

impl SweepReport {
    /// Total number of bookings changed by the pass.
    pub fn total(&self) -> usize {
        self.expired_waitlist + self.lapsed_offers + self.overlaps_cleared + self.closed_out
    }
}
