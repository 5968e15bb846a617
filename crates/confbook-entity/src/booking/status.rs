//! Booking status and cancel-reason enumerations.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status of a booking.
///
/// `Canceled` and `Expired` are terminal; every other value is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BookingStatus {
    /// Holds one of the conference's slots.
    Confirmed,
    /// Queued for a slot until its deadline.
    Waitlisted,
    /// Offered a freed slot; must be confirmed before its deadline.
    PendingConfirmation,
    /// Closed; any held slot has been released.
    Canceled,
    /// The confirmation deadline passed.
    Expired,
}

impl BookingStatus {
    /// Check if the booking is in a terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Canceled | Self::Expired)
    }

    /// Check if the booking is still live (not terminal).
    pub fn is_active(&self) -> bool {
        !self.is_terminal()
    }

    /// Check if the booking is waiting on a confirmation deadline.
    pub fn awaits_confirmation(&self) -> bool {
        matches!(self, Self::Waitlisted | Self::PendingConfirmation)
    }

    /// Return the status name as serialized on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Confirmed => "Confirmed",
            Self::Waitlisted => "Waitlisted",
            Self::PendingConfirmation => "PendingConfirmation",
            Self::Canceled => "Canceled",
            Self::Expired => "Expired",
        }
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Why a booking ended up `Canceled`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CancelReason {
    /// The booking holder canceled it.
    UserRequested,
    /// A waitlist entry passed its deadline and the sweep closed it.
    WaitlistLapsed,
    /// The user confirmed a seat at an overlapping conference.
    SupersededByOverlap,
    /// The conference finished.
    ConferenceEnded,
}

impl CancelReason {
    /// Return the reason as a snake_case string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UserRequested => "user_requested",
            Self::WaitlistLapsed => "waitlist_lapsed",
            Self::SupersededByOverlap => "superseded_by_overlap",
            Self::ConferenceEnded => "conference_ended",
        }
    }
}

impl fmt::Display for CancelReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
