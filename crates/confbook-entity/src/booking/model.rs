//! Booking entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use confbook_core::types::BookingId;

use super::status::{BookingStatus, CancelReason};

/// A user's claim on a conference seat.
///
/// `waitlist_until` is set exactly when the status is `Waitlisted` or
/// `PendingConfirmation`. `cancel_reason` is set only for `Canceled`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    /// Generated unique identifier.
    pub id: BookingId,
    /// The user holding the booking.
    pub user_id: String,
    /// Name of the booked conference.
    pub conference_id: String,
    /// Current lifecycle status.
    pub status: BookingStatus,
    /// Confirmation deadline for waitlisted and pending bookings.
    pub waitlist_until: Option<DateTime<Utc>>,
    /// Why the booking was canceled.
    pub cancel_reason: Option<CancelReason>,
    /// When the booking was created.
    pub created_at: DateTime<Utc>,
    /// Last status change.
    pub updated_at: DateTime<Utc>,
}

impl Booking {
    /// A booking that holds a seat.
    pub fn confirmed(
        user_id: impl Into<String>,
        conference_id: impl Into<String>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: BookingId::new(),
            user_id: user_id.into(),
            conference_id: conference_id.into(),
            status: BookingStatus::Confirmed,
            waitlist_until: None,
            cancel_reason: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// A booking queued for a seat until `deadline`.
    pub fn waitlisted(
        user_id: impl Into<String>,
        conference_id: impl Into<String>,
        deadline: DateTime<Utc>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            status: BookingStatus::Waitlisted,
            waitlist_until: Some(deadline),
            ..Self::confirmed(user_id, conference_id, now)
        }
    }

    /// Whether the booking is still live.
    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }

    /// Whether the booking's confirmation deadline has passed at `now`.
    ///
    /// Always `false` for bookings that carry no deadline.
    pub fn deadline_passed(&self, now: DateTime<Utc>) -> bool {
        self.status.awaits_confirmation() && self.waitlist_until.is_none_or(|until| until <= now)
    }

    /// Move to `Confirmed`, dropping the deadline.
    pub fn confirm(&mut self, now: DateTime<Utc>) {
        self.status = BookingStatus::Confirmed;
        self.waitlist_until = None;
        self.updated_at = now;
    }

    /// Offer a freed seat; the booking must be confirmed before `deadline`.
    pub fn offer(&mut self, deadline: DateTime<Utc>, now: DateTime<Utc>) {
        self.status = BookingStatus::PendingConfirmation;
        self.waitlist_until = Some(deadline);
        self.updated_at = now;
    }

    /// Move to `Canceled` for `reason`.
    pub fn cancel(&mut self, reason: CancelReason, now: DateTime<Utc>) {
        self.status = BookingStatus::Canceled;
        self.waitlist_until = None;
        self.cancel_reason = Some(reason);
        self.updated_at = now;
    }

    /// Move to `Expired`.
    pub fn expire(&mut self, now: DateTime<Utc>) {
        self.status = BookingStatus::Expired;
        self.waitlist_until = None;
        self.updated_at = now;
    }
}
