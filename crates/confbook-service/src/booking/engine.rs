//! The booking engine.
//!
//! Every mutating operation runs under the write side of one transaction
//! gate, so a reader going through the engine never sees a confirmed booking
//! without its slot decrement (or the reverse). Status reads take the read
//! side. The stores stay individually atomic and the conference store's
//! bounds-checked `adjust_slots` is the last guard against over-allocation.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use confbook_core::config::BookingConfig;
use confbook_core::error::{AppError, ErrorKind};
use confbook_core::result::AppResult;
use confbook_core::traits::Clock;
use confbook_core::types::BookingId;
use confbook_entity::{Booking, BookingStatus, CancelReason};
use confbook_store::{BookingStore, ConferenceStore, UserStore};

use super::dto::{BookConferenceRequest, BookingStatusView};

/// Allocates conference seats to users, with a waitlist for full conferences.
#[derive(Debug)]
pub struct BookingEngine {
    /// Conference store.
    pub(super) conferences: Arc<dyn ConferenceStore>,
    /// User store.
    users: Arc<dyn UserStore>,
    /// Booking store.
    pub(super) bookings: Arc<dyn BookingStore>,
    /// Time source for deadlines.
    pub(super) clock: Arc<dyn Clock>,
    /// Allocation policy.
    config: BookingConfig,
    /// Serializes multi-store sequences.
    pub(super) gate: RwLock<()>,
}

impl BookingEngine {
    /// Creates a new booking engine.
    pub fn new(
        conferences: Arc<dyn ConferenceStore>,
        users: Arc<dyn UserStore>,
        bookings: Arc<dyn BookingStore>,
        clock: Arc<dyn Clock>,
        config: BookingConfig,
    ) -> Self {
        Self {
            conferences,
            users,
            bookings,
            clock,
            config,
            gate: RwLock::new(()),
        }
    }

    /// Books a seat, or a waitlist entry if the conference is full.
    ///
    /// Fails with `NotFound` for an unknown conference or user and with
    /// `BookingConflict` if the user already holds a live booking for this
    /// conference or for any conference whose window overlaps it.
    pub async fn book_conference(&self, req: BookConferenceRequest) -> AppResult<BookingId> {
        let _tx = self.gate.write().await;
        let now = self.clock.now();

        let conference = self.conferences.find_by_name(&req.conference_name).await?;
        self.users.find_by_id(&req.user_id).await?;

        match self
            .bookings
            .find_active_booking(&req.user_id, &conference.name)
            .await
        {
            Ok(existing) => {
                return Err(AppError::booking_conflict(format!(
                    "User '{}' already has an active booking with ID: {}",
                    req.user_id, existing.id
                )));
            }
            Err(e) if e.is(ErrorKind::NotFound) => {}
            Err(e) => return Err(e),
        }

        if self
            .bookings
            .has_overlapping_active_bookings(&req.user_id, conference.window())
            .await?
        {
            return Err(AppError::booking_conflict(format!(
                "User '{}' already holds a booking overlapping '{}'",
                req.user_id, conference.name
            )));
        }

        let seat_taken = if conference.has_available_slot() {
            match self.conferences.adjust_slots(&conference.name, -1).await {
                Ok(_) => true,
                Err(e) if e.is(ErrorKind::SlotUnavailable) => false,
                Err(e) => return Err(e),
            }
        } else {
            false
        };

        let booking = if seat_taken {
            Booking::confirmed(&req.user_id, &conference.name, now)
        } else {
            Booking::waitlisted(&req.user_id, &conference.name, self.hold_deadline(now)?, now)
        };
        let (booking_id, status) = (booking.id, booking.status);

        if let Err(e) = self.bookings.create(booking).await {
            if seat_taken {
                self.release_slot(&conference.name).await;
            }
            return Err(e);
        }

        info!(
            booking_id = %booking_id,
            user_id = %req.user_id,
            conference = %conference.name,
            status = %status,
            "Booking created"
        );

        Ok(booking_id)
    }

    /// Confirms a waitlisted or promoted booking before its deadline.
    ///
    /// On success the user's other waitlist entries whose windows overlap
    /// this conference are canceled.
    pub async fn confirm_waitlist_booking(&self, booking_id: &BookingId) -> AppResult<()> {
        let _tx = self.gate.write().await;
        let now = self.clock.now();

        let mut booking = self.bookings.find_by_id(booking_id).await?;
        if !booking.status.awaits_confirmation() || booking.deadline_passed(now) {
            return Err(AppError::waitlist_expired(format!(
                "Booking '{booking_id}' is not awaiting confirmation or its deadline has passed"
            )));
        }

        let conference = self.conferences.find_by_name(&booking.conference_id).await?;
        if !conference.has_available_slot() {
            return Err(AppError::slot_unavailable(format!(
                "No slots available for '{}'",
                conference.name
            )));
        }

        let window = conference.window();
        if self
            .bookings
            .has_overlapping_confirmed_bookings(&booking.user_id, window)
            .await?
        {
            return Err(AppError::booking_conflict(format!(
                "User '{}' already holds a confirmed booking overlapping '{}'",
                booking.user_id, conference.name
            )));
        }

        self.conferences.adjust_slots(&conference.name, -1).await?;

        booking.confirm(now);
        if let Err(e) = self.bookings.update(booking.clone()).await {
            self.release_slot(&conference.name).await;
            return Err(e);
        }

        let cleared = self
            .bookings
            .remove_overlapping_waitlists(&booking.user_id, window, now)
            .await?;

        info!(
            booking_id = %booking_id,
            user_id = %booking.user_id,
            conference = %conference.name,
            overlaps_cleared = cleared,
            "Waitlisted booking confirmed"
        );

        Ok(())
    }

    /// Cancels a live booking.
    ///
    /// Canceling a confirmed booking frees its slot and offers it to the
    /// oldest waitlist entry; the slot stays free until that offer is
    /// confirmed. Canceling a terminal booking fails with `InvalidAction`.
    pub async fn cancel_booking(&self, booking_id: &BookingId) -> AppResult<()> {
        let _tx = self.gate.write().await;
        let now = self.clock.now();

        let booking = self.bookings.find_by_id(booking_id).await?;
        if booking.status.is_terminal() {
            return Err(AppError::invalid_action(format!(
                "Booking '{booking_id}' is already {}",
                booking.status
            )));
        }

        let held_seat = booking.status == BookingStatus::Confirmed;
        if held_seat {
            self.conferences
                .adjust_slots(&booking.conference_id, 1)
                .await?;
        }

        if let Err(e) = self
            .bookings
            .cancel(booking_id, CancelReason::UserRequested, now)
            .await
        {
            if held_seat {
                if let Err(rollback) = self.conferences.adjust_slots(&booking.conference_id, -1).await {
                    warn!(conference = %booking.conference_id, error = %rollback, "Slot rollback failed");
                }
            }
            return Err(e);
        }

        info!(
            booking_id = %booking_id,
            user_id = %booking.user_id,
            conference = %booking.conference_id,
            prior_status = %booking.status,
            "Booking canceled"
        );

        if held_seat {
            self.promote_next(&booking.conference_id, now).await?;
        }

        Ok(())
    }

    /// Reports a booking's status.
    ///
    /// A waitlisted or promoted booking whose deadline has passed is reported
    /// as `Expired` even before the sweep writes anything back.
    pub async fn get_booking_status(&self, booking_id: &BookingId) -> AppResult<BookingStatusView> {
        let _tx = self.gate.read().await;
        let now = self.clock.now();

        let booking = self.bookings.find_by_id(booking_id).await?;
        debug!(booking_id = %booking_id, status = %booking.status, "Booking status lookup");

        let view = match booking.status {
            BookingStatus::Canceled | BookingStatus::Expired => BookingStatusView {
                status: booking.status,
                waitlist_until: None,
            },
            _ if booking.deadline_passed(now) => BookingStatusView {
                status: BookingStatus::Expired,
                waitlist_until: None,
            },
            status => BookingStatusView {
                status,
                waitlist_until: booking.waitlist_until,
            },
        };

        Ok(view)
    }

    /// Offers a freed slot to the head of the conference's waitlist.
    async fn promote_next(&self, conference_name: &str, now: DateTime<Utc>) -> AppResult<()> {
        let waitlist = self
            .bookings
            .find_waitlist_for_conference(conference_name)
            .await?;

        let Some(mut next) = waitlist.into_iter().next() else {
            debug!(conference = %conference_name, "No waitlist to promote");
            return Ok(());
        };

        next.offer(self.hold_deadline(now)?, now);
        let (promoted_id, deadline) = (next.id, next.waitlist_until);
        self.bookings.update(next).await?;

        info!(
            booking_id = %promoted_id,
            conference = %conference_name,
            waitlist_until = ?deadline,
            "Waitlisted booking promoted"
        );

        Ok(())
    }

    /// Gives back a slot taken earlier in a failed sequence.
    async fn release_slot(&self, conference_name: &str) {
        if let Err(e) = self.conferences.adjust_slots(conference_name, 1).await {
            warn!(conference = %conference_name, error = %e, "Slot rollback failed");
        }
    }

    /// Deadline for a waitlist entry or offer created at `now`.
    fn hold_deadline(&self, now: DateTime<Utc>) -> AppResult<DateTime<Utc>> {
        now.checked_add_signed(self.config.waitlist_hold())
            .ok_or_else(|| AppError::configuration("Waitlist hold exceeds the supported date range"))
    }
}
