//! Store traits consumed by the booking engine.
//!
//! Any backend substituted for the in-memory one must honor these
//! contracts, including the error kinds named on each method.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use confbook_core::result::AppResult;
use confbook_core::types::{BookingId, TimeWindow};
use confbook_entity::{Booking, CancelReason, Conference, User};

/// Keyed storage of conferences by name.
#[async_trait]
pub trait ConferenceStore: Send + Sync + std::fmt::Debug {
    /// Inserts a conference. Fails with `Conflict` if the name is taken.
    async fn create(&self, conference: Conference) -> AppResult<()>;

    /// Looks up a conference. Fails with `NotFound`.
    async fn find_by_name(&self, name: &str) -> AppResult<Conference>;

    /// Replaces the stored record. Fails with `NotFound` if absent.
    async fn update(&self, conference: Conference) -> AppResult<()>;

    /// Atomically adds `delta` to `available_slots` and returns the result.
    ///
    /// Fails with `SlotUnavailable` if the count would go negative and with
    /// `InvalidAction` if it would exceed the conference capacity.
    async fn adjust_slots(&self, name: &str, delta: i64) -> AppResult<Conference>;
}

/// Keyed storage of users by id.
#[async_trait]
pub trait UserStore: Send + Sync + std::fmt::Debug {
    /// Inserts a user. Fails with `Conflict` if the id is taken.
    async fn create(&self, user: User) -> AppResult<()>;

    /// Looks up a user. Fails with `NotFound`.
    async fn find_by_id(&self, id: &str) -> AppResult<User>;
}

/// Keyed storage of bookings plus the cross-booking queries the engine needs.
#[async_trait]
pub trait BookingStore: Send + Sync + std::fmt::Debug {
    /// Inserts a booking. Generated ids never collide, so there is no conflict check.
    async fn create(&self, booking: Booking) -> AppResult<()>;

    /// Looks up a booking. Fails with `NotFound`.
    async fn find_by_id(&self, id: &BookingId) -> AppResult<Booking>;

    /// Replaces the stored record by id. Fails with `NotFound` if absent.
    async fn update(&self, booking: Booking) -> AppResult<()>;

    /// Moves a booking to `Canceled` and returns the updated record.
    async fn cancel(
        &self,
        id: &BookingId,
        reason: CancelReason,
        now: DateTime<Utc>,
    ) -> AppResult<Booking>;

    /// The user's non-terminal booking for a conference. Fails with `NotFound`.
    async fn find_active_booking(&self, user_id: &str, conference_id: &str) -> AppResult<Booking>;

    /// All `Waitlisted` bookings for a conference, oldest first.
    async fn find_waitlist_for_conference(&self, conference_id: &str) -> AppResult<Vec<Booking>>;

    /// Cancels every `Waitlisted` booking of the user whose conference window
    /// overlaps `window`. Returns how many were canceled.
    async fn remove_overlapping_waitlists(
        &self,
        user_id: &str,
        window: TimeWindow,
        now: DateTime<Utc>,
    ) -> AppResult<usize>;

    /// Whether any `Confirmed` booking of the user overlaps `window`.
    async fn has_overlapping_confirmed_bookings(
        &self,
        user_id: &str,
        window: TimeWindow,
    ) -> AppResult<bool>;

    /// Whether any non-terminal booking of the user overlaps `window`.
    async fn has_overlapping_active_bookings(
        &self,
        user_id: &str,
        window: TimeWindow,
    ) -> AppResult<bool>;

    /// Snapshot of every booking, oldest first.
    async fn get_all_bookings(&self) -> AppResult<Vec<Booking>>;
}
