//! In-memory booking store using a Tokio mutex.
//!
//! Bookings are kept in insertion order so that waitlist queries are
//! first-come-first-offered. Window-overlap queries resolve conference
//! windows through a [`ConferenceStore`] handle; the booking lock is always
//! released before that store is called.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::Mutex;
use tracing::{debug, info};

use confbook_core::error::{AppError, ErrorKind};
use confbook_core::result::AppResult;
use confbook_core::types::{BookingId, TimeWindow};
use confbook_entity::{Booking, BookingStatus, CancelReason};

use crate::traits::{BookingStore, ConferenceStore};

/// Internal state for the memory-based booking store.
#[derive(Debug, Default)]
struct InnerState {
    /// Bookings by id.
    bookings: HashMap<BookingId, Booking>,
    /// Booking ids in creation order.
    order: Vec<BookingId>,
}

impl InnerState {
    /// Bookings in creation order matching `filter`, cloned out of the lock.
    fn collect(&self, filter: impl Fn(&Booking) -> bool) -> Vec<Booking> {
        self.order
            .iter()
            .filter_map(|id| self.bookings.get(id))
            .filter(|&b| filter(b))
            .cloned()
            .collect()
    }
}

/// In-memory booking store.
#[derive(Debug, Clone)]
pub struct MemoryBookingStore {
    /// Protected inner state.
    state: Arc<Mutex<InnerState>>,
    /// Used to resolve conference windows for overlap checks.
    conferences: Arc<dyn ConferenceStore>,
}

impl MemoryBookingStore {
    /// Creates an empty store that resolves windows through `conferences`.
    pub fn new(conferences: Arc<dyn ConferenceStore>) -> Self {
        Self {
            state: Arc::new(Mutex::new(InnerState::default())),
            conferences,
        }
    }

    /// Keeps the bookings whose conference window overlaps `window`.
    ///
    /// Bookings referencing a conference that no longer resolves are skipped.
    async fn overlapping(&self, candidates: Vec<Booking>, window: TimeWindow) -> AppResult<Vec<Booking>> {
        let mut windows: HashMap<String, Option<TimeWindow>> = HashMap::new();
        let mut hits = Vec::new();

        for booking in candidates {
            let resolved = match windows.get(&booking.conference_id) {
                Some(cached) => *cached,
                None => {
                    let resolved = match self.conferences.find_by_name(&booking.conference_id).await {
                        Ok(conf) => Some(conf.window()),
                        Err(e) if e.is(ErrorKind::NotFound) => None,
                        Err(e) => return Err(e),
                    };
                    windows.insert(booking.conference_id.clone(), resolved);
                    resolved
                }
            };

            if resolved.is_some_and(|w| w.overlaps(&window)) {
                hits.push(booking);
            }
        }

        Ok(hits)
    }

    async fn user_bookings(&self, user_id: &str, filter: impl Fn(&Booking) -> bool) -> Vec<Booking> {
        let state = self.state.lock().await;
        state.collect(|b| b.user_id == user_id && filter(b))
    }
}

#[async_trait]
impl BookingStore for MemoryBookingStore {
    async fn create(&self, booking: Booking) -> AppResult<()> {
        let mut state = self.state.lock().await;
        debug!(booking_id = %booking.id, status = %booking.status, "Booking stored");
        state.order.push(booking.id);
        state.bookings.insert(booking.id, booking);
        Ok(())
    }

    async fn find_by_id(&self, id: &BookingId) -> AppResult<Booking> {
        let state = self.state.lock().await;
        state
            .bookings
            .get(id)
            .cloned()
            .ok_or_else(|| AppError::not_found(format!("Booking '{id}' not found")))
    }

    async fn update(&self, booking: Booking) -> AppResult<()> {
        let mut state = self.state.lock().await;
        let Some(slot) = state.bookings.get_mut(&booking.id) else {
            return Err(AppError::not_found(format!("Booking '{}' not found", booking.id)));
        };
        *slot = booking;
        Ok(())
    }

    async fn cancel(
        &self,
        id: &BookingId,
        reason: CancelReason,
        now: DateTime<Utc>,
    ) -> AppResult<Booking> {
        let mut state = self.state.lock().await;
        let booking = state
            .bookings
            .get_mut(id)
            .ok_or_else(|| AppError::not_found(format!("Booking '{id}' not found")))?;

        booking.cancel(reason, now);
        Ok(booking.clone())
    }

    async fn find_active_booking(&self, user_id: &str, conference_id: &str) -> AppResult<Booking> {
        let state = self.state.lock().await;
        state
            .order
            .iter()
            .filter_map(|id| state.bookings.get(id))
            .find(|b| b.user_id == user_id && b.conference_id == conference_id && b.is_active())
            .cloned()
            .ok_or_else(|| {
                AppError::not_found(format!(
                    "No active booking for user '{user_id}' on '{conference_id}'"
                ))
            })
    }

    async fn find_waitlist_for_conference(&self, conference_id: &str) -> AppResult<Vec<Booking>> {
        let state = self.state.lock().await;
        Ok(state.collect(|b| {
            b.conference_id == conference_id && b.status == BookingStatus::Waitlisted
        }))
    }

    async fn remove_overlapping_waitlists(
        &self,
        user_id: &str,
        window: TimeWindow,
        now: DateTime<Utc>,
    ) -> AppResult<usize> {
        let waitlisted = self
            .user_bookings(user_id, |b| b.status == BookingStatus::Waitlisted)
            .await;
        if waitlisted.is_empty() {
            return Ok(0);
        }

        let doomed = self.overlapping(waitlisted, window).await?;

        let mut state = self.state.lock().await;
        let mut removed = 0;
        for candidate in doomed {
            // Re-check under the lock; the entry may have moved on meanwhile.
            if let Some(booking) = state.bookings.get_mut(&candidate.id) {
                if booking.status == BookingStatus::Waitlisted {
                    booking.cancel(CancelReason::SupersededByOverlap, now);
                    removed += 1;
                }
            }
        }

        if removed > 0 {
            info!(user_id = %user_id, removed = removed, "Overlapping waitlist entries canceled");
        }
        Ok(removed)
    }

    async fn has_overlapping_confirmed_bookings(
        &self,
        user_id: &str,
        window: TimeWindow,
    ) -> AppResult<bool> {
        let confirmed = self
            .user_bookings(user_id, |b| b.status == BookingStatus::Confirmed)
            .await;
        Ok(!self.overlapping(confirmed, window).await?.is_empty())
    }

    async fn has_overlapping_active_bookings(
        &self,
        user_id: &str,
        window: TimeWindow,
    ) -> AppResult<bool> {
        let active = self.user_bookings(user_id, Booking::is_active).await;
        Ok(!self.overlapping(active, window).await?.is_empty())
    }

    async fn get_all_bookings(&self) -> AppResult<Vec<Booking>> {
        let state = self.state.lock().await;
        Ok(state.collect(|_| true))
    }
}
