//! Shared wiring for booking engine integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};

use confbook_core::config::BookingConfig;
use confbook_core::traits::{Clock, ManualClock};
use confbook_core::types::BookingId;
use confbook_entity::{Booking, Conference};
use confbook_service::{
    AddConferenceRequest, AddUserRequest, BookConferenceRequest, BookingEngine, ConferenceService,
    UserService,
};
use confbook_store::{
    BookingStore, ConferenceStore, MemoryBookingStore, MemoryConferenceStore, MemoryUserStore,
};

/// Engine plus direct handles on its stores and clock.
pub struct Harness {
    pub engine: Arc<BookingEngine>,
    pub conference_service: ConferenceService,
    pub user_service: UserService,
    pub conferences: Arc<MemoryConferenceStore>,
    pub bookings: Arc<MemoryBookingStore>,
    pub clock: Arc<ManualClock>,
    pub start: DateTime<Utc>,
}

impl Harness {
    pub fn new() -> Self {
        let start = Utc::now();
        let clock = Arc::new(ManualClock::new(start));
        let conferences = Arc::new(MemoryConferenceStore::new());
        let users = Arc::new(MemoryUserStore::new());
        let bookings = Arc::new(MemoryBookingStore::new(conferences.clone()));
        let config = BookingConfig::default();

        let engine = Arc::new(BookingEngine::new(
            conferences.clone(),
            users.clone(),
            bookings.clone(),
            clock.clone(),
            config.clone(),
        ));

        Self {
            engine,
            conference_service: ConferenceService::new(conferences.clone(), config),
            user_service: UserService::new(users, clock.clone()),
            conferences,
            bookings,
            clock,
            start,
        }
    }

    /// Registers a conference running from `start + from_hours` to `start + to_hours`.
    pub async fn conference(&self, name: &str, from_hours: i64, to_hours: i64, slots: u32) {
        self.conference_service
            .add_conference(AddConferenceRequest {
                name: name.to_string(),
                start_time: self.start + Duration::hours(from_hours),
                end_time: self.start + Duration::hours(to_hours),
                available_slots: slots,
            })
            .await
            .unwrap();
    }

    pub async fn user(&self, id: &str) {
        self.user_service
            .add_user(AddUserRequest { id: id.to_string() })
            .await
            .unwrap();
    }

    pub async fn users(&self, ids: &[&str]) {
        for id in ids {
            self.user(id).await;
        }
    }

    pub async fn book(&self, conference: &str, user: &str) -> BookingId {
        self.engine
            .book_conference(BookConferenceRequest::new(conference, user))
            .await
            .unwrap()
    }

    pub async fn stored(&self, id: &BookingId) -> Booking {
        self.bookings.find_by_id(id).await.unwrap()
    }

    pub async fn slots(&self, conference: &str) -> Conference {
        self.conferences.find_by_name(conference).await.unwrap()
    }

    /// Inserts a waitlist entry directly, bypassing the engine's overlap checks.
    pub async fn inject_waitlisted(&self, conference: &str, user: &str) -> BookingId {
        let now = self.clock.now();
        let booking = Booking::waitlisted(user, conference, now + Duration::hours(1), now);
        let id = booking.id;
        self.bookings.create(booking).await.unwrap();
        id
    }
}
