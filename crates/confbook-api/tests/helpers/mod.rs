//! Shared test helpers for API tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use serde_json::{Value, json};
use tower::ServiceExt;

use confbook_api::{AppState, build_router};
use confbook_core::config::AppConfig;
use confbook_core::traits::ManualClock;
use confbook_service::{BookingEngine, ConferenceService, UserService};
use confbook_store::{MemoryBookingStore, MemoryConferenceStore, MemoryUserStore};

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Engine behind the router, for running sweeps
    pub engine: Arc<BookingEngine>,
    /// Clock shared by the engine and services
    pub clock: Arc<ManualClock>,
}

impl TestApp {
    /// Create a new test application over empty in-memory stores
    pub fn new() -> Self {
        let config = AppConfig::default();
        let clock = Arc::new(ManualClock::starting_now());
        let conferences = Arc::new(MemoryConferenceStore::new());
        let users = Arc::new(MemoryUserStore::new());
        let bookings = Arc::new(MemoryBookingStore::new(conferences.clone()));

        let engine = Arc::new(BookingEngine::new(
            conferences.clone(),
            users.clone(),
            bookings,
            clock.clone(),
            config.booking.clone(),
        ));

        let state = AppState {
            conference_service: Arc::new(ConferenceService::new(
                conferences,
                config.booking.clone(),
            )),
            user_service: Arc::new(UserService::new(users, clock.clone())),
            booking_engine: engine.clone(),
            config: Arc::new(config),
        };

        Self {
            router: build_router(state),
            engine,
            clock,
        }
    }

    /// Register a conference starting `from_hours` from now
    pub async fn create_conference(&self, name: &str, from_hours: i64, to_hours: i64, slots: u32) {
        let now = chrono::Utc::now();
        let response = self
            .request(
                "POST",
                "/conference",
                Some(json!({
                    "name": name,
                    "start_time": now + chrono::Duration::hours(from_hours),
                    "end_time": now + chrono::Duration::hours(to_hours),
                    "available_slots": slots,
                })),
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
    }

    /// Register a user
    pub async fn create_user(&self, id: &str) {
        let response = self.request("POST", "/user", Some(json!({ "id": id }))).await;
        assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
    }

    /// Book and return the new booking id
    pub async fn book(&self, conference: &str, user: &str) -> String {
        let response = self
            .request(
                "POST",
                "/booking",
                Some(json!({ "conference_name": conference, "user_id": user })),
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
        response.body["booking_id"]
            .as_str()
            .expect("No booking_id in response")
            .to_string()
    }

    /// Fetch the reported status string of a booking
    pub async fn status_of(&self, booking_id: &str) -> String {
        let response = self
            .request("GET", &format!("/booking/{booking_id}"), None)
            .await;
        assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
        response.body["status"]
            .as_str()
            .expect("No status in response")
            .to_string()
    }

    /// Make an HTTP request to the test app
    pub async fn request(&self, method: &str, path: &str, body: Option<Value>) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json")
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
}
