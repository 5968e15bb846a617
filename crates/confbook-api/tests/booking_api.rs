//! HTTP tests for the booking lifecycle.

mod helpers;

use http::StatusCode;
use serde_json::json;

use helpers::TestApp;

#[tokio::test]
async fn test_health() {
    let app = TestApp::new();
    let response = app.request("GET", "/health", None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");
}

#[tokio::test]
async fn test_create_conference_returns_record() {
    let app = TestApp::new();
    let now = chrono::Utc::now();
    let response = app
        .request(
            "POST",
            "/conference",
            Some(json!({
                "name": "RustConf",
                "start_time": now + chrono::Duration::hours(24),
                "end_time": now + chrono::Duration::hours(30),
                "available_slots": 3,
            })),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["name"], "RustConf");
    assert_eq!(response.body["available_slots"], 3);
    assert_eq!(response.body["capacity"], 3);
}

#[tokio::test]
async fn test_conference_window_validation() {
    let app = TestApp::new();
    let now = chrono::Utc::now();

    let too_long = app
        .request(
            "POST",
            "/conference",
            Some(json!({
                "name": "Marathon",
                "start_time": now,
                "end_time": now + chrono::Duration::hours(13),
                "available_slots": 3,
            })),
        )
        .await;
    assert_eq!(too_long.status, StatusCode::BAD_REQUEST);
    assert_eq!(too_long.body["error"], "INVALID_INPUT");

    let backwards = app
        .request(
            "POST",
            "/conference",
            Some(json!({
                "name": "Backwards",
                "start_time": now + chrono::Duration::hours(2),
                "end_time": now + chrono::Duration::hours(1),
                "available_slots": 3,
            })),
        )
        .await;
    assert_eq!(backwards.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_duplicate_user_conflicts() {
    let app = TestApp::new();
    app.create_user("alice").await;

    let response = app.request("POST", "/user", Some(json!({ "id": "alice" }))).await;
    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(response.body["error"], "CONFLICT");
}

#[tokio::test]
async fn test_empty_user_id_rejected() {
    let app = TestApp::new();
    let response = app.request("POST", "/user", Some(json!({ "id": "" }))).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "INVALID_INPUT");
}

#[tokio::test]
async fn test_round_trip_over_http() {
    let app = TestApp::new();
    app.create_conference("RustConf", 24, 30, 1).await;
    app.create_user("alice").await;
    app.create_user("bob").await;

    let alice = app.book("RustConf", "alice").await;
    let bob = app.book("RustConf", "bob").await;
    assert_eq!(app.status_of(&alice).await, "Confirmed");

    let waiting = app.request("GET", &format!("/booking/{bob}"), None).await;
    assert_eq!(waiting.body["status"], "Waitlisted");
    assert!(waiting.body["waitlist_until"].is_string());

    let cancel = app
        .request("DELETE", &format!("/booking/{alice}"), None)
        .await;
    assert_eq!(cancel.status, StatusCode::OK);
    assert_eq!(app.status_of(&alice).await, "Canceled");
    assert_eq!(app.status_of(&bob).await, "PendingConfirmation");

    let confirm = app
        .request(
            "POST",
            "/booking/waitlist/confirm",
            Some(json!({ "booking_id": bob })),
        )
        .await;
    assert_eq!(confirm.status, StatusCode::OK);

    let confirmed = app.request("GET", &format!("/booking/{bob}"), None).await;
    assert_eq!(confirmed.body["status"], "Confirmed");
    assert!(confirmed.body.get("waitlist_until").is_none());
}

#[tokio::test]
async fn test_error_statuses() {
    let app = TestApp::new();
    app.create_conference("RustConf", 24, 30, 1).await;
    app.create_user("alice").await;
    app.create_user("bob").await;

    let alice = app.book("RustConf", "alice").await;
    let bob = app.book("RustConf", "bob").await;

    // Duplicate booking.
    let dup = app
        .request(
            "POST",
            "/booking",
            Some(json!({ "conference_name": "RustConf", "user_id": "alice" })),
        )
        .await;
    assert_eq!(dup.status, StatusCode::CONFLICT);
    assert_eq!(dup.body["error"], "BOOKING_CONFLICT");

    // Unknown user.
    let unknown = app
        .request(
            "POST",
            "/booking",
            Some(json!({ "conference_name": "RustConf", "user_id": "carol" })),
        )
        .await;
    assert_eq!(unknown.status, StatusCode::NOT_FOUND);

    // No free slot for the waitlisted booking.
    let no_slot = app
        .request(
            "POST",
            "/booking/waitlist/confirm",
            Some(json!({ "booking_id": bob })),
        )
        .await;
    assert_eq!(no_slot.status, StatusCode::CONFLICT);
    assert_eq!(no_slot.body["error"], "SLOT_UNAVAILABLE");

    // Confirmed bookings are not awaiting confirmation.
    let not_waiting = app
        .request(
            "POST",
            "/booking/waitlist/confirm",
            Some(json!({ "booking_id": alice })),
        )
        .await;
    assert_eq!(not_waiting.status, StatusCode::GONE);

    // Double cancel.
    app.request("DELETE", &format!("/booking/{alice}"), None).await;
    let again = app
        .request("DELETE", &format!("/booking/{alice}"), None)
        .await;
    assert_eq!(again.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(again.body["error"], "INVALID_ACTION");
}

#[tokio::test]
async fn test_malformed_and_missing_booking_ids() {
    let app = TestApp::new();

    let malformed = app.request("GET", "/booking/not-a-uuid", None).await;
    assert_eq!(malformed.status, StatusCode::BAD_REQUEST);

    let missing = app
        .request("GET", &format!("/booking/{}", uuid_like()), None)
        .await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_lapsed_waitlist_reports_expired_then_canceled() {
    let app = TestApp::new();
    app.create_conference("TechConf", 1, 3, 0).await;
    app.create_user("u1").await;

    let id = app.book("TechConf", "u1").await;
    assert_eq!(app.status_of(&id).await, "Waitlisted");

    app.clock.advance(chrono::Duration::minutes(61));
    assert_eq!(app.status_of(&id).await, "Expired");

    let confirm = app
        .request(
            "POST",
            "/booking/waitlist/confirm",
            Some(json!({ "booking_id": id })),
        )
        .await;
    assert_eq!(confirm.status, StatusCode::GONE);
    assert_eq!(confirm.body["error"], "WAITLIST_EXPIRED");

    app.engine.run_sweep().await.unwrap();
    assert_eq!(app.status_of(&id).await, "Canceled");
}

fn uuid_like() -> String {
    confbook_core::types::BookingId::new().to_string()
}
