//! Route definitions for the Confbook HTTP API.

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(conference_routes())
        .merge(user_routes())
        .merge(booking_routes())
        .merge(health_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Conference registration
fn conference_routes() -> Router<AppState> {
    Router::new().route("/conference", post(handlers::conference::add_conference))
}

/// User registration
fn user_routes() -> Router<AppState> {
    Router::new().route("/user", post(handlers::user::add_user))
}

/// Booking lifecycle
fn booking_routes() -> Router<AppState> {
    Router::new()
        .route("/booking", post(handlers::booking::book_conference))
        .route(
            "/booking/waitlist/confirm",
            post(handlers::booking::confirm_waitlist_booking),
        )
        .route(
            "/booking/{id}",
            get(handlers::booking::get_booking_status).delete(handlers::booking::cancel_booking),
        )
}

/// Liveness
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
