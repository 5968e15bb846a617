//! Application state shared across all handlers.

use std::sync::Arc;

use confbook_core::config::AppConfig;
use confbook_service::{BookingEngine, ConferenceService, UserService};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Booking engine
    pub booking_engine: Arc<BookingEngine>,
    /// Conference registration
    pub conference_service: Arc<ConferenceService>,
    /// User registration
    pub user_service: Arc<UserService>,
}
