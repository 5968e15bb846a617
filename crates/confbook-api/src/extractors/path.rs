//! Typed path parameter helpers.

use confbook_core::error::AppError;
use confbook_core::types::BookingId;

/// Parses a booking id from a path segment or body field.
pub fn parse_booking_id(s: &str) -> Result<BookingId, AppError> {
    s.trim()
        .parse()
        .map_err(|_| AppError::invalid_input(format!("Invalid booking id: {s}")))
}
