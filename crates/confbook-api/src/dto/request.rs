//! Request DTOs with validation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Create conference request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateConferenceRequest {
    /// Unique conference name.
    #[validate(length(min = 1, max = 200, message = "Conference name is required"))]
    pub name: String,
    /// Start of the conference.
    pub start_time: DateTime<Utc>,
    /// End of the conference.
    pub end_time: DateTime<Utc>,
    /// Number of seats.
    pub available_slots: u32,
}

/// Create user request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateUserRequest {
    /// Unique user id.
    #[validate(length(min = 1, max = 128, message = "User id is required"))]
    pub id: String,
}

/// Create booking request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateBookingRequest {
    /// Conference to book.
    #[validate(length(min = 1, message = "Conference name is required"))]
    pub conference_name: String,
    /// Booking user.
    #[validate(length(min = 1, message = "User id is required"))]
    pub user_id: String,
}

/// Confirm waitlisted booking request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ConfirmBookingRequest {
    /// Booking to confirm.
    #[validate(length(min = 1, message = "Booking id is required"))]
    pub booking_id: String,
}
