//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use confbook_core::types::BookingId;
use confbook_entity::{Conference, User};

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status string.
    pub status: String,
    /// Server version.
    pub version: String,
}

/// Conference summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConferenceResponse {
    /// Conference name.
    pub name: String,
    /// Start time.
    pub start_time: DateTime<Utc>,
    /// End time.
    pub end_time: DateTime<Utc>,
    /// Free seats.
    pub available_slots: u32,
    /// Total seats.
    pub capacity: u32,
}

impl From<Conference> for ConferenceResponse {
    fn from(conf: Conference) -> Self {
        Self {
            name: conf.name,
            start_time: conf.start_time,
            end_time: conf.end_time,
            available_slots: conf.available_slots,
            capacity: conf.capacity,
        }
    }
}

/// User summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    /// User id.
    pub id: String,
    /// Registration time.
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            created_at: user.created_at,
        }
    }
}

/// Newly created booking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingCreatedResponse {
    /// Generated booking id.
    pub booking_id: BookingId,
}
