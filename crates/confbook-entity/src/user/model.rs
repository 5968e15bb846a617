//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A registered user. Only existence matters to the booking engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Externally supplied unique identifier.
    pub id: String,
    /// When the user was registered.
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a user registered at `created_at`.
    pub fn new(id: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            created_at,
        }
    }
}
