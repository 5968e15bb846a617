//! Unified application error types for Confbook.
//!
//! Stores, services, and the HTTP layer all report failures as [`AppError`]
//! so that the `?` operator works across crate boundaries.

use std::fmt;
use thiserror::Error;

/// Category of an [`AppError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ErrorKind {
    /// A referenced conference, user, or booking does not exist.
    NotFound,
    /// A record with the same identity already exists.
    Conflict,
    /// Input failed validation (malformed scheduling window, blank name, ...).
    InvalidInput,
    /// No slot is left on the conference.
    SlotUnavailable,
    /// The waitlist deadline has passed, or the booking is not waitlisted.
    WaitlistExpired,
    /// Duplicate or overlapping-window booking attempt.
    BookingConflict,
    /// The action is not allowed in the booking's current state.
    InvalidAction,
    /// Configuration could not be loaded.
    Configuration,
    /// An internal server error occurred.
    Internal,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => write!(f, "NOT_FOUND"),
            Self::Conflict => write!(f, "CONFLICT"),
            Self::InvalidInput => write!(f, "INVALID_INPUT"),
            Self::SlotUnavailable => write!(f, "SLOT_UNAVAILABLE"),
            Self::WaitlistExpired => write!(f, "WAITLIST_EXPIRED"),
            Self::BookingConflict => write!(f, "BOOKING_CONFLICT"),
            Self::InvalidAction => write!(f, "INVALID_ACTION"),
            Self::Configuration => write!(f, "CONFIGURATION"),
            Self::Internal => write!(f, "INTERNAL"),
        }
    }
}

/// The unified application error used throughout Confbook.
#[derive(Debug, Error)]
#[error("{kind}: {message}")]
pub struct AppError {
    /// The category of error.
    pub kind: ErrorKind,
    /// A human-readable error message.
    pub message: String,
    /// Optional underlying cause.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new application error.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Create a new application error with an underlying cause.
    pub fn with_source(
        kind: ErrorKind,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a not-found error.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, message)
    }

    /// Create a duplicate-record conflict error.
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Conflict, message)
    }

    /// Create an invalid-input error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidInput, message)
    }

    /// Create a slot-unavailable error.
    pub fn slot_unavailable(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::SlotUnavailable, message)
    }

    /// Create a waitlist-expired error.
    pub fn waitlist_expired(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::WaitlistExpired, message)
    }

    /// Create a booking-conflict error.
    pub fn booking_conflict(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::BookingConflict, message)
    }

    /// Create an invalid-action error.
    pub fn invalid_action(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidAction, message)
    }

    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Configuration, message)
    }

    /// Create an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal, message)
    }

    /// Returns `true` if this error is of the given kind.
    pub fn is(&self, kind: ErrorKind) -> bool {
        self.kind == kind
    }
}

impl Clone for AppError {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind,
            message: self.message.clone(),
            source: None,
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::with_source(ErrorKind::Internal, format!("I/O error: {err}"), err)
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::with_source(
            ErrorKind::Configuration,
            format!("Configuration error: {err}"),
            err,
        )
    }
}
