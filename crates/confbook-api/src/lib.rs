//! # confbook-api
//!
//! HTTP API layer for Confbook built on Axum.
//!
//! Provides the REST endpoints for conferences, users, and bookings, the
//! request and response DTOs, path extractors, and error mapping.

pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod router;
pub mod state;

pub use error::ApiError;
pub use router::build_router;
pub use state::AppState;
