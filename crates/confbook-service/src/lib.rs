//! # confbook-service
//!
//! Business logic for Confbook. The [`BookingEngine`] implements the booking
//! allocation use cases on top of the store traits; the conference and user
//! services register the records the engine books against.
//!
//! Services follow constructor injection: every dependency is provided at
//! construction time via `Arc` references.

pub mod booking;
pub mod conference;
pub mod user;

pub use booking::{BookConferenceRequest, BookingEngine, BookingStatusView, SweepReport};
pub use conference::{AddConferenceRequest, ConferenceService};
pub use user::{AddUserRequest, UserService};
