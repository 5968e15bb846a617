//! # confbook-entity
//!
//! Domain entities for Confbook: conferences, users, and bookings with
//! their lifecycle status.

pub mod booking;
pub mod conference;
pub mod user;

pub use booking::{Booking, BookingStatus, CancelReason};
pub use conference::Conference;
pub use user::User;
