//! # confbook-store
//!
//! Keyed storage for conferences, users, and bookings.
//!
//! Each store guards its own state and every call is atomic on its own;
//! no store holds its lock while calling into another store. Only the
//! in-memory backend is provided.

pub mod memory;
pub mod traits;

pub use memory::{MemoryBookingStore, MemoryConferenceStore, MemoryUserStore};
pub use traits::{BookingStore, ConferenceStore, UserStore};
