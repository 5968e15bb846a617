//! In-memory store implementations for single-node deployments.

pub mod booking;
pub mod conference;
pub mod user;

pub use booking::MemoryBookingStore;
pub use conference::MemoryConferenceStore;
pub use user::MemoryUserStore;
