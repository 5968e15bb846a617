//! Shared domain value types.

pub mod id;
pub mod window;

pub use id::BookingId;
pub use window::TimeWindow;
