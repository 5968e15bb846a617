//! Request extractors and path helpers.

pub mod path;

pub use path::parse_booking_id;
