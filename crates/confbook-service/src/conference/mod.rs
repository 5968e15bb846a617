//! Conference registration.

pub mod service;

pub use service::{AddConferenceRequest, ConferenceService};
