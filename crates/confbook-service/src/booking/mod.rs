//! Booking allocation: book, confirm, cancel, status, and the reconciliation sweep.

pub mod dto;
pub mod engine;
pub mod sweep;

pub use dto::{BookConferenceRequest, BookingStatusView, SweepReport};
pub use engine::BookingEngine;
