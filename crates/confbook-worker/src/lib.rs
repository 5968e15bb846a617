//! Background reconciliation for Confbook.
//!
//! This crate provides the [`SweepScheduler`], which periodically runs the
//! booking engine's reconciliation pass, and the [`SweepHandle`] used to
//! stop it during shutdown.

pub mod scheduler;

pub use scheduler::{SweepHandle, SweepScheduler};
