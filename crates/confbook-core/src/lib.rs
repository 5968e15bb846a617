//! # confbook-core
//!
//! Core crate for Confbook. Contains configuration schemas, typed
//! identifiers, the scheduling window type, the clock abstraction,
//! and the unified error system.
//!
//! This crate has **no** internal dependencies on other Confbook crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
