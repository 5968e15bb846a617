//! Conference domain entities.

pub mod model;

pub use model::Conference;
