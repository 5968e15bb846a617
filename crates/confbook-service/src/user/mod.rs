//! User registration.

pub mod service;

pub use service::{AddUserRequest, UserService};
