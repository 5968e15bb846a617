//! HTTP request handlers grouped by resource.

pub mod booking;
pub mod conference;
pub mod health;
pub mod user;
