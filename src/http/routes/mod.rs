//! Route modules
//!
//! Each module exposes a `router()` that `http::server` merges into the app.

pub mod health;
pub mod hotels;
pub mod uploads;
