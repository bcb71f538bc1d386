//! Database access layer

pub mod pool;
pub mod repos;

pub use pool::{create_pool, probe};
pub use repos::{DbError, HotelRepo, RoomRepo};
