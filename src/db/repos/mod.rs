//! Repository implementations for database access
//!
//! Read-only projections over externally managed tables. Each operation is a
//! single parameterized statement; no transactions, no writes. Rows are
//! projected to jsonb in SQL and passed through verbatim, since the column
//! set is owned by whatever process writes the tables.

pub mod hotels;
pub mod rooms;

pub use hotels::HotelRepo;
pub use rooms::RoomRepo;

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),
}
