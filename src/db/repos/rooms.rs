//! Room repository

use serde_json::Value;
use sqlx::PgPool;

use super::DbError;

/// Room repository
pub struct RoomRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> RoomRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all rooms belonging to a hotel slug, columns verbatim.
    ///
    /// No existence check on the hotel itself: an unknown slug and a hotel
    /// without rooms both come back as an empty list.
    pub async fn list_by_hotel_slug(&self, slug: &str) -> Result<Vec<Value>, DbError> {
        let rooms = sqlx::query_scalar::<_, Value>(
            "SELECT to_jsonb(r) FROM rooms r WHERE r.hotel_slug = $1",
        )
        .bind(slug)
        .fetch_all(self.pool)
        .await?;

        Ok(rooms)
    }
}
