//! Hotel repository
//!
//! A hotel row is returned as the flat jsonb of all its columns, with one
//! added `images` field aggregated from `hotel_images`.

use serde_json::Value;
use sqlx::PgPool;

use super::DbError;

/// Hotel repository
pub struct HotelRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> HotelRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Fetch a hotel by slug, images aggregated in insertion order.
    ///
    /// A hotel with no images gets `images: []`. Slugs are not assumed
    /// unique at the schema level; if one ever matches several rows the
    /// first wins.
    pub async fn fetch_by_slug(&self, slug: &str) -> Result<Option<Value>, DbError> {
        let hotel = sqlx::query_scalar::<_, Value>(
            r#"
            SELECT to_jsonb(h) || jsonb_build_object(
                'images',
                COALESCE(
                    (SELECT jsonb_agg(hi.image_url ORDER BY hi.id)
                       FROM hotel_images hi
                      WHERE hi.hotel_id = h.id),
                    '[]'::jsonb
                )
            )
            FROM hotels h
            WHERE h.slug = $1
            "#,
        )
        .bind(slug)
        .fetch_optional(self.pool)
        .await?;

        Ok(hotel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // Integration tests require a real database with the hotels /
    // hotel_images schema. Run with:
    // DATABASE_URL=postgres://... cargo test -- --ignored

    async fn test_pool() -> PgPool {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        PgPool::connect(&url).await.expect("pool creation failed")
    }

    async fn seed(pool: &PgPool) {
        sqlx::raw_sql(
            r#"
            CREATE TABLE IF NOT EXISTS hotels (
                id SERIAL PRIMARY KEY,
                slug TEXT NOT NULL,
                name TEXT NOT NULL,
                city TEXT
            );
            CREATE TABLE IF NOT EXISTS hotel_images (
                id SERIAL PRIMARY KEY,
                hotel_id INTEGER NOT NULL REFERENCES hotels(id),
                image_url TEXT NOT NULL
            );
            "#,
        )
        .execute(pool)
        .await
        .expect("schema setup failed");

        sqlx::raw_sql(
            r#"
            DELETE FROM hotel_images WHERE hotel_id IN
                (SELECT id FROM hotels WHERE slug LIKE 'repo-test-%');
            DELETE FROM hotels WHERE slug LIKE 'repo-test-%';
            "#,
        )
        .execute(pool)
        .await
        .expect("seed cleanup failed");
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn unknown_slug_is_none() {
        let pool = test_pool().await;
        seed(&pool).await;

        let hotel = HotelRepo::new(&pool)
            .fetch_by_slug("repo-test-does-not-exist")
            .await
            .expect("query failed");

        assert!(hotel.is_none());
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn images_aggregate_in_insertion_order() {
        let pool = test_pool().await;
        seed(&pool).await;

        let id: i32 = sqlx::query_scalar(
            "INSERT INTO hotels (slug, name, city)
             VALUES ('repo-test-grand', 'Grand', 'Lisbon') RETURNING id",
        )
        .fetch_one(&pool)
        .await
        .expect("insert hotel failed");

        for url in ["/uploads/grand-1.jpg", "/uploads/grand-2.jpg"] {
            sqlx::query("INSERT INTO hotel_images (hotel_id, image_url) VALUES ($1, $2)")
                .bind(id)
                .bind(url)
                .execute(&pool)
                .await
                .expect("insert image failed");
        }

        let hotel = HotelRepo::new(&pool)
            .fetch_by_slug("repo-test-grand")
            .await
            .expect("query failed")
            .expect("hotel missing");

        assert_eq!(hotel["name"], "Grand");
        assert_eq!(hotel["city"], "Lisbon");
        assert_eq!(
            hotel["images"],
            json!(["/uploads/grand-1.jpg", "/uploads/grand-2.jpg"])
        );
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn hotel_without_images_gets_empty_array() {
        let pool = test_pool().await;
        seed(&pool).await;

        sqlx::query("INSERT INTO hotels (slug, name) VALUES ('repo-test-bare', 'Bare')")
            .execute(&pool)
            .await
            .expect("insert hotel failed");

        let hotel = HotelRepo::new(&pool)
            .fetch_by_slug("repo-test-bare")
            .await
            .expect("query failed")
            .expect("hotel missing");

        assert_eq!(hotel["images"], json!([]));
    }
}
