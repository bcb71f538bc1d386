//! Hotel endpoints

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use serde_json::Value;

use crate::db::{HotelRepo, RoomRepo};
use crate::http::error::ApiError;
use crate::state::AppState;

/// GET /api/hotel/{slug} - hotel columns plus aggregated image URLs
async fn get_hotel(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<Value>, ApiError> {
    tracing::info!(%slug, "fetching hotel details");

    let hotel = HotelRepo::new(state.pool())
        .fetch_by_slug(&slug)
        .await
        .map_err(|e| ApiError::database(e, state.expose_db_errors()))?;

    match hotel {
        Some(hotel) => Ok(Json(hotel)),
        None => {
            tracing::info!(%slug, "hotel not found");
            Err(ApiError::NotFound {
                message: "Hotel not found",
            })
        }
    }
}

/// GET /api/hotel/{slug}/rooms - all rooms for a hotel
///
/// Always 200: an unknown hotel and a hotel without rooms both answer `[]`.
async fn get_rooms(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<Vec<Value>>, ApiError> {
    tracing::info!(%slug, "fetching rooms");

    let rooms = RoomRepo::new(state.pool())
        .list_by_hotel_slug(&slug)
        .await
        .map_err(|e| ApiError::database(e, state.expose_db_errors()))?;

    Ok(Json(rooms))
}

/// Hotel routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/hotel/{slug}", get(get_hotel))
        .route("/api/hotel/{slug}/rooms", get(get_rooms))
}
