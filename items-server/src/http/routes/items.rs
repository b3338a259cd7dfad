//! Item endpoints

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};

use crate::http::error::ApiError;
use crate::http::extractors::CreateItemPayload;
use crate::http::server::AppState;
use crate::models::{Item, ItemName};

/// GET /items - all items, ascending by id
async fn list_items(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Item>>, ApiError> {
    let items = state.store.list().await?;
    Ok(Json(items))
}

/// POST /items - create a new item
async fn create_item(
    State(state): State<Arc<AppState>>,
    payload: CreateItemPayload,
) -> Result<(StatusCode, Json<Item>), ApiError> {
    // Validate before touching the store so a bad request never inserts
    let name = ItemName::new(payload.name.as_deref().unwrap_or_default())?;
    let item = state.store.create(name).await?;
    tracing::info!(id = item.id, "item created");

    Ok((StatusCode::CREATED, Json(item)))
}

/// Item routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/items", get(list_items).post(create_item))
}
