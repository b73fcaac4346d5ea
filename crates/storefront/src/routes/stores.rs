//! Store route handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{
        Query, RawQuery, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::actions::stores::{add_store, get_stores};
use crate::cache::{CachedView, STORES_VIEW_PATH, ViewKey};
use crate::error::{AppError, Result};
use crate::models::StoreListing;
use crate::state::AppState;
use crate::validation::{RawCreateStoreInput, RawGetStoresInput};

/// List stores.
///
/// GET /api/stores?limit&offset&sort&statuses&userId
///
/// # Errors
///
/// Returns 422 listing every invalid parameter, or 500 if the query fails.
pub async fn index(
    State(state): State<AppState>,
    query: std::result::Result<Query<RawGetStoresInput>, QueryRejection>,
) -> Result<Json<StoreListing>> {
    let Query(raw) = query.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let listing = get_stores(state.pool(), raw).await?;
    Ok(Json(listing))
}

/// Create a store.
///
/// POST /api/stores with `{ "name", "description", "userId" }`
///
/// # Errors
///
/// Returns 422 listing every invalid field, 409 if the name is taken, or 500
/// if the insert fails.
pub async fn create(
    State(state): State<AppState>,
    body: std::result::Result<Json<RawCreateStoreInput>, JsonRejection>,
) -> Result<StatusCode> {
    let Json(raw) = body.map_err(|e| AppError::BadRequest(e.body_text()))?;
    add_store(state.pool(), state.views(), raw).await?;
    Ok(StatusCode::CREATED)
}

/// Store management view.
///
/// GET /dashboard/stores
///
/// Serves the listing from the view cache; a miss runs the listing and caches
/// it under the request's query string until the view is revalidated. A
/// listing read before a concurrent revalidation is served but not cached.
///
/// # Errors
///
/// Same as [`index`].
pub async fn dashboard(
    State(state): State<AppState>,
    RawQuery(raw_query): RawQuery,
    query: std::result::Result<Query<RawGetStoresInput>, QueryRejection>,
) -> Result<Response> {
    let key = ViewKey::new(STORES_VIEW_PATH, raw_query.as_deref());

    if let Some(CachedView::Stores(listing)) = state.views().get(&key).await {
        return Ok(Json(listing.as_ref()).into_response());
    }

    let Query(raw) = query.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let generation = state.views().generation(STORES_VIEW_PATH);
    let listing = Arc::new(get_stores(state.pool(), raw).await?);
    state
        .views()
        .insert(key, CachedView::Stores(Arc::clone(&listing)), generation)
        .await;

    Ok(Json(listing.as_ref()).into_response())
}
