//! Product route handlers.

use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;

use crate::actions::products::filter_products;
use crate::error::Result;
use crate::models::ProductGroup;
use crate::state::AppState;

/// Search query parameters.
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

/// Search products by name.
///
/// GET /api/products/search?q=
///
/// # Errors
///
/// Returns 500 if the search query fails.
pub async fn search(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Vec<ProductGroup>>> {
    let groups = filter_products(state.pool(), &query.q).await?;
    Ok(Json(groups))
}
