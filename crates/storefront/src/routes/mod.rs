//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                 - Liveness check
//! GET  /health/ready           - Readiness check (database ping)
//!
//! # Stores
//! GET  /api/stores             - Store listing page + total count
//! POST /api/stores             - Create a store
//! GET  /dashboard/stores       - Cached store management view
//!
//! # Products
//! GET  /api/products/search    - Product search grouped by category
//! ```

pub mod products;
pub mod stores;

use axum::{
    Router,
    extract::State,
    http::StatusCode,
    routing::get,
};

use crate::cache::STORES_VIEW_PATH;
use crate::state::AppState;

/// Create the store API routes router.
pub fn store_api_routes() -> Router<AppState> {
    Router::new().route("/", get(stores::index).post(stores::create))
}

/// Create the product API routes router.
pub fn product_api_routes() -> Router<AppState> {
    Router::new().route("/search", get(products::search))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/health/ready", get(readiness))
        .nest("/api/stores", store_api_routes())
        .nest("/api/products", product_api_routes())
        .route(STORES_VIEW_PATH, get(stores::dashboard))
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check dependencies.
async fn health() -> &'static str {
    "ok"
}

/// Readiness health check endpoint.
///
/// Verifies database connectivity before returning OK.
/// Returns 503 Service Unavailable if the database is not reachable.
async fn readiness(State(state): State<AppState>) -> StatusCode {
    match sqlx::query("SELECT 1").fetch_one(state.pool()).await {
        Ok(_) => StatusCode::OK,
        Err(e) => {
            tracing::warn!(error = %e, "Readiness check failed");
            StatusCode::SERVICE_UNAVAILABLE
        }
    }
}


#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::body::{Body, to_bytes};
    use axum::http::Request;
    use tower::ServiceExt;

    use super::*;

    #[tokio::test]
    async fn test_health() {
        let app = routes().with_state(test_support::offline_state());

        let response = app
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"ok");
    }

    #[tokio::test]
    async fn test_unknown_route() {
        let app = routes().with_state(test_support::offline_state());

        let response = app
            .oneshot(Request::get("/api/unknown").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
