//! Application state shared across handlers.

use std::sync::Arc;

use sqlx::PgPool;

use crate::cache::ViewCache;
use crate::config::ViewCacheConfig;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to
/// shared resources like the database pool and the view cache.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    pool: PgPool,
    views: ViewCache,
}

impl AppState {
    /// Create a new application state.
    ///
    /// # Arguments
    ///
    /// * `pool` - `PostgreSQL` connection pool
    /// * `view_cache` - Capacity and TTL of the view cache
    #[must_use]
    pub fn new(pool: PgPool, view_cache: ViewCacheConfig) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                pool,
                views: ViewCache::new(view_cache),
            }),
        }
    }

    /// Get a reference to the database connection pool.
    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.inner.pool
    }

    /// Get a reference to the listing view cache.
    #[must_use]
    pub fn views(&self) -> &ViewCache {
        &self.inner.views
    }
}
