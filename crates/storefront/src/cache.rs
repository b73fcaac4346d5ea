//! Cached listing views and path revalidation.
//!
//! Rendered views are cached per path and query string using `moka`. A
//! mutation that makes a view stale calls [`Revalidate::revalidate_path`],
//! which drops every cached variant of that path.
//!
//! Each path also carries a generation counter that revalidation bumps. A
//! view built from data read before a revalidation is not kept, even when
//! the revalidation lands while the view is still being built.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use moka::future::Cache;
use tracing::{debug, warn};

use crate::config::ViewCacheConfig;
use crate::models::StoreListing;

/// Path of the store management view.
pub const STORES_VIEW_PATH: &str = "/dashboard/stores";

/// Marks cached views of a path as stale.
pub trait Revalidate: Send + Sync {
    /// Drop every cached view of `path`.
    fn revalidate_path(&self, path: &str);
}

/// Cache key: the view path plus its normalized query string.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub struct ViewKey {
    path: String,
    query: String,
}

impl ViewKey {
    #[must_use]
    pub fn new(path: &str, query: Option<&str>) -> Self {
        Self {
            path: path.to_string(),
            query: query.unwrap_or_default().to_string(),
        }
    }
}

/// Cached view values.
#[derive(Debug, Clone)]
pub enum CachedView {
    Stores(Arc<StoreListing>),
}

/// In-memory cache of rendered views.
#[derive(Clone)]
pub struct ViewCache {
    cache: Cache<ViewKey, CachedView>,
    generations: Arc<Mutex<HashMap<String, u64>>>,
}

impl ViewCache {
    /// Create a cache with the configured capacity and TTL.
    #[must_use]
    pub fn new(config: ViewCacheConfig) -> Self {
        let cache = Cache::builder()
            .max_capacity(config.capacity)
            .time_to_live(config.ttl)
            .support_invalidation_closures()
            .build();

        Self {
            cache,
            generations: Arc::default(),
        }
    }

    /// Current revalidation generation of `path`.
    ///
    /// Capture it before reading the data a view is built from, then pass it
    /// to [`ViewCache::insert`].
    #[must_use]
    pub fn generation(&self, path: &str) -> u64 {
        self.generations
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(path)
            .copied()
            .unwrap_or_default()
    }

    fn bump_generation(&self, path: &str) {
        *self
            .generations
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(path.to_string())
            .or_default() += 1;
    }

    /// Look up a cached view.
    pub async fn get(&self, key: &ViewKey) -> Option<CachedView> {
        let view = self.cache.get(key).await;
        if view.is_some() {
            debug!(path = %key.path, "Cache hit for view");
        }
        view
    }

    /// Cache a view built from data read at `generation`.
    ///
    /// Returns `false` and leaves nothing cached if the path was revalidated
    /// since `generation` was captured.
    pub async fn insert(&self, key: ViewKey, view: CachedView, generation: u64) -> bool {
        if self.generation(&key.path) != generation {
            debug!(path = %key.path, "View went stale while building, not caching");
            return false;
        }

        self.cache.insert(key.clone(), view).await;

        // A revalidation between the check and the insert may not see the entry
        if self.generation(&key.path) != generation {
            self.cache.invalidate(&key).await;
            debug!(path = %key.path, "View went stale while building, not caching");
            return false;
        }

        true
    }

    /// Apply pending evictions and invalidations.
    pub async fn run_pending_tasks(&self) {
        self.cache.run_pending_tasks().await;
    }
}

impl Revalidate for ViewCache {
    fn revalidate_path(&self, path: &str) {
        self.bump_generation(path);

        let target = path.to_string();
        match self
            .cache
            .invalidate_entries_if(move |key, _| key.path == target)
        {
            Ok(_) => debug!(path, "Revalidated view"),
            Err(e) => {
                warn!(path, error = %e, "Targeted revalidation failed, clearing view cache");
                self.cache.invalidate_all();
            }
        }
    }
}
