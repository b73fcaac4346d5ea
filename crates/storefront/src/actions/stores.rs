//! Store listing and store creation.

use sqlx::PgPool;
use tracing::{error, info, instrument, warn};

use crate::cache::{Revalidate, STORES_VIEW_PATH};
use crate::db::{RepositoryError, StoreRepository};
use crate::models::StoreListing;
use crate::validation::{RawCreateStoreInput, RawGetStoresInput};

use super::ActionError;

/// List stores: one page plus the total number of matching stores.
///
/// Absent `limit` and `offset` default to 10 and 0. Unknown sort fields fall
/// back to newest first.
///
/// # Errors
///
/// Returns `ActionError::Validation` listing every invalid field.
/// Returns `ActionError::Query` if the database fails.
#[instrument(skip_all)]
pub async fn get_stores(
    pool: &PgPool,
    raw: RawGetStoresInput,
) -> Result<StoreListing, ActionError> {
    let input = raw.validate().map_err(|e| {
        warn!(error = %e, "Invalid store listing input");
        ActionError::Validation(e)
    })?;

    StoreRepository::new(pool)
        .list_page(&input)
        .await
        .map_err(|e| {
            error!(error = %e, "Store listing query failed");
            ActionError::Query(e)
        })
}

/// Create a store owned by `userId`.
///
/// The new store has no payment account, so it starts out inactive. On
/// success the store management view is revalidated.
///
/// # Errors
///
/// Returns `ActionError::Validation` listing every invalid field.
/// Returns `ActionError::DuplicateName` if the name is already taken.
/// Returns `ActionError::Query` if the database fails.
#[instrument(skip_all)]
pub async fn add_store(
    pool: &PgPool,
    revalidate: &dyn Revalidate,
    raw: RawCreateStoreInput,
) -> Result<(), ActionError> {
    let input = raw.validate().map_err(|e| {
        warn!(error = %e, "Invalid store input");
        ActionError::Validation(e)
    })?;

    let inserted = StoreRepository::new(pool)
        .insert_if_absent(&input.name, input.description.as_deref(), &input.user_id)
        .await
        .map_err(|e| match e {
            RepositoryError::Conflict(_) => ActionError::DuplicateName(input.name.to_string()),
            other => {
                error!(error = %other, "Store insert failed");
                ActionError::Query(other)
            }
        })?;

    let Some(store) = inserted else {
        info!(name = %input.name, "Store name already taken");
        return Err(ActionError::DuplicateName(input.name.into_inner()));
    };

    info!(store_id = %store.id, slug = %store.slug, "Created store");
    revalidate.revalidate_path(STORES_VIEW_PATH);

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Mutex;

    use serde_json::json;
    use sqlx::postgres::PgPoolOptions;

    use super::*;

    /// Records revalidated paths.
    #[derive(Default)]
    struct RecordingRevalidate {
        paths: Mutex<Vec<String>>,
    }

    impl Revalidate for RecordingRevalidate {
        fn revalidate_path(&self, path: &str) {
            self.paths.lock().unwrap().push(path.to_string());
        }
    }

    // Never connects: every test here fails before reaching the database
    fn unreachable_pool() -> PgPool {
        PgPoolOptions::new()
            .connect_lazy("postgres://skateshop@127.0.0.1:1/unused")
            .unwrap()
    }

    #[tokio::test]
    async fn test_get_stores_rejects_invalid_input() {
        let raw: RawGetStoresInput =
            serde_json::from_value(json!({ "limit": 0, "offset": -2 })).unwrap();

        let err = get_stores(&unreachable_pool(), raw).await.unwrap_err();
        let ActionError::Validation(err) = err else {
            panic!("expected validation error, got {err:?}");
        };
        assert!(err.has_field("limit"));
        assert!(err.has_field("offset"));
    }

    #[tokio::test]
    async fn test_add_store_rejects_invalid_input_without_revalidating() {
        let revalidate = RecordingRevalidate::default();
        let raw = RawCreateStoreInput::new("ab", None, "");

        let err = add_store(&unreachable_pool(), &revalidate, raw)
            .await
            .unwrap_err();

        let ActionError::Validation(err) = err else {
            panic!("expected validation error, got {err:?}");
        };
        assert!(err.has_field("name"));
        assert!(err.has_field("userId"));
        assert!(revalidate.paths.lock().unwrap().is_empty());
    }
}
