//! Store repository for database operations.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::instrument;

use skateshop_core::{Slug, StoreId, StoreName};

use super::listing::{BindValue, ListingSql};
use super::{RepositoryError, conflict_or_database};
use crate::models::{Store, StoreListing, StoreListingRow};
use crate::validation::GetStoresInput;

#[derive(sqlx::FromRow)]
struct StoreRow {
    id: StoreId,
    name: String,
    description: Option<String>,
    user_id: String,
    slug: Slug,
    payment_account_id: Option<String>,
    created_at: DateTime<Utc>,
}

impl From<StoreRow> for Store {
    fn from(row: StoreRow) -> Self {
        Self {
            id: row.id,
            name: StoreName::from_stored(row.name),
            description: row.description,
            user_id: row.user_id,
            slug: row.slug,
            payment_account_id: row.payment_account_id,
            created_at: row.created_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct ListingRow {
    id: StoreId,
    name: String,
    description: Option<String>,
    payment_account_id: Option<String>,
    product_count: i64,
}

impl From<ListingRow> for StoreListingRow {
    fn from(row: ListingRow) -> Self {
        Self {
            id: row.id,
            name: StoreName::from_stored(row.name),
            description: row.description,
            payment_account_id: row.payment_account_id,
            product_count: row.product_count,
        }
    }
}

/// Repository for store database operations.
pub struct StoreRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> StoreRepository<'a> {
    /// Create a new store repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Fetch one listing page and the total number of matching stores.
    ///
    /// Both statements run in a single read-only `REPEATABLE READ`
    /// transaction so the count and the page see the same snapshot.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if either query fails.
    #[instrument(skip(self, input), fields(limit = input.limit, offset = input.offset, sort = ?input.sort))]
    pub async fn list_page(&self, input: &GetStoresInput) -> Result<StoreListing, RepositoryError> {
        let page = ListingSql::page(input);
        let count = ListingSql::count(input);

        let mut tx = self.pool.begin().await?;
        sqlx::query("SET TRANSACTION ISOLATION LEVEL REPEATABLE READ, READ ONLY")
            .execute(&mut *tx)
            .await?;

        let mut page_query = sqlx::query_as::<_, ListingRow>(&page.sql);
        for param in page.params {
            page_query = match param {
                BindValue::Text(value) => page_query.bind(value),
                BindValue::BigInt(value) => page_query.bind(value),
            };
        }
        let rows = page_query.fetch_all(&mut *tx).await?;

        let mut count_query = sqlx::query_scalar::<_, i64>(&count.sql);
        for param in count.params {
            count_query = match param {
                BindValue::Text(value) => count_query.bind(value),
                BindValue::BigInt(value) => count_query.bind(value),
            };
        }
        let count = count_query.fetch_one(&mut *tx).await?;

        tx.commit().await?;

        let items: Vec<StoreListingRow> = rows.into_iter().map(Into::into).collect();

        tracing::debug!(items = items.len(), count, "Fetched store listing");

        Ok(StoreListing { items, count })
    }

    /// Insert a store unless one with the same name already exists.
    ///
    /// Returns `None` when the name is taken. The check and the insert are a
    /// single statement, so concurrent callers cannot both succeed.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if another unique constraint fails.
    /// Returns `RepositoryError::Database` for other database errors.
    #[instrument(skip(self, name, description), fields(name = %name))]
    pub async fn insert_if_absent(
        &self,
        name: &StoreName,
        description: Option<&str>,
        user_id: &str,
    ) -> Result<Option<Store>, RepositoryError> {
        let row = sqlx::query_as::<_, StoreRow>(
            r"
            INSERT INTO storefront.stores (name, description, user_id, slug)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (name) DO NOTHING
            RETURNING id, name, description, user_id, slug, payment_account_id, created_at
            ",
        )
        .bind(name.as_str())
        .bind(description)
        .bind(user_id)
        .bind(name.slug())
        .fetch_optional(self.pool)
        .await
        .map_err(|e| conflict_or_database(e, "store"))?;

        Ok(row.map(Store::from))
    }

    /// Get a store by its name.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_by_name(&self, name: &StoreName) -> Result<Option<Store>, RepositoryError> {
        let row = sqlx::query_as::<_, StoreRow>(
            r"
            SELECT id, name, description, user_id, slug, payment_account_id, created_at
            FROM storefront.stores
            WHERE name = $1
            ",
        )
        .bind(name.as_str())
        .fetch_optional(self.pool)
        .await?;

        Ok(row.map(Store::from))
    }
}
