//! Product repository for database operations.

use sqlx::PgPool;
use tracing::instrument;

use skateshop_core::{ProductId, StoreId};

use super::{RepositoryError, conflict_or_database};
use crate::models::ProductSummary;

/// Maximum number of products a search returns.
pub const SEARCH_LIMIT: i64 = 10;

#[derive(sqlx::FromRow)]
struct ProductRow {
    id: ProductId,
    name: String,
    category: String,
}

impl From<ProductRow> for ProductSummary {
    fn from(row: ProductRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            category: row.category,
        }
    }
}

/// Repository for product database operations.
pub struct ProductRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ProductRepository<'a> {
    /// Create a new product repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Case-insensitive substring search on product names.
    ///
    /// Returns at most [`SEARCH_LIMIT`] products ordered by name.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    #[instrument(skip(self))]
    pub async fn search_by_name(&self, query: &str) -> Result<Vec<ProductSummary>, RepositoryError> {
        let rows = sqlx::query_as::<_, ProductRow>(
            r"
            SELECT id, name, category
            FROM storefront.products
            WHERE name ILIKE $1 ESCAPE '\'
            ORDER BY name ASC, id ASC
            LIMIT $2
            ",
        )
        .bind(contains_pattern(query))
        .bind(SEARCH_LIMIT)
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(ProductSummary::from).collect())
    }

    /// Names of the products a store already has.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn names_for_store(&self, store_id: StoreId) -> Result<Vec<String>, RepositoryError> {
        let names = sqlx::query_scalar::<_, String>(
            "SELECT name FROM storefront.products WHERE store_id = $1 ORDER BY id",
        )
        .bind(store_id)
        .fetch_all(self.pool)
        .await?;

        Ok(names)
    }

    /// Add a product to a store.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails (including an
    /// unknown store).
    pub async fn create(
        &self,
        store_id: StoreId,
        name: &str,
        category: &str,
    ) -> Result<ProductSummary, RepositoryError> {
        let row = sqlx::query_as::<_, ProductRow>(
            r"
            INSERT INTO storefront.products (store_id, name, category)
            VALUES ($1, $2, $3)
            RETURNING id, name, category
            ",
        )
        .bind(store_id)
        .bind(name)
        .bind(category)
        .fetch_one(self.pool)
        .await
        .map_err(|e| conflict_or_database(e, "product"))?;

        Ok(row.into())
    }
}

/// `ILIKE` pattern matching `query` anywhere, with wildcards in the query
/// taken literally.
fn contains_pattern(query: &str) -> String {
    let mut pattern = String::with_capacity(query.len() + 2);
    pattern.push('%');
    for c in query.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}
