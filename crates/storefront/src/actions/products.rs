//! Product search.

use sqlx::PgPool;
use tracing::{error, instrument};

use crate::db::ProductRepository;
use crate::models::ProductGroup;

use super::ActionError;

/// Search products by name and group the matches by category.
///
/// A blank query returns no groups without touching the database.
///
/// # Errors
///
/// Returns `ActionError::Query` if the database fails.
#[instrument(skip(pool))]
pub async fn filter_products(pool: &PgPool, query: &str) -> Result<Vec<ProductGroup>, ActionError> {
    let query = query.trim();
    if query.is_empty() {
        return Ok(Vec::new());
    }

    let products = ProductRepository::new(pool)
        .search_by_name(query)
        .await
        .map_err(|e| {
            error!(error = %e, "Product search failed");
            ActionError::Query(e)
        })?;

    Ok(ProductGroup::group(products))
}
