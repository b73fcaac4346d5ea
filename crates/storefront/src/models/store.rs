//! Store domain types.

use chrono::{DateTime, Utc};
use serde::Serialize;

use skateshop_core::{Slug, StoreId, StoreName, StoreStatus};

/// A store (domain type).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Store {
    pub id: StoreId,
    /// Globally unique display name.
    pub name: StoreName,
    pub description: Option<String>,
    /// Owner, as issued by the auth provider.
    pub user_id: String,
    pub slug: Slug,
    /// External payment account. Present once the owner connects one.
    pub payment_account_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Store {
    /// Derived status of the store.
    #[must_use]
    pub fn status(&self) -> StoreStatus {
        StoreStatus::from_payment_account(self.payment_account_id.as_deref())
    }
}

/// One row of a store listing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreListingRow {
    pub id: StoreId,
    pub name: StoreName,
    pub description: Option<String>,
    pub payment_account_id: Option<String>,
    /// Number of products in the store; zero when it has none.
    pub product_count: i64,
}

impl StoreListingRow {
    /// Derived status of the store.
    #[must_use]
    pub fn status(&self) -> StoreStatus {
        StoreStatus::from_payment_account(self.payment_account_id.as_deref())
    }
}

/// A page of stores plus the total number of stores matching the filters.
///
/// `count` ignores pagination, so `items.len()` may be smaller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StoreListing {
    pub items: Vec<StoreListingRow>,
    pub count: i64,
}
