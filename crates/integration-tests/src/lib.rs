//! Integration test helpers for Skateshop.
//!
//! # Running Tests
//!
//! ```bash
//! # Point at a disposable database
//! export STOREFRONT_DATABASE_URL=postgres://localhost/skateshop_test
//!
//! # Run the database-backed tests
//! cargo test -p skateshop-integration-tests -- --ignored
//! ```
//!
//! Tests never truncate tables. Each one owns its rows through a fresh user ID
//! and unique store names, so tests can run in parallel against a shared
//! database.

use std::sync::Mutex;

use secrecy::SecretString;
use sqlx::PgPool;

use skateshop_core::StoreId;
use skateshop_storefront::{Revalidate, db};

/// Connect to the test database and apply migrations.
///
/// # Panics
///
/// Panics if no database URL is configured or the database is unreachable.
pub async fn test_pool() -> PgPool {
    dotenvy::dotenv().ok();

    let url = std::env::var("STOREFRONT_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
        .map(SecretString::from)
        .unwrap_or_else(|_| panic!("STOREFRONT_DATABASE_URL must be set for integration tests"));

    let pool = db::create_pool(&url)
        .await
        .unwrap_or_else(|e| panic!("failed to connect to test database: {e}"));

    sqlx::migrate!("../storefront/migrations")
        .run(&pool)
        .await
        .unwrap_or_else(|e| panic!("failed to run migrations: {e}"));

    pool
}

/// A user ID no other test uses.
#[must_use]
pub fn unique_user() -> String {
    format!("test-user-{}", uuid::Uuid::new_v4())
}

/// Short lowercase suffix for unique store names.
#[must_use]
pub fn unique_suffix() -> String {
    uuid::Uuid::new_v4().simple().to_string()[..12].to_string()
}

/// A store row to insert directly, bypassing `add_store`.
pub struct StoreFixture<'a> {
    pub name: String,
    pub user_id: &'a str,
    pub payment_account_id: Option<&'a str>,
    /// How long ago the store was created.
    pub age_secs: i32,
    /// Number of products to attach.
    pub products: usize,
}

impl<'a> StoreFixture<'a> {
    /// An inactive store with no products.
    #[must_use]
    pub fn new(user_id: &'a str) -> Self {
        Self {
            name: format!("Fixture {}", unique_suffix()),
            user_id,
            payment_account_id: None,
            age_secs: 0,
            products: 0,
        }
    }

    #[must_use]
    pub const fn active(mut self, payment_account_id: &'a str) -> Self {
        self.payment_account_id = Some(payment_account_id);
        self
    }

    #[must_use]
    pub const fn age_secs(mut self, age_secs: i32) -> Self {
        self.age_secs = age_secs;
        self
    }

    #[must_use]
    pub const fn products(mut self, products: usize) -> Self {
        self.products = products;
        self
    }

    /// Insert the store and its products.
    ///
    /// # Panics
    ///
    /// Panics if an insert fails.
    pub async fn insert(self, pool: &PgPool) -> StoreId {
        let slug = skateshop_core::Slug::from_name(&self.name);

        let id: StoreId = sqlx::query_scalar(
            r"
            INSERT INTO storefront.stores (name, user_id, slug, payment_account_id, created_at)
            VALUES ($1, $2, $3, $4, NOW() - make_interval(secs => $5))
            RETURNING id
            ",
        )
        .bind(&self.name)
        .bind(self.user_id)
        .bind(slug)
        .bind(self.payment_account_id)
        .bind(f64::from(self.age_secs))
        .fetch_one(pool)
        .await
        .unwrap_or_else(|e| panic!("failed to insert store fixture: {e}"));

        for n in 0..self.products {
            sqlx::query(
                "INSERT INTO storefront.products (store_id, name, category) VALUES ($1, $2, $3)",
            )
            .bind(id)
            .bind(format!("{} product {n}", self.name))
            .bind("fixtures")
            .execute(pool)
            .await
            .unwrap_or_else(|e| panic!("failed to insert product fixture: {e}"));
        }

        id
    }
}

/// Records revalidated paths.
#[derive(Debug, Default)]
pub struct RecordingRevalidate {
    paths: Mutex<Vec<String>>,
}

impl RecordingRevalidate {
    /// Paths revalidated so far.
    ///
    /// # Panics
    ///
    /// Panics if the lock is poisoned.
    #[must_use]
    pub fn paths(&self) -> Vec<String> {
        self.paths
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone()
    }
}

impl Revalidate for RecordingRevalidate {
    fn revalidate_path(&self, path: &str) {
        self.paths
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .push(path.to_string());
    }
}
