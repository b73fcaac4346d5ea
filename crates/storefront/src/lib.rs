//! Skateshop storefront library.
//!
//! Store listing, store creation and product search on top of `PostgreSQL`,
//! exposed as plain async actions ([`actions`]) and as an axum router
//! ([`routes`]).

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod actions;
pub mod cache;
pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod state;
pub mod validation;

pub use actions::ActionError;
pub use actions::products::filter_products;
pub use actions::stores::{add_store, get_stores};
pub use cache::{Revalidate, STORES_VIEW_PATH, ViewCache};
pub use models::{StoreListing, StoreListingRow};
pub use validation::{RawCreateStoreInput, RawGetStoresInput, ValidationError};
