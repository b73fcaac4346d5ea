//! Domain models for the storefront.
//!
//! These are validated domain objects, separate from the row types the
//! repositories decode.

pub mod product;
pub mod store;

pub use product::{ProductGroup, ProductSummary};
pub use store::{Store, StoreListing, StoreListingRow};
