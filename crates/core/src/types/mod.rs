//! Core types for Skateshop.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod slug;
pub mod sort;
pub mod status;
pub mod store_name;

pub use id::*;
pub use slug::Slug;
pub use sort::{SortDirection, StoreColumn, StoreSort};
pub use status::{StatusFilter, StoreStatus};
pub use store_name::{StoreName, StoreNameError};
