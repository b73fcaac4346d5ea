//! Store and product actions.
//!
//! Actions are the entry points callers use: they validate raw input, run the
//! data access, and log failures before returning them. They hold no state
//! between calls.

pub mod products;
pub mod stores;

use thiserror::Error;

use crate::db::RepositoryError;
use crate::validation::ValidationError;

/// Errors returned by actions.
#[derive(Debug, Error)]
pub enum ActionError {
    /// Input failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A store with the requested name already exists.
    #[error("Store name already taken.")]
    DuplicateName(String),

    /// Data access failed.
    #[error("query failed: {0}")]
    Query(#[from] RepositoryError),
}
