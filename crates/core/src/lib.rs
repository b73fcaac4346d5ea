//! Skateshop Core - Shared domain types.
//!
//! This crate provides the types shared by every Skateshop component:
//! - `storefront` - Store listing, store creation and product search service
//! - `cli` - Command-line tools for migrations and demo data
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no database
//! access. Database encoding for the ID and slug newtypes is available behind the
//! `postgres` feature.
//!
//! # Modules
//!
//! - [`types`] - Type-safe IDs, store names, slugs, derived status and sort keys

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
