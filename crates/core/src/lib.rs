//! Arcline Core - Shared domain types library.
//!
//! This crate provides common types used across all Arcline components:
//! - `site` - Public marketing/catalog site
//! - `admin` - Internal back office (session-gated)
//! - `store` - Client for the hosted backend
//! - `cli` - Command-line tools for seeding the remote store
//!
//! # Architecture
//!
//! The core crate contains only types and pure logic - no I/O, no HTTP
//! clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Catalog, brand, gallery, settings, and profile rows
//! - [`filter`] - The catalog filter applied on the rental page
//! - [`seed`] - Embedded fallback data shown when the remote store is
//!   unreachable or empty

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod filter;
pub mod seed;
pub mod types;

pub use types::*;
