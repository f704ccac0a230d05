//! Arcline Store - client for the hosted backend.
//!
//! All persistent state lives in a hosted database-as-a-service exposing
//! three REST surfaces under one base URL:
//!
//! - a row-oriented data API (`/rest/v1/{table}`) with equality and
//!   ordering predicates,
//! - a blob storage API (`/storage/v1/object/...`) for images,
//! - a password auth API (`/auth/v1/...`).
//!
//! This crate owns the transport: one [`client::StoreClient`] shared by
//! the public site, the back office, and the CLI. It also owns the
//! availability-over-freshness hydration policy ([`loader`]) that the
//! public pages apply to remote reads.
//!
//! # Request identity
//!
//! Every request carries the project `apikey` plus a bearer token. The
//! default bearer is the anon key; after an operator signs in, admin
//! handlers swap in the issued access token via
//! [`client::StoreClient::authenticated`], and the CLI uses the
//! service-role key.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod loader;
pub mod storage;

pub use auth::{AuthError, AuthSession, AuthUser};
pub use client::{StoreClient, tables};
pub use config::{ConfigError, StoreConfig};
pub use error::StoreError;
pub use loader::{DataSource, Hydrated, hydrate, hydrate_single};
