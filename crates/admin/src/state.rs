//! Application state shared across handlers.

use std::sync::Arc;

use arcline_store::{StoreClient, StoreError};

use crate::config::AdminConfig;

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`. The store client here carries the anon
/// key; handlers acting on behalf of a signed-in operator derive a
/// token-bearing client via [`StoreClient::authenticated`].
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: AdminConfig,
    store: StoreClient,
}

impl AppState {
    /// Create a new application state.
    ///
    /// # Errors
    ///
    /// Returns an error if the store client cannot be constructed.
    pub fn new(config: AdminConfig) -> Result<Self, StoreError> {
        let store = StoreClient::new(&config.store)?;

        Ok(Self {
            inner: Arc::new(AppStateInner { config, store }),
        })
    }

    /// Get a reference to the back-office configuration.
    #[must_use]
    pub fn config(&self) -> &AdminConfig {
        &self.inner.config
    }

    /// Get a reference to the remote store client.
    #[must_use]
    pub fn store(&self) -> &StoreClient {
        &self.inner.store
    }
}
