//! Application state shared across handlers.

use std::sync::Arc;

use arcline_core::{ContactSettings, seed};
use arcline_store::{StoreClient, StoreError, hydrate_single};

use crate::config::SiteConfig;

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`. The contact settings are hydrated once
/// at startup (embedded default if the remote store has nothing) and
/// are immutable for the life of the process; a full restart picks up
/// edits made in the back office.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: SiteConfig,
    store: StoreClient,
    contact: ContactSettings,
}

impl AppState {
    /// Build the application state, performing the one startup read for
    /// the shared contact settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the store client cannot be constructed; a
    /// failed contact read falls back to the embedded default instead
    /// of failing startup.
    pub async fn initialize(config: SiteConfig) -> Result<Self, StoreError> {
        let store = StoreClient::new(&config.store)?;
        let contact = hydrate_single(
            "contact",
            store.contact_settings().await,
            seed::default_contact(),
        );

        Ok(Self {
            inner: Arc::new(AppStateInner {
                config,
                store,
                contact,
            }),
        })
    }

    /// Get a reference to the site configuration.
    #[must_use]
    pub fn config(&self) -> &SiteConfig {
        &self.inner.config
    }

    /// Get a reference to the remote store client.
    #[must_use]
    pub fn store(&self) -> &StoreClient {
        &self.inner.store
    }

    /// Get the shared contact settings (immutable per process).
    #[must_use]
    pub fn contact(&self) -> &ContactSettings {
        &self.inner.contact
    }
}
