//! Backend connection configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `STORE_API_URL` - Base URL of the hosted backend project
//! - `STORE_ANON_KEY` - Public (anon) API key
//!
//! ## Optional
//! - `STORE_SERVICE_KEY` - Service-role key (CLI seeding only; never
//!   configured for the public site)
//! - `STORE_TIMEOUT_SECS` - Per-request timeout (default: 10)

use std::time::Duration;

use secrecy::SecretString;
use thiserror::Error;

/// Default per-request timeout. Every remote call must reach a terminal
/// state; a hung backend turns into a visible error, not a stuck page.
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Connection settings for the hosted backend.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Base URL of the backend project (e.g. `https://abc.example.co`).
    pub api_url: String,
    /// Public API key, sent as the `apikey` header and the default bearer.
    pub anon_key: String,
    /// Service-role key for out-of-band tooling.
    pub service_key: Option<SecretString>,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl StoreConfig {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or the
    /// timeout is not a number.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_url = get_required_env("STORE_API_URL")?;
        let anon_key = get_required_env("STORE_ANON_KEY")?;
        let service_key = std::env::var("STORE_SERVICE_KEY").ok().map(SecretString::from);

        let timeout_secs = match std::env::var("STORE_TIMEOUT_SECS") {
            Ok(value) => value.parse::<u64>().map_err(|e| {
                ConfigError::InvalidEnvVar("STORE_TIMEOUT_SECS".to_string(), e.to_string())
            })?,
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            api_url,
            anon_key,
            service_key,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}
