//! Catalog configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `PETALCART_STORE_URL` - Base URL of the remote product/user store
//!   (e.g., `http://localhost:3000`)

use thiserror::Error;
use url::Url;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Catalog view configuration.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Base URL of the remote store serving `/flowers` and `/users/{id}`
    pub store_url: Url,
}

impl CatalogConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let store_url = get_required_env("PETALCART_STORE_URL")?
            .parse::<Url>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("PETALCART_STORE_URL".to_string(), e.to_string())
            })?;

        Ok(Self { store_url })
    }

    /// Create a configuration pointing at a known store URL.
    #[must_use]
    pub const fn new(store_url: Url) -> Self {
        Self { store_url }
    }
}

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}
