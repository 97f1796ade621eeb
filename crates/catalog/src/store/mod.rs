//! Remote store client.
//!
//! # Architecture
//!
//! - The store is a plain JSON-over-HTTP collaborator; the remote record is
//!   the source of truth and carts are replaced wholesale, never patched
//!   line by line
//! - No retries, no timeout: a request that never resolves leaves the view
//!   in its pre-request state
//!
//! # Endpoints
//!
//! - `GET /flowers` - the full product catalog
//! - `GET /users/{id}` - a user record including its `cart`
//! - `PATCH /users/{id}` with `{"cart": [...]}` - wholesale cart replacement
//!
//! # Example
//!
//! ```rust,ignore
//! use petalcart_catalog::store::StoreClient;
//!
//! let client = StoreClient::new(&config);
//! let flowers = client.list_flowers().await?;
//! let user = client.get_user(user_id).await?;
//! client.replace_cart(user_id, &user.cart).await?;
//! ```

mod client;
pub mod types;

pub use client::StoreClient;

use thiserror::Error;

/// Errors that can occur when talking to the remote store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// HTTP request failed in transit.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The store returned a non-success status.
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// Resource not found. On the user endpoint this signals a stale
    /// session.
    #[error("Not found: {0}")]
    NotFound(String),

    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_error_display() {
        let err = StoreError::NotFound("user 12".to_string());
        assert_eq!(err.to_string(), "Not found: user 12");

        let err = StoreError::Api {
            status: 500,
            message: "boom".to_string(),
        };
        assert_eq!(err.to_string(), "API error: 500 - boom");
    }
}
