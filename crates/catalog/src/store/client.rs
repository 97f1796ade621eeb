//! HTTP client for the remote store.

use tracing::{error, instrument};

use petalcart_core::UserId;

use super::StoreError;
use super::types::{CartLine, CartPatch, Flower};
use crate::config::CatalogConfig;
use crate::models::User;

/// Client for the remote product/user store.
#[derive(Debug, Clone)]
pub struct StoreClient {
    client: reqwest::Client,
    base_url: String,
}

impl StoreClient {
    /// Create a new store client.
    #[must_use]
    pub fn new(config: &CatalogConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.store_url.as_str().trim_end_matches('/').to_string(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{path}", self.base_url)
    }

    /// Fetch the full flower catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the store responds with a
    /// non-success status, or the body does not parse.
    #[instrument(skip(self))]
    pub async fn list_flowers(&self) -> Result<Vec<Flower>, StoreError> {
        let response = self.client.get(self.endpoint("flowers")).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(api_error(status, body, "flower list request failed"));
        }

        parse_json(&body, "flower list")
    }

    /// Fetch a user record including its cart.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` on a 404 - the stale-session signal -
    /// and other errors as for [`Self::list_flowers`].
    #[instrument(skip(self), fields(user_id = %user_id))]
    pub async fn get_user(&self, user_id: UserId) -> Result<User, StoreError> {
        let response = self
            .client
            .get(self.endpoint(&format!("users/{user_id}")))
            .send()
            .await?;
        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(StoreError::NotFound(format!("user {user_id}")));
        }

        let body = response.text().await?;
        if !status.is_success() {
            return Err(api_error(status, body, "user fetch failed"));
        }

        parse_json(&body, "user record")
    }

    /// Replace a user's cart wholesale.
    ///
    /// The mutation counts as committed only when the store returns a
    /// success status.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the store responds with a
    /// non-success status.
    #[instrument(skip(self, cart), fields(user_id = %user_id, lines = cart.len()))]
    pub async fn replace_cart(&self, user_id: UserId, cart: &[CartLine]) -> Result<(), StoreError> {
        let response = self
            .client
            .patch(self.endpoint(&format!("users/{user_id}")))
            .json(&CartPatch { cart })
            .send()
            .await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(api_error(status, body, "cart update rejected"));
        }

        Ok(())
    }
}

/// Build an `Api` error, logging the status and a truncated body.
fn api_error(status: reqwest::StatusCode, body: String, context: &str) -> StoreError {
    error!(
        status = %status,
        body = %body.chars().take(200).collect::<String>(),
        "{context}"
    );
    StoreError::Api {
        status: status.as_u16(),
        message: body.chars().take(200).collect(),
    }
}

/// Parse a response body, logging a truncated copy on failure.
fn parse_json<T: serde::de::DeserializeOwned>(body: &str, what: &str) -> Result<T, StoreError> {
    serde_json::from_str(body).map_err(|e| {
        error!(
            error = %e,
            body = %body.chars().take(200).collect::<String>(),
            "failed to parse {what}"
        );
        StoreError::Parse(e)
    })
}
