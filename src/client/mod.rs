//! HTTP client for the favorites API.
//!
//! A thin pass-through used by the session state manager: each method issues
//! exactly one request and returns the parsed response or a typed error. No
//! retry or timeout policy beyond the HTTP client defaults.

use reqwest::StatusCode;
use serde_json::Value;

use crate::models::{AddFavoriteRequest, FavoriteRecord};

/// Error returned by [`FavoritesClient`] calls.
#[derive(Debug)]
pub enum ClientError {
    /// Network or body-decoding failure
    Transport(reqwest::Error),
    /// The favorite already exists (HTTP 409)
    Conflict(String),
    /// Any other non-success response from the API
    Api { status: u16, message: String },
}

impl std::fmt::Display for ClientError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClientError::Transport(err) => write!(f, "Transport error: {}", err),
            ClientError::Conflict(msg) => write!(f, "Conflict: {}", msg),
            ClientError::Api { status, message } => write!(f, "API error {}: {}", status, message),
        }
    }
}

impl std::error::Error for ClientError {}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        ClientError::Transport(err)
    }
}

/// Client for the favorites API, constructed with the API's base URL.
#[derive(Debug, Clone)]
pub struct FavoritesClient {
    http: reqwest::Client,
    base_url: String,
}

impl FavoritesClient {
    /// Create a client for the API served at `base_url` (scheme + authority,
    /// no trailing slash).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Create a client configured from `FAVORITES_API_URL`.
    pub fn from_env() -> Self {
        let base_url = std::env::var("FAVORITES_API_URL")
            .unwrap_or_else(|_| "http://127.0.0.1:5000".to_string());
        Self::new(base_url)
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api/favorites{}", self.base_url, path)
    }

    /// Fetch all favorites for a user.
    pub async fn list_favorites(&self, email: &str) -> Result<Vec<FavoriteRecord>, ClientError> {
        let resp = self
            .http
            .get(self.url(&format!("/{}", email)))
            .send()
            .await?;

        match resp.status() {
            status if status.is_success() => Ok(resp.json().await?),
            status => Err(error_from_response(status, resp).await),
        }
    }

    /// Add a favorite for a user.
    pub async fn add_favorite(
        &self,
        email: &str,
        country: &Value,
    ) -> Result<FavoriteRecord, ClientError> {
        let body = AddFavoriteRequest {
            email: email.to_string(),
            country: country.clone(),
        };

        let resp = self.http.post(self.url("")).json(&body).send().await?;

        match resp.status() {
            status if status.is_success() => Ok(resp.json().await?),
            status => Err(error_from_response(status, resp).await),
        }
    }

    /// Remove a favorite for a user.
    pub async fn remove_favorite(&self, email: &str, code: &str) -> Result<(), ClientError> {
        let resp = self
            .http
            .delete(self.url(&format!("/{}/{}", email, code)))
            .send()
            .await?;

        match resp.status() {
            status if status.is_success() => Ok(()),
            status => Err(error_from_response(status, resp).await),
        }
    }
}

/// Map a non-success response to a typed error, pulling the message out of
/// the API's `{message}` or `{error}` body when present.
async fn error_from_response(status: StatusCode, resp: reqwest::Response) -> ClientError {
    let body: Value = resp.json().await.unwrap_or(Value::Null);
    let message = body
        .get("message")
        .or_else(|| body.get("error"))
        .and_then(Value::as_str)
        .unwrap_or("Unexpected API response")
        .to_string();

    if status == StatusCode::CONFLICT {
        ClientError::Conflict(message)
    } else {
        ClientError::Api {
            status: status.as_u16(),
            message,
        }
    }
}
