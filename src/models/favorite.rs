//! Favorite record model matching the frontend favorites contract.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A persisted favorite: one user's snapshot of one country.
///
/// The country snapshot is an opaque document taken at favoriting time, not
/// a live reference. The only field the service relies on is `cca3`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteRecord {
    pub id: String,
    pub email: String,
    pub country: Value,
    pub created_at: String,
}

/// Request body for adding a favorite.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddFavoriteRequest {
    pub email: String,
    pub country: Value,
}

/// Simple `{message: ...}` response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusMessage {
    pub message: String,
}

impl StatusMessage {
    pub fn removed() -> Self {
        Self {
            message: "Removed".to_string(),
        }
    }
}

/// Extract the country code from a country snapshot.
///
/// Returns `None` when `cca3` is absent, not a string, or empty.
pub fn country_code(country: &Value) -> Option<&str> {
    country
        .get("cca3")
        .and_then(Value::as_str)
        .filter(|code| !code.is_empty())
}
