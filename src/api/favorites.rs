//! Favorites API endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use super::ApiResult;
use crate::errors::AppError;
use crate::models::{AddFavoriteRequest, FavoriteRecord, StatusMessage};
use crate::AppState;

/// POST /api/favorites - Add a favorite for a user.
///
/// Duplicate detection relies on the storage layer's unique index rather
/// than a read-then-write check.
pub async fn add_favorite(
    State(state): State<AppState>,
    Json(request): Json<AddFavoriteRequest>,
) -> ApiResult<(StatusCode, Json<FavoriteRecord>)> {
    // Validate required fields
    if request.email.trim().is_empty() {
        return Err(AppError::Validation("Email is required".to_string()));
    }

    let record = state
        .repo
        .insert_favorite(&request.email, &request.country)
        .await?;

    Ok((StatusCode::CREATED, Json(record)))
}

/// GET /api/favorites/:email - List a user's favorites.
pub async fn list_favorites(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> ApiResult<Json<Vec<FavoriteRecord>>> {
    let favorites = state.repo.list_favorites(&email).await?;
    Ok(Json(favorites))
}

/// DELETE /api/favorites/:email/:code - Remove a favorite.
///
/// Removal is idempotent: the response is `Removed` whether or not a record
/// existed.
pub async fn remove_favorite(
    State(state): State<AppState>,
    Path((email, code)): Path<(String, String)>,
) -> ApiResult<Json<StatusMessage>> {
    let deleted = state.repo.delete_favorite(&email, &code).await?;
    if deleted == 0 {
        tracing::debug!("No favorite to remove for {} / {}", email, code);
    }

    Ok(Json(StatusMessage::removed()))
}
