//! Database repository for favorite record operations.
//!
//! Uses prepared statements; the unique index on (email, country_code)
//! enforces the duplicate-favorite invariant.

use chrono::Utc;
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};

use crate::errors::AppError;
use crate::models::{country_code, FavoriteRecord};

/// Database repository for all favorite record operations.
#[derive(Clone)]
pub struct Repository {
    pool: SqlitePool,
}

impl Repository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Look up a single favorite by owner and country code.
    pub async fn find_favorite(
        &self,
        email: &str,
        code: &str,
    ) -> Result<Option<FavoriteRecord>, AppError> {
        let row = sqlx::query(
            "SELECT id, email, country, created_at FROM favorites WHERE email = ? AND country_code = ?"
        )
        .bind(email)
        .bind(code)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(favorite_from_row))
    }

    /// Insert a new favorite, assigning its identifier and timestamp.
    ///
    /// Returns `Conflict` when a favorite for the same (email, country code)
    /// pair already exists and `Validation` when the snapshot has no usable
    /// country code.
    pub async fn insert_favorite(
        &self,
        email: &str,
        country: &serde_json::Value,
    ) -> Result<FavoriteRecord, AppError> {
        let code = country_code(country)
            .ok_or_else(|| AppError::Validation("Country code (cca3) is required".to_string()))?;

        let id = uuid::Uuid::new_v4().to_string();
        let now = Utc::now().to_rfc3339();
        let country_json = serde_json::to_string(country)
            .map_err(|e| AppError::Internal(format!("Failed to serialize country: {}", e)))?;

        let result = sqlx::query(
            "INSERT INTO favorites (id, email, country_code, country, created_at) VALUES (?, ?, ?, ?, ?)"
        )
        .bind(&id)
        .bind(email)
        .bind(code)
        .bind(&country_json)
        .bind(&now)
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(FavoriteRecord {
                id,
                email: email.to_string(),
                country: country.clone(),
                created_at: now,
            }),
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                Err(AppError::Conflict("Already in favorites".to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// List all favorites for a user. May be empty.
    pub async fn list_favorites(&self, email: &str) -> Result<Vec<FavoriteRecord>, AppError> {
        let rows =
            sqlx::query("SELECT id, email, country, created_at FROM favorites WHERE email = ?")
                .bind(email)
                .fetch_all(&self.pool)
                .await?;

        Ok(rows.iter().map(favorite_from_row).collect())
    }

    /// Delete a favorite. Returns the number of rows deleted (0 or 1);
    /// deleting a non-existent favorite is not an error.
    pub async fn delete_favorite(&self, email: &str, code: &str) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM favorites WHERE email = ? AND country_code = ?")
            .bind(email)
            .bind(code)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}

/// Convert a database row to a FavoriteRecord.
fn favorite_from_row(row: &SqliteRow) -> FavoriteRecord {
    let country_json: String = row.get("country");

    FavoriteRecord {
        id: row.get("id"),
        email: row.get("email"),
        country: serde_json::from_str(&country_json).unwrap_or(serde_json::Value::Null),
        created_at: row.get("created_at"),
    }
}
