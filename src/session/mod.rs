//! Client-side favorites session state.
//!
//! [`FavoritesSession`] owns the local view of "is country X a favorite of
//! the current user" for one logged-in identity. It is constructed on login
//! with an explicit [`FavoritesClient`] and email, and dropped on logout; an
//! identity change means dropping the old session and opening a new one.
//!
//! Toggles are optimistic: local state is mutated and published first, the
//! remote call follows, and the local change is rolled back if the call
//! fails. Consumers that render the list subscribe to a watch channel.

use serde_json::Value;
use tokio::sync::watch;

use crate::client::{ClientError, FavoritesClient};
use crate::models::country_code;

/// Lifecycle phase of a favorites session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// Constructed, favorites not yet fetched
    Uninitialized,
    /// Fetch in progress
    Loading,
    /// Favorites loaded from the store
    Ready,
    /// Fetch failed; session is usable but starts empty
    Degraded,
}

/// What a toggle actually did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleAction {
    Added,
    Removed,
    /// The snapshot had no country code; nothing happened
    Skipped,
}

/// Per-login favorites state manager.
pub struct FavoritesSession {
    client: FavoritesClient,
    email: String,
    favorites: Vec<Value>,
    phase: SessionPhase,
    tx: watch::Sender<Vec<Value>>,
}

impl FavoritesSession {
    /// Create a session for `email` without fetching anything yet.
    pub fn new(client: FavoritesClient, email: impl Into<String>) -> Self {
        let (tx, _rx) = watch::channel(Vec::new());

        Self {
            client,
            email: email.into(),
            favorites: Vec::new(),
            phase: SessionPhase::Uninitialized,
            tx,
        }
    }

    /// Create a session and immediately load the user's favorites.
    pub async fn open(client: FavoritesClient, email: impl Into<String>) -> Self {
        let mut session = Self::new(client, email);
        session.load().await;
        session
    }

    /// Fetch the full favorites list and replace local state with it.
    ///
    /// On failure the session degrades to an empty list rather than
    /// surfacing an error; the store stays authoritative and a later
    /// `load` can rebuild the view.
    pub async fn load(&mut self) {
        self.phase = SessionPhase::Loading;

        match self.client.list_favorites(&self.email).await {
            Ok(records) => {
                self.favorites = records.into_iter().map(|record| record.country).collect();
                self.phase = SessionPhase::Ready;
            }
            Err(err) => {
                tracing::warn!("Failed to load favorites for {}: {}", self.email, err);
                self.favorites = Vec::new();
                self.phase = SessionPhase::Degraded;
            }
        }

        self.publish();
    }

    /// Toggle a country in or out of the favorites.
    ///
    /// The local list is updated optimistically and rolled back if the
    /// remote call fails; the typed error is returned so the presentation
    /// layer can decide what to show.
    pub async fn toggle(&mut self, country: &Value) -> Result<ToggleAction, ClientError> {
        let Some(code) = country_code(country).map(str::to_string) else {
            tracing::debug!("Ignoring toggle for snapshot without country code");
            return Ok(ToggleAction::Skipped);
        };

        if self.is_favorite(&code) {
            self.remove_local(&code);

            if let Err(err) = self.client.remove_favorite(&self.email, &code).await {
                self.add_local(country.clone());
                return Err(err);
            }

            Ok(ToggleAction::Removed)
        } else {
            self.add_local(country.clone());

            match self.client.add_favorite(&self.email, country).await {
                Ok(_) => Ok(ToggleAction::Added),
                // The store already holds this favorite; the optimistic
                // state matches it, so the toggle stands.
                Err(ClientError::Conflict(_)) => Ok(ToggleAction::Added),
                Err(err) => {
                    self.remove_local(&code);
                    Err(err)
                }
            }
        }
    }

    /// Synchronous membership check against local state.
    pub fn is_favorite(&self, code: &str) -> bool {
        !code.is_empty()
            && self
                .favorites
                .iter()
                .any(|country| country_code(country) == Some(code))
    }

    /// The current local favorites view (country snapshots).
    pub fn favorites(&self) -> &[Value] {
        &self.favorites
    }

    /// Subscribe to local state changes.
    pub fn subscribe(&self) -> watch::Receiver<Vec<Value>> {
        self.tx.subscribe()
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    fn add_local(&mut self, country: Value) {
        self.favorites.push(country);
        self.publish();
    }

    fn remove_local(&mut self, code: &str) {
        self.favorites
            .retain(|country| country_code(country) != Some(code));
        self.publish();
    }

    fn publish(&self) {
        self.tx.send_replace(self.favorites.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn offline_session() -> FavoritesSession {
        FavoritesSession::new(FavoritesClient::new("http://127.0.0.1:1"), "test@example.com")
    }

    #[test]
    fn test_fresh_session_has_no_favorites() {
        let session = offline_session();

        assert_eq!(session.phase(), SessionPhase::Uninitialized);
        assert!(session.favorites().is_empty());
        assert!(!session.is_favorite("FRA"));
        assert!(!session.is_favorite(""));
    }

    #[tokio::test]
    async fn test_toggle_without_country_code_is_skipped() {
        let mut session = offline_session();

        let action = session.toggle(&json!({ "name": "France" })).await.unwrap();
        assert_eq!(action, ToggleAction::Skipped);
        assert!(session.favorites().is_empty());
    }
}
