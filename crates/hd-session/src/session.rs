//! Login session lifecycle.
//!
//! The authenticated state is persisted as one JSON blob under
//! [`AUTH_STATE_KEY`]. Anything that fails to decode, or decodes into an
//! inconsistent state, is treated as logged out.

use serde::{Deserialize, Serialize};

use hd_core::entities::User;
use hd_core::permissions::Viewer;
use hd_core::updates::ProfileUpdate;

use crate::error::SessionError;
use crate::storage::KeyValueStore;

pub const AUTH_STATE_KEY: &str = "authState";
pub const LAST_USER_NAME_KEY: &str = "lastUserNome";
pub const LAST_USER_AVATAR_KEY: &str = "lastUserFoto";

pub const DEFAULT_LAST_USER_NAME: &str = "Usuário";
pub const DEFAULT_AVATAR_URL: &str = "https://cdn-icons-png.flaticon.com/512/149/149071.png";

/// Persisted shape of the session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthState {
    pub is_authenticated: bool,
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub token: Option<String>,
}

impl AuthState {
    /// Authenticated, with a user and a non-empty token.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        if !self.is_authenticated {
            return true;
        }
        self.user.is_some() && self.token.as_deref().is_some_and(|t| !t.is_empty())
    }
}

/// Who was logged in last, for the login prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LastUser {
    pub name: String,
    pub avatar: String,
}

/// The current session, backed by a [`KeyValueStore`].
pub struct SessionStore<S> {
    storage: S,
    state: AuthState,
}

impl<S: KeyValueStore> SessionStore<S> {
    /// Load the persisted session. Never fails: unreadable state is logged
    /// and treated as logged out.
    pub fn restore(storage: S) -> Self {
        let state = match storage.get(AUTH_STATE_KEY) {
            Ok(Some(raw)) => decode_state(&raw),
            Ok(None) => AuthState::default(),
            Err(error) => {
                tracing::warn!(%error, "session storage unreadable; starting logged out");
                AuthState::default()
            }
        };
        Self { storage, state }
    }

    #[must_use]
    pub const fn state(&self) -> &AuthState {
        &self.state
    }

    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.state.is_authenticated
    }

    #[must_use]
    pub const fn user(&self) -> Option<&User> {
        self.state.user.as_ref()
    }

    /// Bearer token to attach to requests, if logged in.
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        if self.state.is_authenticated {
            self.state.token.as_deref()
        } else {
            None
        }
    }

    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.user().is_some_and(User::is_admin)
    }

    #[must_use]
    pub fn viewer(&self) -> Option<Viewer> {
        self.user().map(Viewer::from)
    }

    /// Like [`Self::viewer`] for commands that need a session.
    ///
    /// # Errors
    ///
    /// `SessionError::NotAuthenticated` when logged out.
    pub fn require_viewer(&self) -> Result<Viewer, SessionError> {
        self.viewer().ok_or(SessionError::NotAuthenticated)
    }

    /// Mark the session authenticated and persist it. The password is never
    /// stored.
    ///
    /// # Errors
    ///
    /// `MissingToken` for an empty token, or a storage error.
    pub fn login(&mut self, user: User, token: impl Into<String>) -> Result<(), SessionError> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(SessionError::MissingToken);
        }
        let state = AuthState {
            is_authenticated: true,
            user: Some(user.without_password()),
            token: Some(token),
        };
        self.persist(&state)?;
        tracing::debug!(user_id = ?state.user.as_ref().map(|u| &u.id), "session started");
        self.state = state;
        Ok(())
    }

    /// Clear the session and remember the last user's name and avatar.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the saved session cannot be removed. The
    /// in-memory state is cleared regardless. Remembering the last user is
    /// best-effort.
    pub fn logout(&mut self) -> Result<(), SessionError> {
        let previous = std::mem::take(&mut self.state);
        let name = previous
            .user
            .as_ref()
            .map(|u| u.name.trim())
            .filter(|n| !n.is_empty())
            .unwrap_or(DEFAULT_LAST_USER_NAME);
        let avatar = previous
            .user
            .as_ref()
            .and_then(|u| u.avatar.as_deref())
            .unwrap_or(DEFAULT_AVATAR_URL);

        self.storage.remove(AUTH_STATE_KEY)?;
        for (key, value) in [(LAST_USER_NAME_KEY, name), (LAST_USER_AVATAR_KEY, avatar)] {
            if let Err(error) = self.storage.set(key, value) {
                tracing::warn!(%error, key, "could not remember last user");
            }
        }
        tracing::debug!("session cleared");
        Ok(())
    }

    /// Merge `update` into the current user and persist. Returns `false`
    /// (and changes nothing) when logged out.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the session cannot be re-persisted.
    pub fn update_profile(&mut self, update: &ProfileUpdate) -> Result<bool, SessionError> {
        if !self.state.is_authenticated {
            return Ok(false);
        }
        let mut state = self.state.clone();
        let Some(user) = state.user.as_mut() else {
            return Ok(false);
        };
        update.apply_to(user);
        self.persist(&state)?;
        self.state = state;
        Ok(true)
    }

    /// Replace the stored user with a fresh copy from the server, keeping the
    /// token. No-op when logged out.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the session cannot be re-persisted.
    pub fn replace_user(&mut self, user: User) -> Result<bool, SessionError> {
        if !self.state.is_authenticated {
            return Ok(false);
        }
        let state = AuthState {
            user: Some(user.without_password()),
            ..self.state.clone()
        };
        self.persist(&state)?;
        self.state = state;
        Ok(true)
    }

    /// Name and avatar of whoever logged out last, with defaults.
    #[must_use]
    pub fn last_user(&self) -> LastUser {
        let read = |key: &str, default: &str| {
            self.storage
                .get(key)
                .ok()
                .flatten()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| default.to_string())
        };
        LastUser {
            name: read(LAST_USER_NAME_KEY, DEFAULT_LAST_USER_NAME),
            avatar: read(LAST_USER_AVATAR_KEY, DEFAULT_AVATAR_URL),
        }
    }

    fn persist(&self, state: &AuthState) -> Result<(), SessionError> {
        let raw = serde_json::to_string(state)?;
        self.storage.set(AUTH_STATE_KEY, &raw)
    }
}

fn decode_state(raw: &str) -> AuthState {
    match serde_json::from_str::<AuthState>(raw) {
        Ok(state) if state.is_consistent() => state,
        Ok(_) => {
            tracing::warn!("persisted session is inconsistent; starting logged out");
            AuthState::default()
        }
        Err(error) => {
            tracing::warn!(%error, "persisted session is malformed; starting logged out");
            AuthState::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryKeyValueStore;

    #[test]
    fn inconsistent_states() {
        let no_token = AuthState {
            is_authenticated: true,
            user: None,
            token: Some("t".into()),
        };
        assert!(!no_token.is_consistent());
        assert!(AuthState::default().is_consistent());
    }

    #[test]
    fn login_rejects_empty_token() {
        let mut session = SessionStore::restore(MemoryKeyValueStore::new());
        let user: User =
            serde_json::from_value(serde_json::json!({"id": 1, "name": "Ana"})).expect("user");
        assert!(matches!(
            session.login(user, "  "),
            Err(SessionError::MissingToken)
        ));
        assert!(!session.is_authenticated());
    }

    #[test]
    fn last_user_defaults() {
        let session = SessionStore::restore(MemoryKeyValueStore::new());
        let last = session.last_user();
        assert_eq!(last.name, DEFAULT_LAST_USER_NAME);
        assert_eq!(last.avatar, DEFAULT_AVATAR_URL);
    }

    #[test]
    fn profile_update_is_noop_when_logged_out() {
        let mut session = SessionStore::restore(MemoryKeyValueStore::new());
        let update = hd_core::updates::ProfileUpdateBuilder::new().name("X").build();
        assert!(!session.update_profile(&update).expect("update"));
    }
}
