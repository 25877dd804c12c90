//! Session repository over an injectable storage backend.
//!
//! ERROR HANDLING
//! ==============
//! Reads never fail: a missing, empty, or corrupt stored value is reported as
//! "no session" so callers fall through to the login redirect instead of
//! crashing on whatever another tab or an older build left in storage.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::fmt;
use std::sync::Arc;

use super::storage::{BrowserSessionStorage, SessionStorage};
use super::{Role, Session, SessionError};

/// Cheaply cloneable handle to the current session record.
#[derive(Clone)]
pub struct SessionStore {
    storage: Arc<dyn SessionStorage>,
}

impl SessionStore {
    pub fn new(storage: Arc<dyn SessionStorage>) -> Self {
        Self { storage }
    }

    /// Store backed by browser `localStorage`.
    pub fn browser() -> Self {
        Self::new(Arc::new(BrowserSessionStorage::default()))
    }

    /// Persist `{token, role}`, replacing any prior session.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::EmptyToken`] for a blank token, or the
    /// backend's error if the write is rejected.
    pub fn set_session(&self, token: &str, role: Role) -> Result<Session, SessionError> {
        let token = token.trim();
        if token.is_empty() {
            return Err(SessionError::EmptyToken);
        }
        let session = Session::new(token, role);
        let raw = serde_json::to_string(&session).map_err(|e| SessionError::Encode(e.to_string()))?;
        self.storage.write(&raw)?;
        log::debug!("session stored for role {role}");
        Ok(session)
    }

    /// The stored session, or `None` if absent or unreadable.
    pub fn session(&self) -> Option<Session> {
        let raw = self.storage.read()?;
        if raw.trim().is_empty() {
            return None;
        }
        match serde_json::from_str::<Session>(&raw) {
            Ok(session) if !session.token.trim().is_empty() => Some(session),
            Ok(_) => None,
            Err(e) => {
                log::warn!("ignoring unreadable stored session: {e}");
                None
            }
        }
    }

    pub fn get_token(&self) -> Option<String> {
        self.session().map(|s| s.token)
    }

    pub fn get_role(&self) -> Option<Role> {
        self.session().map(|s| s.role)
    }

    /// User identifier decoded from the stored token's claims.
    pub fn user_id(&self) -> Option<String> {
        self.session()?.user_id()
    }

    /// Remove the stored session (logout).
    pub fn clear_session(&self) {
        self.storage.erase();
        log::debug!("session cleared");
    }
}

impl fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionStore").field("role", &self.get_role()).finish_non_exhaustive()
    }
}
