//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and role-aware components to coordinate login
//! redirects and navigation links. Mirrors what `SessionStore` holds so
//! components react to login and logout without re-reading storage.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::session::{Role, Session};

/// Authentication state tracking the current session and loading status.
///
/// Starts in `loading` because the server render cannot see browser storage;
/// the hydrated app flips it once the stored session has been read.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    pub session: Option<Session>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { session: None, loading: true }
    }
}

impl AuthState {
    /// State after the stored session has been read.
    pub fn loaded(session: Option<Session>) -> Self {
        Self { session, loading: false }
    }

    pub fn role(&self) -> Option<Role> {
        self.session.as_ref().map(|s| s.role)
    }

    pub fn user_id(&self) -> Option<String> {
        self.session.as_ref().and_then(Session::user_id)
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    /// Replacement state when `stored` no longer matches this one.
    /// Returns `None` while loading or when nothing changed.
    pub fn synced_with(&self, stored: Option<Session>) -> Option<Self> {
        if self.loading || self.session == stored {
            return None;
        }
        Some(Self::loaded(stored))
    }
}
