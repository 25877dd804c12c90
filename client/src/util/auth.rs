//! Shared session helpers for views.
//!
//! SYSTEM CONTEXT
//! ==============
//! Views apply identical logout and expired-session behavior: the stored
//! session is cleared, `AuthState` is updated, and the route guard performs
//! the redirect on its next evaluation.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use crate::net::api::{ApiClient, ApiError};
use crate::session::SessionStore;
use crate::state::auth::AuthState;

/// Session store and reactive auth state provided by `App`.
#[derive(Clone, Debug)]
pub struct SessionContext {
    pub store: SessionStore,
    pub auth: RwSignal<AuthState>,
}

impl SessionContext {
    /// REST client authorized with the current session.
    pub fn api(&self) -> ApiClient {
        ApiClient::from_store(&self.store)
    }

    /// Forget the session and let guards redirect.
    pub fn logout(&self) {
        self.store.clear_session();
        self.auth.set(AuthState::loaded(None));
        log::info!("logged out");
    }

    /// Turn a failed call into the message to render next to the form.
    ///
    /// Authorization failures also end the session so the guard sends the
    /// user back to `/login`.
    pub fn report(&self, err: &ApiError) -> String {
        if expire_on_auth_failure(err, &self.store) {
            let _ = self.auth.try_set(AuthState::loaded(None));
        }
        err.to_string()
    }
}

/// Fetch the session context provided by `App`.
pub fn use_session() -> SessionContext {
    expect_context::<SessionContext>()
}

/// Clear the stored session when `err` means the token is no longer valid.
/// Returns whether the session was cleared.
pub fn expire_on_auth_failure(err: &ApiError, store: &SessionStore) -> bool {
    match err {
        ApiError::MissingSession => log::info!("no stored token; request not sent"),
        _ if err.is_auth_failure() => log::warn!("session rejected by backend: {err}"),
        _ => return false,
    }
    store.clear_session();
    true
}
