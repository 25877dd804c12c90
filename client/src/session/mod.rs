//! Client-held session: bearer token plus the role chosen at login.
//!
//! SYSTEM CONTEXT
//! ==============
//! The login page writes a session, the route guard reads its role on every
//! protected navigation, and the REST client attaches its token to requests.
//! Logout and authorization failures clear it.

pub mod claims;
pub mod role;
pub mod storage;
pub mod store;

pub use role::Role;
pub use storage::{BrowserSessionStorage, MemorySessionStorage, SessionStorage};
pub use store::SessionStore;

use serde::{Deserialize, Serialize};

/// The persisted `{token, role}` pair.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub role: Role,
}

impl Session {
    pub fn new(token: impl Into<String>, role: Role) -> Self {
        Self { token: token.into(), role }
    }

    /// User identifier carried in the token claims, if it can be decoded.
    pub fn user_id(&self) -> Option<String> {
        claims::user_id(&self.token)
    }
}

/// Session persistence failures.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("token must not be empty")]
    EmptyToken,
    #[error("session storage error: {0}")]
    Storage(String),
    #[error("session encode error: {0}")]
    Encode(String),
}
