//! User roles recognized by the front end.
//!
//! TRUST
//! =====
//! The role is picked by the user on the login form and stored next to the
//! token. It only drives which views are reachable; the backend remains the
//! authority on what a token may actually do.

#[cfg(test)]
#[path = "role_test.rs"]
mod role_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A login role.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Guest,
    Manager,
    Admin,
}

impl Role {
    /// Every role, in the order shown by role pickers.
    pub const ALL: [Role; 3] = [Role::Guest, Role::Manager, Role::Admin];

    /// Wire and storage representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Guest => "guest",
            Role::Manager => "manager",
            Role::Admin => "admin",
        }
    }

    /// Human-readable label for pickers and the navbar.
    pub fn label(self) -> &'static str {
        match self {
            Role::Guest => "Guest",
            Role::Manager => "Hotel manager",
            Role::Admin => "Administrator",
        }
    }

    /// Landing route after a successful login.
    pub fn dashboard_path(self) -> &'static str {
        match self {
            Role::Guest => "/guest",
            Role::Manager => "/manager",
            Role::Admin => "/admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string does not name a known role.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown role: {0}")]
pub struct UnknownRole(pub String);

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "guest" | "user" => Ok(Role::Guest),
            "manager" => Ok(Role::Manager),
            "admin" => Ok(Role::Admin),
            _ => Err(UnknownRole(raw.to_owned())),
        }
    }
}
