//! Host configuration parsed from environment variables.

use std::net::SocketAddr;

pub const DEFAULT_ADDR: &str = "0.0.0.0:3000";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid STAYBOOK_ADDR '{value}': {source}")]
    InvalidAddr {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub addr: SocketAddr,
    /// Directory holding the compiled `pkg/` assets. Falls back to the
    /// `site-root` from the Leptos package metadata.
    pub site_root: Option<String>,
}

impl Config {
    /// Build host config from environment variables.
    ///
    /// Optional:
    /// - `STAYBOOK_ADDR`: listen address, default `0.0.0.0:3000`
    /// - `STAYBOOK_SITE_ROOT`: asset directory override
    ///
    /// # Errors
    ///
    /// Returns an error if `STAYBOOK_ADDR` is not a socket address.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build host config from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns an error if `STAYBOOK_ADDR` is not a socket address.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let addr = parse_addr(non_blank(lookup("STAYBOOK_ADDR")).as_deref())?;
        let site_root = non_blank(lookup("STAYBOOK_SITE_ROOT"));
        Ok(Self { addr, site_root })
    }
}

fn non_blank(raw: Option<String>) -> Option<String> {
    raw.map(|v| v.trim().to_owned()).filter(|v| !v.is_empty())
}

fn parse_addr(raw: Option<&str>) -> Result<SocketAddr, ConfigError> {
    let value = raw.unwrap_or(DEFAULT_ADDR);
    value
        .parse()
        .map_err(|source| ConfigError::InvalidAddr { value: value.to_owned(), source })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
