//! Build-time client configuration.
//!
//! The browser bundle has no runtime environment, so the backend location is
//! baked in when the WASM is compiled.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Backend used when `STAYBOOK_API_BASE` is not set at build time.
pub const DEFAULT_API_BASE: &str = "http://localhost:8080/api";

/// Base URL of the booking REST backend, without a trailing slash.
pub fn api_base_url() -> String {
    normalize_base_url(option_env!("STAYBOOK_API_BASE"))
}

fn normalize_base_url(raw: Option<&str>) -> String {
    let raw = raw.map(str::trim).filter(|s| !s.is_empty()).unwrap_or(DEFAULT_API_BASE);
    raw.trim_end_matches('/').to_owned()
}
