//! Unverified decoding of bearer-token claims.
//!
//! The browser never holds the signing key, so the payload segment is read
//! only to learn which user the token was issued for. Nothing here should be
//! treated as proof of identity.

#[cfg(test)]
#[path = "claims_test.rs"]
mod claims_test;

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde_json::Value;

/// Claim names that may carry the user identifier, in lookup order.
const USER_ID_CLAIMS: [&str; 4] = ["id", "userId", "user_id", "sub"];

/// Decode the JSON payload of a compact JWT (`header.payload.signature`).
///
/// Returns `None` for anything that is not three dot-separated segments with
/// a base64url-encoded JSON object in the middle.
pub fn decode_payload(token: &str) -> Option<serde_json::Map<String, Value>> {
    let mut segments = token.split('.');
    let (Some(_header), Some(payload), Some(_signature), None) =
        (segments.next(), segments.next(), segments.next(), segments.next())
    else {
        return None;
    };
    let bytes = URL_SAFE_NO_PAD.decode(payload.trim_end_matches('=')).ok()?;
    match serde_json::from_slice::<Value>(&bytes).ok()? {
        Value::Object(map) => Some(map),
        _ => None,
    }
}

/// Extract the user identifier from a token, normalized to a string.
pub fn user_id(token: &str) -> Option<String> {
    let claims = decode_payload(token)?;
    USER_ID_CLAIMS.iter().find_map(|name| match claims.get(*name)? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}
