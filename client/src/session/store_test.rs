use std::sync::Arc;

use super::*;
use crate::session::MemorySessionStorage;

fn store_with(raw: Option<&str>) -> SessionStore {
    let storage = match raw {
        Some(raw) => MemorySessionStorage::with_raw(raw),
        None => MemorySessionStorage::new(),
    };
    SessionStore::new(Arc::new(storage))
}

// =============================================================
// Round trip
// =============================================================

#[test]
fn set_then_get_returns_token_and_role() {
    let store = store_with(None);
    store.set_session("abc", Role::Manager).unwrap();
    assert_eq!(store.get_token().as_deref(), Some("abc"));
    assert_eq!(store.get_role(), Some(Role::Manager));
}

#[test]
fn set_overwrites_prior_session() {
    let store = store_with(None);
    store.set_session("first", Role::Admin).unwrap();
    store.set_session("second", Role::Guest).unwrap();
    assert_eq!(store.session(), Some(Session::new("second", Role::Guest)));
}

#[test]
fn set_rejects_blank_token() {
    let store = store_with(None);
    assert_eq!(store.set_session("   ", Role::Guest), Err(SessionError::EmptyToken));
    assert_eq!(store.session(), None);
}

#[test]
fn clones_share_the_same_backend() {
    let store = store_with(None);
    let other = store.clone();
    store.set_session("abc", Role::Guest).unwrap();
    assert_eq!(other.get_token().as_deref(), Some("abc"));
    other.clear_session();
    assert_eq!(store.get_token(), None);
}

// =============================================================
// Defensive reads
// =============================================================

#[test]
fn missing_key_reads_as_no_session() {
    let store = store_with(None);
    assert_eq!(store.get_token(), None);
    assert_eq!(store.get_role(), None);
}

#[test]
fn empty_string_reads_as_no_session() {
    let store = store_with(Some(""));
    assert_eq!(store.get_token(), None);
    assert_eq!(store.get_role(), None);
}

#[test]
fn malformed_json_reads_as_no_session() {
    for raw in ["{", "not json", "[]", "null", r#"{"token":"abc"}"#, r#"{"token":5,"role":"guest"}"#] {
        let store = store_with(Some(raw));
        assert_eq!(store.get_token(), None, "raw = {raw:?}");
        assert_eq!(store.get_role(), None, "raw = {raw:?}");
    }
}

#[test]
fn unknown_role_reads_as_no_session() {
    let store = store_with(Some(r#"{"token":"abc","role":"superuser"}"#));
    assert_eq!(store.session(), None);
}

#[test]
fn blank_stored_token_reads_as_no_session() {
    let store = store_with(Some(r#"{"token":"  ","role":"guest"}"#));
    assert_eq!(store.session(), None);
}

// =============================================================
// Logout and claims
// =============================================================

#[test]
fn clear_session_removes_token_and_role() {
    let store = store_with(None);
    store.set_session("abc", Role::Guest).unwrap();
    store.clear_session();
    assert_eq!(store.get_token(), None);
    assert_eq!(store.get_role(), None);
}

#[test]
fn user_id_comes_from_token_claims() {
    use base64::Engine as _;
    let payload = base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(r#"{"id":"guest-9"}"#);
    let store = store_with(None);
    store.set_session(&format!("h.{payload}.s"), Role::Guest).unwrap();
    assert_eq!(store.user_id().as_deref(), Some("guest-9"));
}

#[test]
fn opaque_token_has_no_user_id() {
    let store = store_with(None);
    store.set_session("abc", Role::Guest).unwrap();
    assert_eq!(store.user_id(), None);
}
