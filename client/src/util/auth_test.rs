use std::sync::Arc;

use super::*;
use crate::session::{MemorySessionStorage, Role};

fn signed_in_store() -> SessionStore {
    let store = SessionStore::new(Arc::new(MemorySessionStorage::new()));
    store.set_session("abc", Role::Guest).unwrap();
    store
}

#[test]
fn unauthorized_response_clears_session() {
    let store = signed_in_store();
    let err = ApiError::Status { status: 401, message: "jwt expired".to_owned() };
    assert!(expire_on_auth_failure(&err, &store));
    assert_eq!(store.get_token(), None);
    assert_eq!(store.get_role(), None);
}

#[test]
fn forbidden_response_clears_session() {
    let store = signed_in_store();
    let err = ApiError::Status { status: 403, message: "forbidden".to_owned() };
    assert!(expire_on_auth_failure(&err, &store));
    assert_eq!(store.session(), None);
}

#[test]
fn other_failures_keep_session() {
    let store = signed_in_store();
    for err in [
        ApiError::Status { status: 500, message: "boom".to_owned() },
        ApiError::Network("offline".to_owned()),
        ApiError::Decode("bad json".to_owned()),
    ] {
        assert!(!expire_on_auth_failure(&err, &store));
    }
    assert_eq!(store.get_token().as_deref(), Some("abc"));
}

#[test]
fn missing_token_clears_session() {
    let store = signed_in_store();
    assert!(expire_on_auth_failure(&ApiError::MissingSession, &store));
    assert_eq!(store.session(), None);
}
