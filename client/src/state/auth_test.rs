use super::*;

#[test]
fn default_is_loading_without_session() {
    let state = AuthState::default();
    assert!(state.loading);
    assert!(!state.is_authenticated());
    assert_eq!(state.role(), None);
}

#[test]
fn loaded_clears_loading_flag() {
    let state = AuthState::loaded(None);
    assert!(!state.loading);
    assert!(!state.is_authenticated());
}

#[test]
fn role_follows_session() {
    let state = AuthState::loaded(Some(Session::new("abc", Role::Admin)));
    assert!(state.is_authenticated());
    assert_eq!(state.role(), Some(Role::Admin));
}

#[test]
fn user_id_is_none_for_opaque_token() {
    let state = AuthState::loaded(Some(Session::new("abc", Role::Guest)));
    assert_eq!(state.user_id(), None);
}

#[test]
fn synced_with_replaces_stale_session() {
    let state = AuthState::loaded(Some(Session::new("abc", Role::Guest)));
    assert_eq!(state.synced_with(None), Some(AuthState::loaded(None)));

    let manager = Session::new("xyz", Role::Manager);
    assert_eq!(state.synced_with(Some(manager.clone())), Some(AuthState::loaded(Some(manager))));
}

#[test]
fn synced_with_is_none_when_unchanged_or_loading() {
    let session = Session::new("abc", Role::Guest);
    let state = AuthState::loaded(Some(session.clone()));
    assert_eq!(state.synced_with(Some(session.clone())), None);
    assert_eq!(AuthState::default().synced_with(Some(session)), None);
}
