//! Role-based route guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected route wraps its page in [`ProtectedRoute`]. The decision
//! itself is the pure [`evaluate`] predicate over the role read back from
//! `SessionStore` on each evaluation, so a session cleared in another tab or
//! by hand is noticed on the next protected navigation.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::session::{Role, Session};
use crate::state::auth::AuthState;
use crate::util::auth::use_session;

pub const LOGIN_PATH: &str = "/login";
pub const HOME_PATH: &str = "/";

pub const GUEST_ONLY: &[Role] = &[Role::Guest];
pub const MANAGER_ONLY: &[Role] = &[Role::Manager];
pub const ADMIN_ONLY: &[Role] = &[Role::Admin];
pub const ANY_ROLE: &[Role] = &Role::ALL;

/// Outcome of checking a stored role against a route's allowed roles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Render,
    RedirectLogin,
    RedirectHome,
}

impl GuardDecision {
    /// Redirect target, or `None` when the view should render.
    pub fn redirect_path(self) -> Option<&'static str> {
        match self {
            GuardDecision::Render => None,
            GuardDecision::RedirectLogin => Some(LOGIN_PATH),
            GuardDecision::RedirectHome => Some(HOME_PATH),
        }
    }
}

/// Decide whether a view guarded by `allowed` may render for `role`.
pub fn evaluate(role: Option<Role>, allowed: &[Role]) -> GuardDecision {
    match role {
        None => GuardDecision::RedirectLogin,
        Some(role) if allowed.contains(&role) => GuardDecision::Render,
        Some(_) => GuardDecision::RedirectHome,
    }
}

/// Decision for the current auth state, or `None` while the stored session
/// has not been read yet. `stored` is what `SessionStore` holds right now.
pub fn check(state: &AuthState, stored: Option<&Session>, allowed: &[Role]) -> Option<GuardDecision> {
    if state.loading {
        return None;
    }
    Some(evaluate(stored.map(|s| s.role), allowed))
}

/// Render `children` only for sessions whose role is in `allowed`.
///
/// While the stored session has not been read yet (server render, first
/// hydrate tick) a placeholder is shown instead of redirecting.
#[component]
pub fn ProtectedRoute(allowed: &'static [Role], children: ChildrenFn) -> impl IntoView {
    let session = use_session();
    let auth = session.auth;

    // Storage may have changed behind this app instance; bring AuthState in line.
    let sync_store = session.store.clone();
    Effect::new(move || {
        let stored = sync_store.session();
        if let Some(next) = auth.with(|state| state.synced_with(stored)) {
            log::info!("stored session changed outside the app");
            auth.set(next);
        }
    });

    let store = session.store;
    move || {
        let stored = store.session();
        match auth.with(|state| check(state, stored.as_ref(), allowed)) {
            None => view! { <p class="guard__pending">"Loading..."</p> }.into_any(),
            Some(GuardDecision::Render) => children().into_any(),
            Some(decision) => {
                let path = decision.redirect_path().unwrap_or(LOGIN_PATH);
                log::debug!("guard redirect to {path}");
                view! { <Redirect path=path/> }.into_any()
            }
        }
    }
}
