//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Form input is checked by a pure `validate_*` function per
//! page before any request is sent.

pub mod admin;
pub mod guest;
pub mod home;
pub mod hotel_detail;
pub mod login;
pub mod manager;
pub mod profile;
pub mod register;

use std::future::Future;

use leptos::prelude::*;

use crate::net::api::ApiError;
use crate::state::listing::Listing;
use crate::util::auth::SessionContext;

/// Run `fetch` and apply its result to `listing`.
///
/// Failures are reported through the session so a rejected token logs the
/// user out. Results arriving after the page unmounted are dropped.
pub(crate) fn load_listing<T, F>(session: &SessionContext, listing: RwSignal<Listing<T>>, fetch: F)
where
    T: Send + Sync + 'static,
    F: Future<Output = Result<Vec<T>, ApiError>> + 'static,
{
    listing.update(Listing::begin);
    let session = session.clone();
    leptos::task::spawn_local(async move {
        let result = fetch.await;
        if let Err(e) = &result {
            session.report(e);
        }
        let _ = listing.try_update(|l| l.finish(result));
    });
}
