//! Shared client state provided through Leptos context.
//!
//! DESIGN
//! ======
//! `auth` mirrors the stored session for reactive consumers; `listing` is the
//! generic fetched-collection state every list view patches after mutations.

pub mod auth;
pub mod listing;
