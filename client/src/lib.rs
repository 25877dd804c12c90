//! # client
//!
//! Leptos + WASM frontend for the Staybook hotel booking site.
//!
//! This crate contains the session store, the role route guard, the REST
//! client for the booking backend, and the pages and components built on
//! them. The `ssr` feature compiles it for server rendering inside the
//! `staybook` host; the `hydrate` feature builds the browser bundle.

pub mod app;
pub mod components;
pub mod config;
pub mod guard;
pub mod net;
pub mod pages;
pub mod session;
pub mod state;
pub mod util;

/// Browser entry point: install logging and hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
