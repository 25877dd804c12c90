//! Top navigation bar with role-dependent links and logout.
//!
//! SYSTEM CONTEXT
//! ==============
//! Links only reflect what the stored role may open; the route guard still
//! enforces access when a link is followed.

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::guard::LOGIN_PATH;
use crate::session::Role;
use crate::util::auth::use_session;

/// Navigation entries as `(href, label)` pairs for the given role.
pub fn nav_links(role: Option<Role>) -> Vec<(&'static str, &'static str)> {
    let mut links = vec![("/", "Hotels")];
    match role {
        None => {
            links.push(("/login", "Log in"));
            links.push(("/register", "Register"));
        }
        Some(role) => {
            let dashboard = match role {
                Role::Guest => "My bookings",
                Role::Manager => "My hotels",
                Role::Admin => "Admin",
            };
            links.push((role.dashboard_path(), dashboard));
            links.push(("/profile", "Profile"));
        }
    }
    links
}

#[component]
pub fn Navbar() -> impl IntoView {
    let session = use_session();
    let auth = session.auth;
    let navigate = use_navigate();
    let logged_out = RwSignal::new(false);

    Effect::new(move || {
        if logged_out.get() {
            logged_out.set(false);
            navigate(LOGIN_PATH, NavigateOptions::default());
        }
    });

    let on_logout = move |_| {
        session.logout();
        logged_out.set(true);
    };

    view! {
        <header class="navbar">
            <A href="/" attr:class="navbar__brand">"Staybook"</A>
            <nav class="navbar__links">
                {move || {
                    nav_links(auth.get().role())
                        .into_iter()
                        .map(|(href, label)| view! { <A href=href attr:class="navbar__link">{label}</A> })
                        .collect::<Vec<_>>()
                }}
            </nav>
            <span class="navbar__spacer"></span>
            <Show when=move || auth.get().is_authenticated()>
                <span class="navbar__role">{move || auth.get().role().map(Role::label).unwrap_or_default()}</span>
                <button class="btn navbar__logout" on:click=on_logout.clone() title="Log out">
                    "Log out"
                </button>
            </Show>
        </header>
    }
}
