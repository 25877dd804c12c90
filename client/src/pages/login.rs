//! Login page: email, password, and the role to sign in as.
//!
//! SYSTEM CONTEXT
//! ==============
//! A successful login stores `{token, role}` and sends the user to the
//! role's dashboard. The role is whatever the user picked here.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::net::api::ApiClient;
use crate::net::types::LoginRequest;
use crate::session::Role;
use crate::state::auth::AuthState;
use crate::util::auth::use_session;
use crate::util::forms;

/// Validate login form input into a request payload.
///
/// # Errors
///
/// Returns the message to show when a field is missing or malformed.
pub fn validate_login_input(email: &str, password: &str, role: &str) -> Result<LoginRequest, &'static str> {
    let email = forms::email(email)?;
    if password.is_empty() {
        return Err("Enter your password.");
    }
    let role = role.parse::<Role>().map_err(|_| "Choose a role.")?;
    Ok(LoginRequest { email, password: password.to_owned(), role })
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let role = RwSignal::new(Role::Guest.as_str().to_owned());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let landed = RwSignal::new(None::<&'static str>);

    Effect::new(move || {
        if let Some(path) = landed.get() {
            navigate(path, NavigateOptions::default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let request = match validate_login_input(&email.get_untracked(), &password.get_untracked(), &role.get_untracked()) {
            Ok(request) => request,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Signing in...".to_owned());

        let session = session.clone();
        leptos::task::spawn_local(async move {
            let api = ApiClient::new(crate::config::api_base_url(), None);
            let stored = match api.login(&request).await {
                Ok(token) => session.store.set_session(&token, request.role).map_err(|e| e.to_string()),
                Err(e) => Err(e.to_string()),
            };
            match stored {
                Ok(new_session) => {
                    log::info!("signed in as {}", request.role);
                    session.auth.set(AuthState::loaded(Some(new_session)));
                    let _ = landed.try_set(Some(request.role.dashboard_path()));
                }
                Err(e) => {
                    let _ = info.try_set(format!("Login failed: {e}"));
                    let _ = busy.try_set(false);
                }
            }
        });
    };

    let role_options = Role::ALL
        .into_iter()
        .map(|r| view! { <option value=r.as_str()>{r.label()}</option> })
        .collect::<Vec<_>>();

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Sign in"</h1>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <label class="login-label">
                        "Sign in as"
                        <select
                            class="login-input"
                            prop:value=move || role.get()
                            on:change=move |ev| role.set(event_target_value(&ev))
                        >
                            {role_options}
                        </select>
                    </label>
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Sign in"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <p class="login-card__footer">
                    "No account? " <A href="/register">"Register"</A>
                </p>
            </div>
        </div>
    }
}
