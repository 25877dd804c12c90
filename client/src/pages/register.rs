//! Account registration page.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::guard::LOGIN_PATH;
use crate::net::api::ApiClient;
use crate::net::types::RegisterRequest;
use crate::session::Role;
use crate::util::forms;

pub const MIN_PASSWORD_LEN: usize = 6;

/// Validate registration form input into a request payload.
///
/// # Errors
///
/// Returns the message to show for the first invalid field.
pub fn validate_register_input(
    name: &str,
    email: &str,
    password: &str,
    confirm: &str,
    role: &str,
) -> Result<RegisterRequest, &'static str> {
    let name = forms::required(name, "Enter your name.")?;
    let email = forms::email(email)?;
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 6 characters.");
    }
    if password != confirm {
        return Err("Passwords do not match.");
    }
    let role = role.parse::<Role>().map_err(|_| "Choose a role.")?;
    Ok(RegisterRequest { name, email, password: password.to_owned(), role })
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let navigate = use_navigate();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let role = RwSignal::new(Role::Guest.as_str().to_owned());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let registered = RwSignal::new(false);

    Effect::new(move || {
        if registered.get() {
            navigate(LOGIN_PATH, NavigateOptions::default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let request = match validate_register_input(
            &name.get_untracked(),
            &email.get_untracked(),
            &password.get_untracked(),
            &confirm.get_untracked(),
            &role.get_untracked(),
        ) {
            Ok(request) => request,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Creating account...".to_owned());

        leptos::task::spawn_local(async move {
            let api = ApiClient::new(crate::config::api_base_url(), None);
            match api.register(&request).await {
                Ok(()) => {
                    log::info!("registered {} account", request.role);
                    let _ = registered.try_set(true);
                }
                Err(e) => {
                    let _ = info.try_set(format!("Registration failed: {e}"));
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
                <h1>"Create an account"</h1>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="Full name"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
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
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Confirm password"
                        prop:value=move || confirm.get()
                        on:input=move |ev| confirm.set(event_target_value(&ev))
                    />
                    <label class="login-label">
                        "Account type"
                        <select
                            class="login-input"
                            prop:value=move || role.get()
                            on:change=move |ev| role.set(event_target_value(&ev))
                        >
                            {role_options}
                        </select>
                    </label>
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Register"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <p class="login-card__footer">
                    "Already registered? " <A href="/login">"Sign in"</A>
                </p>
            </div>
        </div>
    }
}
