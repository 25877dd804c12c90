//! Profile page: view and update the signed-in user's name and email.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use leptos::prelude::*;

use crate::net::types::{User, UserUpdate};
use crate::util::auth::use_session;
use crate::util::forms;

/// Validate the profile form.
///
/// # Errors
///
/// Returns the message to show for the first invalid field.
pub fn validate_profile_input(name: &str, email: &str) -> Result<UserUpdate, &'static str> {
    let name = forms::required(name, "Enter your name.")?;
    let email = forms::email(email)?;
    Ok(UserUpdate { name, email })
}

/// Whether the form differs from the loaded profile.
pub fn profile_changed(user: &User, update: &UserUpdate) -> bool {
    user.name != update.name || user.email != update.email
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = use_session();
    let auth = session.auth;

    let user = RwSignal::new(None::<User>);
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let load_session = session.clone();
    Effect::new(move || {
        let Some(user_id) = auth.with(|a| a.user_id()) else {
            info.set("Your session has no user id. Sign in again.".to_owned());
            return;
        };
        let session = load_session.clone();
        leptos::task::spawn_local(async move {
            match session.api().get_user(&user_id).await {
                Ok(found) => {
                    let _ = name.try_set(found.name.clone());
                    let _ = email.try_set(found.email.clone());
                    let _ = user.try_set(Some(found));
                }
                Err(e) => {
                    let _ = info.try_set(format!("Could not load profile: {}", session.report(&e)));
                }
            }
        });
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let Some(current) = user.get_untracked() else {
            return;
        };
        let update = match validate_profile_input(&name.get_untracked(), &email.get_untracked()) {
            Ok(update) => update,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        if !profile_changed(&current, &update) {
            info.set("Nothing to update.".to_owned());
            return;
        }
        busy.set(true);

        let session = session.clone();
        leptos::task::spawn_local(async move {
            match session.api().update_user(&current.id, &update).await {
                Ok(saved) => {
                    log::info!("updated profile {}", saved.id);
                    let _ = user.try_set(Some(saved));
                    let _ = info.try_set("Profile updated.".to_owned());
                }
                Err(e) => {
                    let _ = info.try_set(format!("Update failed: {}", session.report(&e)));
                }
            }
            let _ = busy.try_set(false);
        });
    };

    view! {
        <div class="profile-page">
            <h1>"Your profile"</h1>
            <p class="profile-page__role">
                {move || auth.get().role().map(|r| format!("Signed in as {}", r.label())).unwrap_or_default()}
            </p>
            <form class="profile-form" on:submit=on_submit>
                <label class="profile-form__label">
                    "Name"
                    <input
                        class="profile-form__input"
                        type="text"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                </label>
                <label class="profile-form__label">
                    "Email"
                    <input
                        class="profile-form__input"
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <button
                    class="btn btn--primary"
                    type="submit"
                    disabled=move || busy.get() || user.with(Option::is_none)
                >
                    "Save"
                </button>
            </form>
            <Show when=move || !info.get().is_empty()>
                <p class="profile-page__message">{move || info.get()}</p>
            </Show>
        </div>
    }
}
