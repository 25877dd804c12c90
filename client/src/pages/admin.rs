//! Admin dashboard: every user, hotel, and booking, with delete actions.

#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

use leptos::prelude::*;

use crate::components::booking_table::BookingTable;
use crate::components::hotel_card::hotel_href;
use crate::net::types::{Booking, Hotel, User};
use crate::pages::load_listing;
use crate::state::listing::Listing;
use crate::util::auth::{SessionContext, use_session};

/// Admin dashboard sections.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AdminTab {
    #[default]
    Users,
    Hotels,
    Bookings,
}

impl AdminTab {
    pub const ALL: [AdminTab; 3] = [AdminTab::Users, AdminTab::Hotels, AdminTab::Bookings];

    pub fn label(self) -> &'static str {
        match self {
            AdminTab::Users => "Users",
            AdminTab::Hotels => "Hotels",
            AdminTab::Bookings => "Bookings",
        }
    }
}

/// Whether the signed-in admin may delete the account `target_id`.
/// Deleting your own account from this screen is refused.
pub fn can_delete_user(self_id: Option<&str>, target_id: &str) -> bool {
    self_id != Some(target_id)
}

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let session = use_session();
    let auth = session.auth;
    let tab = RwSignal::new(AdminTab::default());
    let users = RwSignal::new(Listing::<User>::default());
    let hotels = RwSignal::new(Listing::<Hotel>::default());
    let bookings = RwSignal::new(Listing::<Booking>::default());
    let notice = RwSignal::new(String::new());

    let load_session = session.clone();
    Effect::new(move || {
        let api = load_session.api();
        match tab.get() {
            AdminTab::Users => load_listing(&load_session, users, async move { api.list_users().await }),
            AdminTab::Hotels => load_listing(&load_session, hotels, async move { api.list_hotels().await }),
            AdminTab::Bookings => load_listing(&load_session, bookings, async move { api.list_bookings().await }),
        }
    });

    let user_session = session.clone();
    let on_delete_user = Callback::new(move |id: String| {
        let session = user_session.clone();
        notice.set(String::new());
        leptos::task::spawn_local(async move {
            let result = session.api().delete_user(&id).await;
            finish_delete(&session, notice, result, "user", &id, || {
                let _ = users.try_update(|l| l.remove(&id));
            });
        });
    });

    let on_delete_hotel = Callback::new(move |id: String| {
        let session = session.clone();
        notice.set(String::new());
        leptos::task::spawn_local(async move {
            let result = session.api().delete_hotel(&id).await;
            finish_delete(&session, notice, result, "hotel", &id, || {
                let _ = hotels.try_update(|l| l.remove(&id));
            });
        });
    });

    let self_id = move || auth.with(|a| a.user_id());

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>"Administration"</h1>
                <nav class="tabs">
                    {AdminTab::ALL
                        .into_iter()
                        .map(|t| {
                            view! {
                                <button
                                    class="tabs__tab"
                                    class:tabs__tab--active=move || tab.get() == t
                                    on:click=move |_| tab.set(t)
                                >
                                    {t.label()}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()}
                </nav>
            </header>
            <Show when=move || !notice.get().is_empty()>
                <p class="dashboard-page__notice">{move || notice.get()}</p>
            </Show>
            {move || match tab.get() {
                AdminTab::Users => view! { <UsersTable users=users self_id=self_id() on_delete=on_delete_user/> }.into_any(),
                AdminTab::Hotels => view! { <HotelsTable hotels=hotels on_delete=on_delete_hotel/> }.into_any(),
                AdminTab::Bookings => {
                    view! {
                        <section>
                            <ListingStatus loading=Signal::derive(move || bookings.with(|l| l.loading)) error=Signal::derive(move || bookings.with(|l| l.error.clone()))/>
                            {move || view! { <BookingTable bookings=bookings.get().items show_user=true/> }}
                        </section>
                    }
                    .into_any()
                }
            }}
        </div>
    }
}

fn finish_delete(
    session: &SessionContext,
    notice: RwSignal<String>,
    result: Result<(), crate::net::api::ApiError>,
    kind: &str,
    id: &str,
    on_success: impl FnOnce(),
) {
    match result {
        Ok(()) => {
            log::info!("deleted {kind} {id}");
            on_success();
            let _ = notice.try_set(format!("Deleted {kind} {id}."));
        }
        Err(e) => {
            let _ = notice.try_set(format!("Delete failed: {}", session.report(&e)));
        }
    }
}

#[component]
fn ListingStatus(loading: Signal<bool>, error: Signal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || loading.get()>
            <p>"Loading..."</p>
        </Show>
        <Show when=move || error.get().is_some()>
            <p class="page__error">{move || error.get().unwrap_or_default()}</p>
        </Show>
    }
}

#[component]
fn UsersTable(users: RwSignal<Listing<User>>, self_id: Option<String>, on_delete: Callback<String>) -> impl IntoView {
    let rows = move || {
        users
            .get()
            .items
            .into_iter()
            .map(|user| {
                let deletable = can_delete_user(self_id.as_deref(), &user.id);
                let id = user.id.clone();
                let role = user.role.map(|r| r.label()).unwrap_or("-");
                view! {
                    <tr>
                        <td>{user.id}</td>
                        <td>{user.name}</td>
                        <td>{user.email}</td>
                        <td>{role}</td>
                        <td>
                            {deletable
                                .then(|| {
                                    view! {
                                        <button class="btn btn--danger" on:click=move |_| on_delete.run(id.clone())>
                                            "Delete"
                                        </button>
                                    }
                                })}
                        </td>
                    </tr>
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <section>
            <ListingStatus loading=Signal::derive(move || users.with(|l| l.loading)) error=Signal::derive(move || users.with(|l| l.error.clone()))/>
            <table class="admin-table">
                <thead>
                    <tr>
                        <th>"Id"</th>
                        <th>"Name"</th>
                        <th>"Email"</th>
                        <th>"Role"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
        </section>
    }
}

#[component]
fn HotelsTable(hotels: RwSignal<Listing<Hotel>>, on_delete: Callback<String>) -> impl IntoView {
    let rows = move || {
        hotels
            .get()
            .items
            .into_iter()
            .map(|hotel| {
                let id = hotel.id.clone();
                view! {
                    <tr>
                        <td><a href=hotel_href(&hotel.id)>{hotel.name}</a></td>
                        <td>{hotel.location}</td>
                        <td>{hotel.manager_id.unwrap_or_default()}</td>
                        <td>
                            <button class="btn btn--danger" on:click=move |_| on_delete.run(id.clone())>
                                "Delete"
                            </button>
                        </td>
                    </tr>
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <section>
            <ListingStatus loading=Signal::derive(move || hotels.with(|l| l.loading)) error=Signal::derive(move || hotels.with(|l| l.error.clone()))/>
            <table class="admin-table">
                <thead>
                    <tr>
                        <th>"Hotel"</th>
                        <th>"Location"</th>
                        <th>"Manager"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
        </section>
    }
}
