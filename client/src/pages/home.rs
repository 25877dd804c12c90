//! Public hotel browse page.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;

use crate::components::hotel_card::HotelCard;
use crate::net::types::Hotel;
use crate::pages::load_listing;
use crate::state::listing::Listing;
use crate::util::auth::use_session;

/// Hotels whose name, location, or amenities contain `query`,
/// case-insensitively. A blank query keeps every hotel.
pub fn filter_hotels(hotels: &[Hotel], query: &str) -> Vec<Hotel> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return hotels.to_vec();
    }
    hotels
        .iter()
        .filter(|h| {
            h.name.to_lowercase().contains(&needle)
                || h.location.to_lowercase().contains(&needle)
                || h.amenities.iter().any(|a| a.to_lowercase().contains(&needle))
        })
        .cloned()
        .collect()
}

#[component]
pub fn HomePage() -> impl IntoView {
    let session = use_session();
    let hotels = RwSignal::new(Listing::<Hotel>::default());
    let query = RwSignal::new(String::new());

    Effect::new(move || {
        let api = session.api();
        load_listing(&session, hotels, async move { api.list_hotels().await });
    });

    let visible = move || hotels.with(|l| filter_hotels(&l.items, &query.get()));

    view! {
        <div class="home-page">
            <header class="home-page__header">
                <h1>"Find a stay"</h1>
                <input
                    class="home-page__search"
                    type="search"
                    placeholder="Search by name, city, or amenity"
                    prop:value=move || query.get()
                    on:input=move |ev| query.set(event_target_value(&ev))
                />
            </header>
            <Show when=move || hotels.with(|l| l.error.is_some())>
                <p class="page__error">{move || hotels.with(|l| l.error.clone().unwrap_or_default())}</p>
            </Show>
            <Show
                when=move || !hotels.with(|l| l.loading)
                fallback=move || view! { <p>"Loading hotels..."</p> }
            >
                <div class="home-page__grid">
                    {move || {
                        let list = visible();
                        if list.is_empty() {
                            return view! { <p class="home-page__empty">"No hotels match."</p> }.into_any();
                        }
                        list.into_iter()
                            .map(|hotel| view! { <HotelCard hotel=hotel/> })
                            .collect::<Vec<_>>()
                            .into_any()
                    }}
                </div>
            </Show>
        </div>
    }
}
