//! Card component for hotel list items.
//!
//! DESIGN
//! ======
//! Shared by the public browse list and the manager dashboard so a hotel is
//! presented the same way wherever it is listed.

#[cfg(test)]
#[path = "hotel_card_test.rs"]
mod hotel_card_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::net::types::Hotel;

pub fn hotel_href(hotel_id: &str) -> String {
    format!("/hotels/{hotel_id}")
}

/// One-decimal star rating, or a placeholder for unrated hotels.
pub fn rating_label(rating: Option<f64>) -> String {
    match rating {
        Some(r) if r.is_finite() && r > 0.0 => format!("★ {r:.1}"),
        _ => "No ratings yet".to_owned(),
    }
}

/// A clickable card representing a hotel.
#[component]
pub fn HotelCard(
    hotel: Hotel,
    #[prop(optional)] selected: bool,
    #[prop(optional)] on_select: Option<Callback<String>>,
) -> impl IntoView {
    let href = hotel_href(&hotel.id);
    let amenities = hotel.amenities.join(" · ");
    let id = hotel.id.clone();

    view! {
        <article class="hotel-card" class:hotel-card--selected=selected>
            <A href=href attr:class="hotel-card__name">{hotel.name}</A>
            <span class="hotel-card__location">{hotel.location}</span>
            <span class="hotel-card__rating">{rating_label(hotel.rating)}</span>
            {(!amenities.is_empty()).then(|| view! { <span class="hotel-card__amenities">{amenities}</span> })}
            {on_select.map(|on_select| {
                view! {
                    <button class="btn hotel-card__select" on:click=move |_| on_select.run(id.clone())>
                        "Manage"
                    </button>
                }
            })}
        </article>
    }
}
