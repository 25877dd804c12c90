//! Hotel detail page: description, rooms, reviews, and the guest booking form.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page itself is public. The booking form is shown only to signed-in
//! guests, and the booking is attributed to the user id carried in the
//! session token.

#[cfg(test)]
#[path = "hotel_detail_test.rs"]
mod hotel_detail_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::hotel_card::rating_label;
use crate::components::review_list::ReviewList;
use crate::net::types::{BookingInput, Hotel, Review, Room};
use crate::pages::load_listing;
use crate::session::Role;
use crate::state::listing::Listing;
use crate::util::auth::use_session;
use crate::util::dates::{estimate_total, format_price, nights_between, parse_date};
use crate::util::forms;

/// Validate the booking form against the chosen room.
///
/// # Errors
///
/// Returns the message to show when the form cannot be submitted.
pub fn validate_booking_input(
    user_id: Option<&str>,
    room: Option<&Room>,
    check_in: &str,
    check_out: &str,
    guests: &str,
) -> Result<BookingInput, &'static str> {
    let user_id = user_id.filter(|id| !id.is_empty()).ok_or("Sign in as a guest to book.")?;
    let room = room.ok_or("Choose a room.")?;
    if !room.available {
        return Err("This room is not available.");
    }
    let start = parse_date(check_in).ok_or("Choose a check-in date.")?;
    let end = parse_date(check_out).ok_or("Choose a check-out date.")?;
    if nights_between(start, end).is_none() {
        return Err("Check-out must be after check-in.");
    }
    let guests = forms::positive_count(guests, "Guests must be at least 1.")?;
    if guests > room.capacity {
        return Err("Too many guests for this room.");
    }
    Ok(BookingInput {
        user_id: user_id.to_owned(),
        hotel_id: room.hotel_id.clone(),
        room_id: room.id.clone(),
        check_in: start.to_string(),
        check_out: end.to_string(),
        guests,
    })
}

/// Estimated total for the selected stay, once both dates form a valid range.
pub fn booking_estimate(room: &Room, check_in: &str, check_out: &str) -> Option<f64> {
    let nights = nights_between(parse_date(check_in)?, parse_date(check_out)?)?;
    Some(estimate_total(room.price_per_night, nights))
}

#[component]
pub fn HotelDetailPage() -> impl IntoView {
    let session = use_session();
    let auth = session.auth;
    let params = use_params_map();
    let hotel_id = move || params.with(|p| p.get("id")).unwrap_or_default();

    let hotel = RwSignal::new(None::<Hotel>);
    let hotel_error = RwSignal::new(None::<String>);
    let rooms = RwSignal::new(Listing::<Room>::default());
    let reviews = RwSignal::new(Listing::<Review>::default());

    let load_session = session;
    Effect::new(move || {
        let id = hotel_id();
        if id.is_empty() {
            return;
        }
        let session = load_session.clone();
        let api = session.api();
        hotel.set(None);
        hotel_error.set(None);

        let hotel_api = api.clone();
        let hotel_session = session.clone();
        let wanted = id.clone();
        leptos::task::spawn_local(async move {
            match hotel_api.get_hotel(&wanted).await {
                Ok(found) => {
                    let _ = hotel.try_set(Some(found));
                }
                Err(e) => {
                    let _ = hotel_error.try_set(Some(hotel_session.report(&e)));
                }
            }
        });

        let rooms_api = api.clone();
        let rooms_id = id.clone();
        load_listing(&session, rooms, async move { rooms_api.rooms_for_hotel(&rooms_id).await });
        load_listing(&session, reviews, async move { api.reviews_for_hotel(&id).await });
    });

    let is_guest = move || auth.with(|a| a.role() == Some(Role::Guest));

    view! {
        <div class="hotel-page">
            <Show when=move || hotel_error.get().is_some()>
                <p class="page__error">{move || hotel_error.get().unwrap_or_default()}</p>
            </Show>
            {move || {
                hotel
                    .get()
                    .map(|h| {
                        view! {
                            <header class="hotel-page__header">
                                <h1>{h.name}</h1>
                                <span class="hotel-page__location">{h.location}</span>
                                <span class="hotel-page__rating">{rating_label(h.rating)}</span>
                                <p class="hotel-page__description">{h.description}</p>
                            </header>
                        }
                    })
            }}
            <section class="hotel-page__rooms">
                <h2>"Rooms"</h2>
                <Show when=move || rooms.with(|l| l.error.is_some())>
                    <p class="page__error">{move || rooms.with(|l| l.error.clone().unwrap_or_default())}</p>
                </Show>
                {move || {
                    rooms.with(|l| {
                        if l.is_empty() && !l.loading {
                            return view! { <p>"No rooms listed."</p> }.into_any();
                        }
                        l.items
                            .iter()
                            .map(|room| {
                                let label = format!(
                                    "{} · {} / night · sleeps {}",
                                    room.room_type,
                                    format_price(room.price_per_night),
                                    room.capacity,
                                );
                                view! {
                                    <div class="room-row" class:room-row--unavailable={!room.available}>
                                        {label}
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()
                            .into_any()
                    })
                }}
            </section>
            <Show when=is_guest>
                <BookingForm rooms=rooms/>
            </Show>
            <section class="hotel-page__reviews">
                <h2>"Reviews"</h2>
                {move || reviews.with(|l| view! { <ReviewList reviews=l.items.clone()/> })}
            </section>
        </div>
    }
}

/// Room, date range, and guest count form for signed-in guests.
#[component]
fn BookingForm(rooms: RwSignal<Listing<Room>>) -> impl IntoView {
    let session = use_session();

    let room_id = RwSignal::new(String::new());
    let check_in = RwSignal::new(String::new());
    let check_out = RwSignal::new(String::new());
    let guests = RwSignal::new("1".to_owned());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let estimate = move || {
        let id = room_id.get();
        rooms.with(|l| {
            l.find(&id)
                .and_then(|room| booking_estimate(room, &check_in.get(), &check_out.get()))
                .map(format_price)
        })
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let user_id = session.auth.with_untracked(|a| a.user_id());
        let id = room_id.get_untracked();
        let checked = rooms.with_untracked(|l| {
            validate_booking_input(
                user_id.as_deref(),
                l.find(&id),
                &check_in.get_untracked(),
                &check_out.get_untracked(),
                &guests.get_untracked(),
            )
        });
        let input = match checked {
            Ok(input) => input,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Booking...".to_owned());

        let session = session.clone();
        leptos::task::spawn_local(async move {
            let message = match session.api().create_booking(&input).await {
                Ok(booking) => {
                    log::info!("created booking {}", booking.id);
                    format!("Booked! Reference {}.", booking.id)
                }
                Err(e) => format!("Booking failed: {}", session.report(&e)),
            };
            let _ = info.try_set(message);
            let _ = busy.try_set(false);
        });
    };

    let room_options = move || {
        rooms.with(|l| {
            l.items
                .iter()
                .filter(|r| r.available)
                .map(|r| {
                    let label = format!("{} ({})", r.room_type, format_price(r.price_per_night));
                    view! { <option value=r.id.clone()>{label}</option> }
                })
                .collect::<Vec<_>>()
        })
    };

    view! {
        <form class="booking-form" on:submit=on_submit>
            <h2>"Book a room"</h2>
            <select
                class="booking-form__input"
                prop:value=move || room_id.get()
                on:change=move |ev| room_id.set(event_target_value(&ev))
            >
                <option value="">"Choose a room"</option>
                {room_options}
            </select>
            <label class="booking-form__label">
                "Check-in"
                <input
                    class="booking-form__input"
                    type="date"
                    prop:value=move || check_in.get()
                    on:input=move |ev| check_in.set(event_target_value(&ev))
                />
            </label>
            <label class="booking-form__label">
                "Check-out"
                <input
                    class="booking-form__input"
                    type="date"
                    prop:value=move || check_out.get()
                    on:input=move |ev| check_out.set(event_target_value(&ev))
                />
            </label>
            <label class="booking-form__label">
                "Guests"
                <input
                    class="booking-form__input"
                    type="number"
                    min="1"
                    prop:value=move || guests.get()
                    on:input=move |ev| guests.set(event_target_value(&ev))
                />
            </label>
            <p class="booking-form__estimate">
                {move || estimate().map(|total| format!("Estimated total: {total}")).unwrap_or_default()}
            </p>
            <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                "Book"
            </button>
            <Show when=move || !info.get().is_empty()>
                <p class="booking-form__message">{move || info.get()}</p>
            </Show>
        </form>
    }
}
