//! Guest dashboard: own bookings with cancellation, and reviews for hotels
//! the guest has stayed at.

#[cfg(test)]
#[path = "guest_test.rs"]
mod guest_test;

use leptos::prelude::*;

use crate::components::booking_table::BookingTable;
use crate::net::types::{Booking, BookingStatus, Hotel, ReviewInput};
use crate::pages::load_listing;
use crate::state::listing::Listing;
use crate::util::auth::use_session;
use crate::util::forms;

pub const MAX_COMMENT_LEN: usize = 1000;

/// Hotels the guest may review: those with at least one booking that was not
/// cancelled, in first-booked order without duplicates.
pub fn reviewable_hotels(bookings: &[Booking]) -> Vec<String> {
    let mut ids: Vec<String> = Vec::new();
    for booking in bookings {
        if booking.status == BookingStatus::Cancelled || ids.contains(&booking.hotel_id) {
            continue;
        }
        ids.push(booking.hotel_id.clone());
    }
    ids
}

/// Validate the review form.
///
/// # Errors
///
/// Returns the message to show for the first invalid field.
pub fn validate_review_input(
    user_id: Option<&str>,
    hotel_id: &str,
    rating: &str,
    comment: &str,
) -> Result<ReviewInput, &'static str> {
    let user_id = user_id.filter(|id| !id.is_empty()).ok_or("Your session has no user id. Sign in again.")?;
    let hotel_id = forms::required(hotel_id, "Choose a hotel.")?;
    let rating = forms::rating(rating)?;
    let comment = forms::required(comment, "Write a short comment.")?;
    if comment.chars().count() > MAX_COMMENT_LEN {
        return Err("Comments are limited to 1000 characters.");
    }
    Ok(ReviewInput { hotel_id, user_id: user_id.to_owned(), rating, comment })
}

#[component]
pub fn GuestDashboardPage() -> impl IntoView {
    let session = use_session();
    let auth = session.auth;
    let bookings = RwSignal::new(Listing::<Booking>::default());
    let hotels = RwSignal::new(Listing::<Hotel>::default());
    let notice = RwSignal::new(String::new());

    let load_session = session.clone();
    Effect::new(move || {
        let Some(user_id) = auth.with(|a| a.user_id()) else {
            bookings.update(|l| l.error = Some("Your session has no user id. Sign in again.".to_owned()));
            return;
        };
        let api = load_session.api();
        let hotels_api = api.clone();
        load_listing(&load_session, bookings, async move { api.bookings_for_user(&user_id).await });
        load_listing(&load_session, hotels, async move { hotels_api.list_hotels().await });
    });

    let cancel_session = session;
    let on_cancel = Callback::new(move |booking_id: String| {
        let session = cancel_session.clone();
        notice.set(String::new());
        leptos::task::spawn_local(async move {
            match session.api().cancel_booking(&booking_id).await {
                Ok(()) => {
                    log::info!("cancelled booking {booking_id}");
                    let _ = bookings.try_update(|l| l.patch(&booking_id, |b| b.status = BookingStatus::Cancelled));
                    let _ = notice.try_set("Booking cancelled.".to_owned());
                }
                Err(e) => {
                    let _ = notice.try_set(format!("Cancel failed: {}", session.report(&e)));
                }
            }
        });
    });

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>"My bookings"</h1>
            </header>
            <Show when=move || !notice.get().is_empty()>
                <p class="dashboard-page__notice">{move || notice.get()}</p>
            </Show>
            <Show when=move || bookings.with(|l| l.error.is_some())>
                <p class="page__error">{move || bookings.with(|l| l.error.clone().unwrap_or_default())}</p>
            </Show>
            <Show
                when=move || !bookings.with(|l| l.loading)
                fallback=move || view! { <p>"Loading bookings..."</p> }
            >
                {move || view! { <BookingTable bookings=bookings.get().items on_cancel=on_cancel/> }}
            </Show>
            <ReviewForm bookings=bookings hotels=hotels/>
        </div>
    }
}

#[component]
fn ReviewForm(bookings: RwSignal<Listing<Booking>>, hotels: RwSignal<Listing<Hotel>>) -> impl IntoView {
    let session = use_session();

    let hotel_id = RwSignal::new(String::new());
    let rating = RwSignal::new("5".to_owned());
    let comment = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let choices = move || {
        let ids = bookings.with(|l| reviewable_hotels(&l.items));
        hotels.with(|h| {
            ids.into_iter()
                .map(|id| {
                    let label = h.find(&id).map_or_else(|| id.clone(), |hotel| hotel.name.clone());
                    view! { <option value=id>{label}</option> }
                })
                .collect::<Vec<_>>()
        })
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let user_id = session.auth.with_untracked(|a| a.user_id());
        let input = match validate_review_input(
            user_id.as_deref(),
            &hotel_id.get_untracked(),
            &rating.get_untracked(),
            &comment.get_untracked(),
        ) {
            Ok(input) => input,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);

        let session = session.clone();
        leptos::task::spawn_local(async move {
            match session.api().create_review(&input).await {
                Ok(review) => {
                    log::info!("posted review {} for hotel {}", review.id, review.hotel_id);
                    let _ = comment.try_set(String::new());
                    let _ = info.try_set("Thanks for your review!".to_owned());
                }
                Err(e) => {
                    let _ = info.try_set(format!("Review failed: {}", session.report(&e)));
                }
            }
            let _ = busy.try_set(false);
        });
    };

    view! {
        <Show when=move || bookings.with(|l| !reviewable_hotels(&l.items).is_empty())>
            <form class="review-form" on:submit=on_submit.clone()>
                <h2>"Leave a review"</h2>
                <select
                    class="review-form__input"
                    prop:value=move || hotel_id.get()
                    on:change=move |ev| hotel_id.set(event_target_value(&ev))
                >
                    <option value="">"Choose a hotel"</option>
                    {choices}
                </select>
                <select
                    class="review-form__input"
                    prop:value=move || rating.get()
                    on:change=move |ev| rating.set(event_target_value(&ev))
                >
                    {(1..=5u8)
                        .rev()
                        .map(|n| view! { <option value=n.to_string()>{crate::components::review_list::stars(n)}</option> })
                        .collect::<Vec<_>>()}
                </select>
                <textarea
                    class="review-form__input"
                    placeholder="How was your stay?"
                    prop:value=move || comment.get()
                    on:input=move |ev| comment.set(event_target_value(&ev))
                ></textarea>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    "Post review"
                </button>
                <Show when=move || !info.get().is_empty()>
                    <p class="review-form__message">{move || info.get()}</p>
                </Show>
            </form>
        </Show>
    }
}
