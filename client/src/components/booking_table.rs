//! Tabular booking list used by guest, manager, and admin dashboards.

#[cfg(test)]
#[path = "booking_table_test.rs"]
mod booking_table_test;

use leptos::prelude::*;

use crate::net::types::Booking;
use crate::util::dates::{display_date, format_price};

/// Bookings ordered by check-in date, newest stay first. Unparseable dates
/// sort last.
pub fn sort_by_check_in(bookings: &mut [Booking]) {
    bookings.sort_by(|a, b| {
        let a_date = crate::util::dates::parse_date(&a.check_in);
        let b_date = crate::util::dates::parse_date(&b.check_in);
        b_date.cmp(&a_date)
    });
}

/// Bookings table with an optional cancel action on open bookings.
#[component]
pub fn BookingTable(
    bookings: Vec<Booking>,
    #[prop(optional)] show_user: bool,
    #[prop(optional)] on_cancel: Option<Callback<String>>,
) -> impl IntoView {
    if bookings.is_empty() {
        return view! { <p class="booking-table__empty">"No bookings yet."</p> }.into_any();
    }

    let mut bookings = bookings;
    sort_by_check_in(&mut bookings);

    let rows = bookings
        .into_iter()
        .map(|booking| {
            let cancel = on_cancel.filter(|_| booking.status.is_cancellable()).map(|on_cancel| {
                let id = booking.id.clone();
                view! {
                    <button class="btn btn--danger" on:click=move |_| on_cancel.run(id.clone())>
                        "Cancel"
                    </button>
                }
            });
            let status_class = format!("booking-table__status booking-table__status--{}", booking.status.as_str());
            view! {
                <tr>
                    <td>{booking.id}</td>
                    {show_user.then(|| view! { <td>{booking.user_id.unwrap_or_default()}</td> })}
                    <td>{booking.hotel_id}</td>
                    <td>{booking.room_id}</td>
                    <td>{display_date(&booking.check_in)}</td>
                    <td>{display_date(&booking.check_out)}</td>
                    <td>{booking.total_price.map(format_price).unwrap_or_default()}</td>
                    <td class=status_class>{booking.status.to_string()}</td>
                    <td>{cancel}</td>
                </tr>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <table class="booking-table">
            <thead>
                <tr>
                    <th>"Booking"</th>
                    {show_user.then(|| view! { <th>"Guest"</th> })}
                    <th>"Hotel"</th>
                    <th>"Room"</th>
                    <th>"Check-in"</th>
                    <th>"Check-out"</th>
                    <th>"Total"</th>
                    <th>"Status"</th>
                    <th></th>
                </tr>
            </thead>
            <tbody>{rows}</tbody>
        </table>
    }
    .into_any()
}
