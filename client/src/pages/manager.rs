//! Manager dashboard: own hotels, their rooms, and their bookings.
//!
//! SYSTEM CONTEXT
//! ==============
//! Hotels are listed by the manager id in the session token. Selecting a
//! hotel loads its rooms and bookings; mutations patch the loaded lists in
//! place.

#[cfg(test)]
#[path = "manager_test.rs"]
mod manager_test;

use leptos::prelude::*;

use crate::components::booking_table::BookingTable;
use crate::components::hotel_card::HotelCard;
use crate::net::types::{Booking, Hotel, HotelInput, Room, RoomInput};
use crate::pages::load_listing;
use crate::state::listing::Listing;
use crate::util::auth::use_session;
use crate::util::dates::format_price;
use crate::util::forms;

/// Validate the hotel form.
///
/// # Errors
///
/// Returns the message to show for the first invalid field.
pub fn validate_hotel_input(
    name: &str,
    location: &str,
    description: &str,
    amenities: &str,
    manager_id: Option<&str>,
) -> Result<HotelInput, &'static str> {
    let name = forms::required(name, "Hotel name is required.")?;
    let location = forms::required(location, "Location is required.")?;
    Ok(HotelInput {
        name,
        location,
        description: description.trim().to_owned(),
        amenities: forms::comma_list(amenities),
        manager_id: manager_id.filter(|id| !id.is_empty()).map(str::to_owned),
    })
}

/// Validate the room form for `hotel_id`.
///
/// # Errors
///
/// Returns the message to show for the first invalid field.
pub fn validate_room_input(
    hotel_id: &str,
    room_type: &str,
    price: &str,
    capacity: &str,
    available: bool,
) -> Result<RoomInput, &'static str> {
    let hotel_id = forms::required(hotel_id, "Select a hotel first.")?;
    let room_type = forms::required(room_type, "Room type is required.")?;
    let price_per_night = forms::price(price)?;
    let capacity = forms::positive_count(capacity, "Capacity must be at least 1.")?;
    Ok(RoomInput { hotel_id, room_type, price_per_night, capacity, available })
}

/// Hotel form field values.
#[derive(Clone, Debug, Default, PartialEq)]
struct HotelFields {
    name: String,
    location: String,
    description: String,
    amenities: String,
}

impl From<&Hotel> for HotelFields {
    fn from(hotel: &Hotel) -> Self {
        Self {
            name: hotel.name.clone(),
            location: hotel.location.clone(),
            description: hotel.description.clone(),
            amenities: hotel.amenities.join(", "),
        }
    }
}

/// Room form field values.
#[derive(Clone, Debug, PartialEq)]
struct RoomFields {
    room_type: String,
    price: String,
    capacity: String,
    available: bool,
}

impl Default for RoomFields {
    fn default() -> Self {
        Self { room_type: String::new(), price: String::new(), capacity: "1".to_owned(), available: true }
    }
}

impl From<&Room> for RoomFields {
    fn from(room: &Room) -> Self {
        Self {
            room_type: room.room_type.clone(),
            price: room.price_per_night.to_string(),
            capacity: room.capacity.to_string(),
            available: room.available,
        }
    }
}

#[component]
pub fn ManagerDashboardPage() -> impl IntoView {
    let session = use_session();
    let auth = session.auth;

    let hotels = RwSignal::new(Listing::<Hotel>::default());
    let rooms = RwSignal::new(Listing::<Room>::default());
    let bookings = RwSignal::new(Listing::<Booking>::default());
    let selected = RwSignal::new(None::<String>);

    let list_session = session.clone();
    Effect::new(move || {
        let Some(manager_id) = auth.with(|a| a.user_id()) else {
            hotels.update(|l| l.error = Some("Your session has no user id. Sign in again.".to_owned()));
            return;
        };
        let api = list_session.api();
        load_listing(&list_session, hotels, async move { api.hotels_for_manager(&manager_id).await });
    });

    let detail_session = session;
    Effect::new(move || {
        let Some(hotel_id) = selected.get() else {
            rooms.set(Listing::default());
            bookings.set(Listing::default());
            return;
        };
        let api = detail_session.api();
        let rooms_api = api.clone();
        let rooms_id = hotel_id.clone();
        load_listing(&detail_session, rooms, async move { rooms_api.rooms_for_hotel(&rooms_id).await });
        load_listing(&detail_session, bookings, async move { api.bookings_for_hotel(&hotel_id).await });
    });

    let on_select = Callback::new(move |id: String| selected.set(Some(id)));

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>"My hotels"</h1>
            </header>
            <Show when=move || hotels.with(|l| l.error.is_some())>
                <p class="page__error">{move || hotels.with(|l| l.error.clone().unwrap_or_default())}</p>
            </Show>
            <div class="dashboard-page__cards">
                {move || {
                    let current = selected.get();
                    hotels
                        .get()
                        .items
                        .into_iter()
                        .map(|hotel| {
                            let is_selected = current.as_deref() == Some(hotel.id.as_str());
                            view! { <HotelCard hotel=hotel selected=is_selected on_select=on_select/> }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>
            <HotelEditor hotels=hotels selected=selected/>
            <Show when=move || selected.get().is_some()>
                <RoomsPanel rooms=rooms selected=selected/>
                <section class="dashboard-page__bookings">
                    <h2>"Bookings"</h2>
                    <Show when=move || bookings.with(|l| l.error.is_some())>
                        <p class="page__error">{move || bookings.with(|l| l.error.clone().unwrap_or_default())}</p>
                    </Show>
                    {move || view! { <BookingTable bookings=bookings.get().items show_user=true/> }}
                </section>
            </Show>
        </div>
    }
}

/// Create form, or edit/delete form for the selected hotel.
#[component]
fn HotelEditor(hotels: RwSignal<Listing<Hotel>>, selected: RwSignal<Option<String>>) -> impl IntoView {
    let session = use_session();
    let fields = RwSignal::new(HotelFields::default());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    // Refill the form whenever the selection changes.
    Effect::new(move || {
        let next = selected
            .get()
            .and_then(|id| hotels.with_untracked(|l| l.find(&id).map(HotelFields::from)))
            .unwrap_or_default();
        fields.set(next);
        info.set(String::new());
    });

    let save_session = session.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let manager_id = save_session.auth.with_untracked(|a| a.user_id());
        let input = match fields.with_untracked(|f| {
            validate_hotel_input(&f.name, &f.location, &f.description, &f.amenities, manager_id.as_deref())
        }) {
            Ok(input) => input,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);

        let editing = selected.get_untracked();
        let session = save_session.clone();
        leptos::task::spawn_local(async move {
            let api = session.api();
            let result = match &editing {
                Some(id) => api.update_hotel(id, &input).await,
                None => api.create_hotel(&input).await,
            };
            match result {
                Ok(hotel) => {
                    log::info!("saved hotel {}", hotel.id);
                    let id = hotel.id.clone();
                    let _ = hotels.try_update(|l| l.upsert(hotel));
                    let _ = selected.try_set(Some(id));
                    let _ = info.try_set("Hotel saved.".to_owned());
                }
                Err(e) => {
                    let _ = info.try_set(format!("Save failed: {}", session.report(&e)));
                }
            }
            let _ = busy.try_set(false);
        });
    };

    let on_delete = move |_| {
        let Some(id) = selected.get_untracked() else {
            return;
        };
        busy.set(true);
        let session = session.clone();
        leptos::task::spawn_local(async move {
            match session.api().delete_hotel(&id).await {
                Ok(()) => {
                    log::info!("deleted hotel {id}");
                    let _ = hotels.try_update(|l| l.remove(&id));
                    let _ = selected.try_set(None);
                    let _ = info.try_set("Hotel deleted.".to_owned());
                }
                Err(e) => {
                    let _ = info.try_set(format!("Delete failed: {}", session.report(&e)));
                }
            }
            let _ = busy.try_set(false);
        });
    };

    view! {
        <form class="hotel-form" on:submit=on_submit>
            <h2>{move || if selected.get().is_some() { "Edit hotel" } else { "Add a hotel" }}</h2>
            <input
                class="hotel-form__input"
                type="text"
                placeholder="Name"
                prop:value=move || fields.with(|f| f.name.clone())
                on:input=move |ev| fields.update(|f| f.name = event_target_value(&ev))
            />
            <input
                class="hotel-form__input"
                type="text"
                placeholder="Location"
                prop:value=move || fields.with(|f| f.location.clone())
                on:input=move |ev| fields.update(|f| f.location = event_target_value(&ev))
            />
            <textarea
                class="hotel-form__input"
                placeholder="Description"
                prop:value=move || fields.with(|f| f.description.clone())
                on:input=move |ev| fields.update(|f| f.description = event_target_value(&ev))
            ></textarea>
            <input
                class="hotel-form__input"
                type="text"
                placeholder="Amenities, comma separated"
                prop:value=move || fields.with(|f| f.amenities.clone())
                on:input=move |ev| fields.update(|f| f.amenities = event_target_value(&ev))
            />
            <div class="hotel-form__actions">
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    "Save"
                </button>
                <Show when=move || selected.get().is_some()>
                    <button class="btn" type="button" on:click=move |_| selected.set(None)>
                        "New hotel"
                    </button>
                    <button
                        class="btn btn--danger"
                        type="button"
                        disabled=move || busy.get()
                        on:click=on_delete.clone()
                    >
                        "Delete"
                    </button>
                </Show>
            </div>
            <Show when=move || !info.get().is_empty()>
                <p class="hotel-form__message">{move || info.get()}</p>
            </Show>
        </form>
    }
}

/// Room list and room form for the selected hotel.
#[component]
fn RoomsPanel(rooms: RwSignal<Listing<Room>>, selected: RwSignal<Option<String>>) -> impl IntoView {
    let session = use_session();
    let fields = RwSignal::new(RoomFields::default());
    let editing = RwSignal::new(None::<String>);
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let start_edit = move |room_id: String| {
        let next = rooms.with_untracked(|l| l.find(&room_id).map(RoomFields::from)).unwrap_or_default();
        fields.set(next);
        editing.set(Some(room_id));
    };

    let save_session = session.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let hotel_id = selected.get_untracked().unwrap_or_default();
        let input = match fields
            .with_untracked(|f| validate_room_input(&hotel_id, &f.room_type, &f.price, &f.capacity, f.available))
        {
            Ok(input) => input,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);

        let room_id = editing.get_untracked();
        let session = save_session.clone();
        leptos::task::spawn_local(async move {
            let api = session.api();
            let result = match &room_id {
                Some(id) => api.update_room(id, &input).await,
                None => api.create_room(&input).await,
            };
            match result {
                Ok(room) => {
                    log::info!("saved room {} in hotel {}", room.id, room.hotel_id);
                    let _ = rooms.try_update(|l| l.upsert(room));
                    let _ = editing.try_set(None);
                    let _ = fields.try_set(RoomFields::default());
                    let _ = info.try_set("Room saved.".to_owned());
                }
                Err(e) => {
                    let _ = info.try_set(format!("Save failed: {}", session.report(&e)));
                }
            }
            let _ = busy.try_set(false);
        });
    };

    let on_delete = Callback::new(move |room_id: String| {
        let session = session.clone();
        leptos::task::spawn_local(async move {
            match session.api().delete_room(&room_id).await {
                Ok(()) => {
                    log::info!("deleted room {room_id}");
                    let _ = rooms.try_update(|l| l.remove(&room_id));
                    if editing.get_untracked().as_deref() == Some(room_id.as_str()) {
                        let _ = editing.try_set(None);
                        let _ = fields.try_set(RoomFields::default());
                    }
                }
                Err(e) => {
                    let _ = info.try_set(format!("Delete failed: {}", session.report(&e)));
                }
            }
        });
    });
    let on_edit = Callback::new(start_edit);

    view! {
        <section class="rooms-panel">
            <h2>"Rooms"</h2>
            <Show when=move || rooms.with(|l| l.error.is_some())>
                <p class="page__error">{move || rooms.with(|l| l.error.clone().unwrap_or_default())}</p>
            </Show>
            <ul class="rooms-panel__list">
                {move || {
                    rooms
                        .get()
                        .items
                        .into_iter()
                        .map(|room| {
                            let label = format!(
                                "{} · {} · sleeps {}{}",
                                room.room_type,
                                format_price(room.price_per_night),
                                room.capacity,
                                if room.available { "" } else { " · unavailable" },
                            );
                            let edit_id = room.id.clone();
                            let delete_id = room.id.clone();
                            view! {
                                <li class="rooms-panel__item">
                                    <span>{label}</span>
                                    <button class="btn" on:click=move |_| on_edit.run(edit_id.clone())>"Edit"</button>
                                    <button class="btn btn--danger" on:click=move |_| on_delete.run(delete_id.clone())>
                                        "Delete"
                                    </button>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </ul>
            <form class="room-form" on:submit=on_submit>
                <h3>{move || if editing.get().is_some() { "Edit room" } else { "Add a room" }}</h3>
                <input
                    class="room-form__input"
                    type="text"
                    placeholder="Room type"
                    prop:value=move || fields.with(|f| f.room_type.clone())
                    on:input=move |ev| fields.update(|f| f.room_type = event_target_value(&ev))
                />
                <input
                    class="room-form__input"
                    type="number"
                    step="0.01"
                    placeholder="Price per night"
                    prop:value=move || fields.with(|f| f.price.clone())
                    on:input=move |ev| fields.update(|f| f.price = event_target_value(&ev))
                />
                <input
                    class="room-form__input"
                    type="number"
                    min="1"
                    placeholder="Capacity"
                    prop:value=move || fields.with(|f| f.capacity.clone())
                    on:input=move |ev| fields.update(|f| f.capacity = event_target_value(&ev))
                />
                <label class="room-form__label">
                    <input
                        type="checkbox"
                        prop:checked=move || fields.with(|f| f.available)
                        on:change=move |ev| fields.update(|f| f.available = event_target_checked(&ev))
                    />
                    "Available"
                </label>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    "Save room"
                </button>
                <Show when=move || editing.get().is_some()>
                    <button
                        class="btn"
                        type="button"
                        on:click=move |_| {
                            editing.set(None);
                            fields.set(RoomFields::default());
                        }
                    >
                        "Cancel edit"
                    </button>
                </Show>
                <Show when=move || !info.get().is_empty()>
                    <p class="room-form__message">{move || info.get()}</p>
                </Show>
            </form>
        </section>
    }
}
