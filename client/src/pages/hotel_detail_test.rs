use super::*;

fn room(capacity: u32, available: bool) -> Room {
    Room {
        id: "r1".to_owned(),
        hotel_id: "h1".to_owned(),
        room_type: "Double".to_owned(),
        price_per_night: 120.0,
        capacity,
        available,
    }
}

#[test]
fn valid_booking_builds_input() {
    let room = room(2, true);
    assert_eq!(
        validate_booking_input(Some("u7"), Some(&room), "2026-05-01", "2026-05-04", "2"),
        Ok(BookingInput {
            user_id: "u7".to_owned(),
            hotel_id: "h1".to_owned(),
            room_id: "r1".to_owned(),
            check_in: "2026-05-01".to_owned(),
            check_out: "2026-05-04".to_owned(),
            guests: 2,
        })
    );
}

#[test]
fn booking_requires_user_id() {
    let room = room(2, true);
    assert_eq!(
        validate_booking_input(None, Some(&room), "2026-05-01", "2026-05-04", "1"),
        Err("Sign in as a guest to book.")
    );
    assert_eq!(
        validate_booking_input(Some(""), Some(&room), "2026-05-01", "2026-05-04", "1"),
        Err("Sign in as a guest to book.")
    );
}

#[test]
fn booking_requires_room() {
    assert_eq!(validate_booking_input(Some("u"), None, "2026-05-01", "2026-05-04", "1"), Err("Choose a room."));
}

#[test]
fn unavailable_room_cannot_be_booked() {
    let room = room(2, false);
    assert_eq!(
        validate_booking_input(Some("u"), Some(&room), "2026-05-01", "2026-05-04", "1"),
        Err("This room is not available.")
    );
}

#[test]
fn check_out_must_follow_check_in() {
    let room = room(2, true);
    assert_eq!(
        validate_booking_input(Some("u"), Some(&room), "2026-05-04", "2026-05-04", "1"),
        Err("Check-out must be after check-in.")
    );
    assert_eq!(
        validate_booking_input(Some("u"), Some(&room), "2026-05-04", "2026-05-01", "1"),
        Err("Check-out must be after check-in.")
    );
}

#[test]
fn missing_dates_are_reported() {
    let room = room(2, true);
    assert_eq!(validate_booking_input(Some("u"), Some(&room), "", "2026-05-04", "1"), Err("Choose a check-in date."));
    assert_eq!(validate_booking_input(Some("u"), Some(&room), "2026-05-01", "", "1"), Err("Choose a check-out date."));
}

#[test]
fn guest_count_is_bounded_by_capacity() {
    let room = room(2, true);
    assert_eq!(
        validate_booking_input(Some("u"), Some(&room), "2026-05-01", "2026-05-02", "0"),
        Err("Guests must be at least 1.")
    );
    assert_eq!(
        validate_booking_input(Some("u"), Some(&room), "2026-05-01", "2026-05-02", "3"),
        Err("Too many guests for this room.")
    );
}

#[test]
fn estimate_needs_a_valid_range() {
    let room = room(2, true);
    assert_eq!(booking_estimate(&room, "2026-05-01", "2026-05-04"), Some(360.0));
    assert_eq!(booking_estimate(&room, "2026-05-04", "2026-05-01"), None);
    assert_eq!(booking_estimate(&room, "", "2026-05-01"), None);
}
