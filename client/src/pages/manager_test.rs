use super::*;

#[test]
fn hotel_input_trims_and_splits_amenities() {
    assert_eq!(
        validate_hotel_input(" Harbor Inn ", " Lisbon ", " Quiet rooms ", "wifi, , breakfast ", Some("m1")),
        Ok(HotelInput {
            name: "Harbor Inn".to_owned(),
            location: "Lisbon".to_owned(),
            description: "Quiet rooms".to_owned(),
            amenities: vec!["wifi".to_owned(), "breakfast".to_owned()],
            manager_id: Some("m1".to_owned()),
        })
    );
}

#[test]
fn hotel_input_requires_name_and_location() {
    assert_eq!(validate_hotel_input("", "Lisbon", "", "", None), Err("Hotel name is required."));
    assert_eq!(validate_hotel_input("Inn", "  ", "", "", None), Err("Location is required."));
}

#[test]
fn hotel_input_drops_blank_manager_id() {
    let input = validate_hotel_input("Inn", "Porto", "", "", Some("")).unwrap();
    assert_eq!(input.manager_id, None);
}

#[test]
fn room_input_parses_numbers() {
    assert_eq!(
        validate_room_input("h1", "Suite", "249.5", "3", false),
        Ok(RoomInput {
            hotel_id: "h1".to_owned(),
            room_type: "Suite".to_owned(),
            price_per_night: 249.5,
            capacity: 3,
            available: false,
        })
    );
}

#[test]
fn room_input_rejects_bad_price_and_capacity() {
    assert_eq!(validate_room_input("h1", "Suite", "0", "2", true), Err("Price must be a number greater than 0."));
    assert_eq!(validate_room_input("h1", "Suite", "abc", "2", true), Err("Price must be a number greater than 0."));
    assert_eq!(validate_room_input("h1", "Suite", "80", "0", true), Err("Capacity must be at least 1."));
}

#[test]
fn room_input_needs_selected_hotel_and_type() {
    assert_eq!(validate_room_input("", "Suite", "80", "2", true), Err("Select a hotel first."));
    assert_eq!(validate_room_input("h1", " ", "80", "2", true), Err("Room type is required."));
}

#[test]
fn room_fields_round_trip_from_room() {
    let room = Room {
        id: "r1".to_owned(),
        hotel_id: "h1".to_owned(),
        room_type: "Twin".to_owned(),
        price_per_night: 90.0,
        capacity: 2,
        available: true,
    };
    let fields = RoomFields::from(&room);
    assert_eq!(
        validate_room_input("h1", &fields.room_type, &fields.price, &fields.capacity, fields.available)
            .map(|r| (r.price_per_night, r.capacity)),
        Ok((90.0, 2))
    );
}
