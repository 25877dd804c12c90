use super::*;

fn booking(id: &str, hotel_id: &str, status: BookingStatus) -> Booking {
    Booking {
        id: id.to_owned(),
        user_id: Some("u1".to_owned()),
        hotel_id: hotel_id.to_owned(),
        room_id: "r".to_owned(),
        check_in: "2026-01-01".to_owned(),
        check_out: "2026-01-03".to_owned(),
        guests: Some(1),
        total_price: None,
        status,
    }
}

#[test]
fn reviewable_hotels_skip_cancelled_and_duplicates() {
    let bookings = vec![
        booking("b1", "h2", BookingStatus::Confirmed),
        booking("b2", "h1", BookingStatus::Cancelled),
        booking("b3", "h2", BookingStatus::Pending),
        booking("b4", "h3", BookingStatus::Other("completed".to_owned())),
    ];
    assert_eq!(reviewable_hotels(&bookings), vec!["h2".to_owned(), "h3".to_owned()]);
}

#[test]
fn reviewable_hotels_empty_without_bookings() {
    assert!(reviewable_hotels(&[]).is_empty());
}

#[test]
fn valid_review_builds_input() {
    assert_eq!(
        validate_review_input(Some("u1"), "h2", "4", "  Lovely view ")
            .map(|r| (r.hotel_id, r.user_id, r.rating, r.comment)),
        Ok(("h2".to_owned(), "u1".to_owned(), 4, "Lovely view".to_owned()))
    );
}

#[test]
fn review_rating_must_be_in_range() {
    assert_eq!(validate_review_input(Some("u1"), "h2", "0", "ok"), Err("Rating must be between 1 and 5."));
    assert_eq!(validate_review_input(Some("u1"), "h2", "6", "ok"), Err("Rating must be between 1 and 5."));
}

#[test]
fn review_needs_hotel_comment_and_user() {
    assert_eq!(validate_review_input(Some("u1"), "", "4", "ok"), Err("Choose a hotel."));
    assert_eq!(validate_review_input(Some("u1"), "h2", "4", "  "), Err("Write a short comment."));
    assert_eq!(
        validate_review_input(None, "h2", "4", "ok"),
        Err("Your session has no user id. Sign in again.")
    );
}

#[test]
fn overlong_comment_is_rejected() {
    let comment = "x".repeat(MAX_COMMENT_LEN + 1);
    assert_eq!(
        validate_review_input(Some("u1"), "h2", "4", &comment),
        Err("Comments are limited to 1000 characters.")
    );
}
