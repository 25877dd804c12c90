use super::*;
use crate::net::types::{Booking, BookingStatus};

fn booking(id: &str) -> Booking {
    Booking {
        id: id.to_owned(),
        user_id: Some("u1".to_owned()),
        hotel_id: "h1".to_owned(),
        room_id: "r1".to_owned(),
        check_in: "2026-03-01".to_owned(),
        check_out: "2026-03-04".to_owned(),
        guests: Some(2),
        total_price: Some(300.0),
        status: BookingStatus::Confirmed,
    }
}

#[test]
fn default_listing_is_idle_and_empty() {
    let listing = Listing::<Booking>::default();
    assert!(listing.is_empty());
    assert!(!listing.loading);
    assert_eq!(listing.error, None);
}

#[test]
fn finish_ok_replaces_items_and_clears_error() {
    let mut listing = Listing::default();
    listing.error = Some("old".to_owned());
    listing.begin();
    assert!(listing.loading);
    listing.finish(Ok(vec![booking("b1"), booking("b2")]));
    assert!(!listing.loading);
    assert_eq!(listing.items.len(), 2);
    assert_eq!(listing.error, None);
}

#[test]
fn finish_err_keeps_previous_items() {
    let mut listing = Listing::default();
    listing.finish(Ok(vec![booking("b1")]));
    listing.begin();
    listing.finish(Err(ApiError::Network("offline".to_owned())));
    assert_eq!(listing.items.len(), 1);
    assert_eq!(listing.error.as_deref(), Some("network error: offline"));
}

#[test]
fn patch_updates_matching_record_only() {
    let mut listing = Listing::default();
    listing.finish(Ok(vec![booking("b1"), booking("b2")]));
    assert!(listing.patch("b2", |b| b.status = BookingStatus::Cancelled));
    assert_eq!(listing.find("b1").unwrap().status, BookingStatus::Confirmed);
    assert_eq!(listing.find("b2").unwrap().status, BookingStatus::Cancelled);
    assert!(!listing.patch("missing", |b| b.status = BookingStatus::Cancelled));
}

#[test]
fn upsert_replaces_or_appends() {
    let mut listing = Listing::default();
    listing.upsert(booking("b1"));
    let mut changed = booking("b1");
    changed.guests = Some(4);
    listing.upsert(changed);
    listing.upsert(booking("b2"));
    assert_eq!(listing.items.len(), 2);
    assert_eq!(listing.find("b1").unwrap().guests, Some(4));
}

#[test]
fn remove_reports_presence() {
    let mut listing = Listing::default();
    listing.finish(Ok(vec![booking("b1")]));
    assert!(listing.remove("b1"));
    assert!(!listing.remove("b1"));
    assert!(listing.is_empty());
}
