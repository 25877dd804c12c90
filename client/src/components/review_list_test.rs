use super::*;

fn review(rating: u8) -> Review {
    Review {
        id: format!("rv{rating}"),
        hotel_id: "h1".to_owned(),
        user_id: None,
        user_name: None,
        rating,
        comment: String::new(),
        created_at: None,
    }
}

#[test]
fn stars_fill_by_rating() {
    assert_eq!(stars(3), "★★★☆☆");
    assert_eq!(stars(5), "★★★★★");
}

#[test]
fn stars_clamp_out_of_range() {
    assert_eq!(stars(0), "★☆☆☆☆");
    assert_eq!(stars(9), "★★★★★");
}

#[test]
fn average_rating_of_reviews() {
    assert_eq!(average_rating(&[]), None);
    assert_eq!(average_rating(&[review(4), review(5), review(3)]), Some(4.0));
}
