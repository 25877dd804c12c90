use super::*;

fn hotel(id: &str, name: &str, location: &str, amenities: &[&str]) -> Hotel {
    Hotel {
        id: id.to_owned(),
        name: name.to_owned(),
        location: location.to_owned(),
        description: String::new(),
        rating: None,
        manager_id: None,
        amenities: amenities.iter().map(|a| (*a).to_owned()).collect(),
        image_url: None,
    }
}

fn sample() -> Vec<Hotel> {
    vec![
        hotel("1", "Harbor Inn", "Lisbon", &["wifi", "breakfast"]),
        hotel("2", "Alpine Lodge", "Zermatt", &["spa"]),
        hotel("3", "City Rooms", "Porto", &[]),
    ]
}

fn ids(hotels: &[Hotel]) -> Vec<&str> {
    hotels.iter().map(|h| h.id.as_str()).collect()
}

#[test]
fn blank_query_keeps_everything() {
    assert_eq!(ids(&filter_hotels(&sample(), "  ")), vec!["1", "2", "3"]);
}

#[test]
fn query_matches_name_and_location_case_insensitively() {
    assert_eq!(ids(&filter_hotels(&sample(), "LODGE")), vec!["2"]);
    assert_eq!(ids(&filter_hotels(&sample(), "porto")), vec!["3"]);
}

#[test]
fn query_matches_amenities() {
    assert_eq!(ids(&filter_hotels(&sample(), "Spa")), vec!["2"]);
}

#[test]
fn unmatched_query_is_empty() {
    assert!(filter_hotels(&sample(), "castle").is_empty());
}
