use super::*;

#[test]
fn required_trims_and_rejects_blank() {
    assert_eq!(required("  Lisbon ", "Enter a location."), Ok("Lisbon".to_owned()));
    assert_eq!(required("   ", "Enter a location."), Err("Enter a location."));
}

#[test]
fn email_accepts_common_addresses() {
    assert_eq!(email(" ana@example.com "), Ok("ana@example.com".to_owned()));
    assert_eq!(email("a.b+c@mail.example.org"), Ok("a.b+c@mail.example.org".to_owned()));
}

#[test]
fn email_rejects_malformed_addresses() {
    for raw in ["", "ana", "@example.com", "ana@", "ana@example", "a@b@c.com", "ana@.com", "ana@example."] {
        assert!(email(raw).is_err(), "{raw:?} should be rejected");
    }
}

#[test]
fn price_must_be_positive_and_finite() {
    assert_eq!(price("120.50"), Ok(120.5));
    assert!(price("0").is_err());
    assert!(price("-10").is_err());
    assert!(price("abc").is_err());
    assert!(price("NaN").is_err());
    assert!(price("inf").is_err());
}

#[test]
fn rating_is_one_to_five() {
    assert_eq!(rating("1"), Ok(1));
    assert_eq!(rating(" 5 "), Ok(5));
    assert!(rating("0").is_err());
    assert!(rating("6").is_err());
    assert!(rating("4.5").is_err());
}

#[test]
fn positive_count_rejects_zero() {
    assert_eq!(positive_count("2", "bad"), Ok(2));
    assert_eq!(positive_count("0", "bad"), Err("bad"));
    assert_eq!(positive_count("-1", "bad"), Err("bad"));
}

#[test]
fn comma_list_drops_blanks() {
    assert_eq!(comma_list("wifi, pool,, spa ,"), vec!["wifi", "pool", "spa"]);
    assert!(comma_list("  ").is_empty());
}
