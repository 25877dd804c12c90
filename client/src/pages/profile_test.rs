use super::*;

fn user() -> User {
    User { id: "9".to_owned(), name: "Ana".to_owned(), email: "ana@example.com".to_owned(), role: None }
}

#[test]
fn profile_input_trims_fields() {
    assert_eq!(
        validate_profile_input(" Ana Lima ", " ana@example.com "),
        Ok(UserUpdate { name: "Ana Lima".to_owned(), email: "ana@example.com".to_owned() })
    );
}

#[test]
fn profile_input_rejects_blank_name_and_bad_email() {
    assert_eq!(validate_profile_input(" ", "ana@example.com"), Err("Enter your name."));
    assert_eq!(validate_profile_input("Ana", "ana@"), Err("Enter a valid email address."));
}

#[test]
fn unchanged_profile_is_detected() {
    let update = UserUpdate { name: "Ana".to_owned(), email: "ana@example.com".to_owned() };
    assert!(!profile_changed(&user(), &update));
}

#[test]
fn changed_email_is_detected() {
    let update = UserUpdate { name: "Ana".to_owned(), email: "ana@new.example".to_owned() };
    assert!(profile_changed(&user(), &update));
}
