use super::*;

#[test]
fn validate_login_input_trims_email_and_parses_role() {
    assert_eq!(
        validate_login_input("  ana@example.com ", "secret", "manager"),
        Ok(LoginRequest { email: "ana@example.com".to_owned(), password: "secret".to_owned(), role: Role::Manager })
    );
}

#[test]
fn validate_login_input_keeps_password_verbatim() {
    let request = validate_login_input("a@b.co", " spaced ", "guest").unwrap();
    assert_eq!(request.password, " spaced ");
}

#[test]
fn validate_login_input_requires_email() {
    assert_eq!(validate_login_input("   ", "secret", "guest"), Err("Enter a valid email address."));
    assert_eq!(validate_login_input("not-an-email", "secret", "guest"), Err("Enter a valid email address."));
}

#[test]
fn validate_login_input_requires_password() {
    assert_eq!(validate_login_input("a@b.co", "", "guest"), Err("Enter your password."));
}

#[test]
fn validate_login_input_requires_known_role() {
    assert_eq!(validate_login_input("a@b.co", "pw", "owner"), Err("Choose a role."));
}
