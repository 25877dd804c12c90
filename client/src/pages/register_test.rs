use super::*;

#[test]
fn valid_registration_builds_request() {
    assert_eq!(
        validate_register_input(" Ana ", "ana@example.com", "hunter22", "hunter22", "guest"),
        Ok(RegisterRequest {
            name: "Ana".to_owned(),
            email: "ana@example.com".to_owned(),
            password: "hunter22".to_owned(),
            role: Role::Guest,
        })
    );
}

#[test]
fn name_is_required() {
    assert_eq!(validate_register_input("", "a@b.co", "hunter22", "hunter22", "guest"), Err("Enter your name."));
}

#[test]
fn short_password_is_rejected() {
    assert_eq!(
        validate_register_input("Ana", "a@b.co", "abc", "abc", "guest"),
        Err("Password must be at least 6 characters.")
    );
}

#[test]
fn mismatched_confirmation_is_rejected() {
    assert_eq!(
        validate_register_input("Ana", "a@b.co", "hunter22", "hunter23", "guest"),
        Err("Passwords do not match.")
    );
}

#[test]
fn manager_accounts_can_register() {
    let request = validate_register_input("Max", "max@hotel.co", "hunter22", "hunter22", "Manager").unwrap();
    assert_eq!(request.role, Role::Manager);
}

#[test]
fn unknown_role_is_rejected() {
    assert_eq!(validate_register_input("Ana", "a@b.co", "hunter22", "hunter22", ""), Err("Choose a role."));
}
