use super::*;

#[test]
fn parses_known_roles_case_insensitively() {
    assert_eq!("guest".parse::<Role>(), Ok(Role::Guest));
    assert_eq!("Manager".parse::<Role>(), Ok(Role::Manager));
    assert_eq!(" ADMIN ".parse::<Role>(), Ok(Role::Admin));
}

#[test]
fn user_is_an_alias_for_guest() {
    assert_eq!("user".parse::<Role>(), Ok(Role::Guest));
}

#[test]
fn rejects_unknown_role() {
    assert_eq!("owner".parse::<Role>(), Err(UnknownRole("owner".to_owned())));
    assert!("".parse::<Role>().is_err());
}

#[test]
fn serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Role::Manager).unwrap(), "\"manager\"");
    assert_eq!(serde_json::from_str::<Role>("\"admin\"").unwrap(), Role::Admin);
}

#[test]
fn display_matches_storage_form() {
    for role in Role::ALL {
        assert_eq!(role.to_string(), role.as_str());
        assert_eq!(role.as_str().parse::<Role>(), Ok(role));
    }
}

#[test]
fn each_role_has_its_own_dashboard() {
    assert_eq!(Role::Guest.dashboard_path(), "/guest");
    assert_eq!(Role::Manager.dashboard_path(), "/manager");
    assert_eq!(Role::Admin.dashboard_path(), "/admin");
}
