use super::*;

#[test]
fn users_tab_is_the_default() {
    assert_eq!(AdminTab::default(), AdminTab::Users);
}

#[test]
fn tab_labels_follow_tab_order() {
    let labels: Vec<_> = AdminTab::ALL.into_iter().map(AdminTab::label).collect();
    assert_eq!(labels, vec!["Users", "Hotels", "Bookings"]);
}

#[test]
fn admin_cannot_delete_own_account() {
    assert!(!can_delete_user(Some("42"), "42"));
    assert!(can_delete_user(Some("42"), "7"));
}

#[test]
fn unknown_self_id_allows_delete() {
    assert!(can_delete_user(None, "7"));
}
