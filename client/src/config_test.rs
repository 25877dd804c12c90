use super::*;

#[test]
fn missing_value_uses_default() {
    assert_eq!(normalize_base_url(None), DEFAULT_API_BASE);
}

#[test]
fn blank_value_uses_default() {
    assert_eq!(normalize_base_url(Some("   ")), DEFAULT_API_BASE);
}

#[test]
fn trailing_slashes_are_stripped() {
    assert_eq!(normalize_base_url(Some("https://api.example.com/v1//")), "https://api.example.com/v1");
}

#[test]
fn api_base_url_has_no_trailing_slash() {
    assert!(!api_base_url().ends_with('/'));
}
