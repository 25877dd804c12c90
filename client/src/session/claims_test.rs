use super::*;

fn token_with(payload: &str) -> String {
    format!("eyJhbGciOiJIUzI1NiJ9.{}.sig", URL_SAFE_NO_PAD.encode(payload))
}

#[test]
fn reads_id_claim() {
    let token = token_with(r#"{"id":"u-42","role":"guest"}"#);
    assert_eq!(user_id(&token).as_deref(), Some("u-42"));
}

#[test]
fn numeric_ids_become_strings() {
    let token = token_with(r#"{"userId":7}"#);
    assert_eq!(user_id(&token).as_deref(), Some("7"));
}

#[test]
fn falls_back_to_sub() {
    let token = token_with(r#"{"sub":"abc","exp":1700000000}"#);
    assert_eq!(user_id(&token).as_deref(), Some("abc"));
}

#[test]
fn id_wins_over_sub() {
    let token = token_with(r#"{"sub":"subject","id":"primary"}"#);
    assert_eq!(user_id(&token).as_deref(), Some("primary"));
}

#[test]
fn tolerates_padded_payload() {
    let padded = base64::engine::general_purpose::URL_SAFE.encode(r#"{"id":"p"}"#);
    let token = format!("h.{padded}.s");
    assert_eq!(user_id(&token).as_deref(), Some("p"));
}

#[test]
fn opaque_tokens_have_no_claims() {
    assert!(decode_payload("abc").is_none());
    assert!(decode_payload("a.b").is_none());
    assert!(decode_payload("a.b.c.d").is_none());
    assert!(user_id("abc").is_none());
}

#[test]
fn non_object_payload_is_rejected() {
    assert!(decode_payload(&token_with("[1,2,3]")).is_none());
    assert!(decode_payload("h.%%%.s").is_none());
}

#[test]
fn empty_string_id_is_skipped() {
    let token = token_with(r#"{"id":"","sub":"fallback"}"#);
    assert_eq!(user_id(&token).as_deref(), Some("fallback"));
}
