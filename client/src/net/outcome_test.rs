use super::*;

#[test]
fn ok_status_with_token_is_success() {
    let outcome = Outcome::from_reply(&HttpReply::new(200, r#"{"token":"abc","message":"ok"}"#));
    assert_eq!(
        outcome,
        Outcome::Success { token: Some("abc".to_owned()), message: Some("ok".to_owned()) }
    );
}

#[test]
fn ok_status_without_fields_is_bare_success() {
    let outcome = Outcome::from_reply(&HttpReply::new(201, "{}"));
    assert_eq!(outcome, Outcome::Success { token: None, message: None });
}

#[test]
fn error_status_surfaces_server_error() {
    let outcome = Outcome::from_reply(&HttpReply::new(400, r#"{"error":"Email taken"}"#));
    assert_eq!(outcome, Outcome::Rejected { status: 400, error: Some("Email taken".to_owned()) });
}

#[test]
fn error_status_without_error_field_has_no_text() {
    let outcome = Outcome::from_reply(&HttpReply::new(500, r#"{"message":"ignored"}"#));
    assert_eq!(outcome, Outcome::Rejected { status: 500, error: None });
}

#[test]
fn empty_strings_count_as_missing() {
    let rejected = Outcome::from_reply(&HttpReply::new(401, r#"{"error":""}"#));
    assert_eq!(rejected, Outcome::Rejected { status: 401, error: None });
    let success = Outcome::from_reply(&HttpReply::new(200, r#"{"token":"t","message":""}"#));
    assert_eq!(success, Outcome::Success { token: Some("t".to_owned()), message: None });
}

#[test]
fn non_json_body_fails_for_any_status() {
    assert!(matches!(Outcome::from_reply(&HttpReply::new(200, "<html>")), Outcome::Failed(_)));
    assert!(matches!(Outcome::from_reply(&HttpReply::new(502, "Bad Gateway")), Outcome::Failed(_)));
    assert!(matches!(Outcome::from_reply(&HttpReply::new(204, "")), Outcome::Failed(_)));
}

#[test]
fn transport_error_is_failed_with_reason() {
    let outcome = Outcome::from_result(Err(HttpError::Send("network down".to_owned())));
    assert_eq!(outcome, Outcome::Failed("request failed: network down".to_owned()));
}

#[test]
fn from_result_delegates_to_reply_classification() {
    let outcome = Outcome::from_result(Ok(HttpReply::new(400, r#"{"error":"nope"}"#)));
    assert_eq!(outcome, Outcome::Rejected { status: 400, error: Some("nope".to_owned()) });
}

#[test]
fn non_object_json_body_fails() {
    for body in [r#"[null,null,"x"]"#, r#""Email taken""#, "42", "null"] {
        let outcome = Outcome::from_reply(&HttpReply::new(400, body));
        assert!(matches!(outcome, Outcome::Failed(_)), "body {body}: {outcome:?}");
    }
    let outcome = Outcome::from_reply(&HttpReply::new(200, r#"["abc","ok"]"#));
    assert!(matches!(outcome, Outcome::Failed(_)));
}
