use super::*;
use futures::executor::block_on;

#[test]
fn reply_ok_covers_2xx_only() {
    assert!(HttpReply::new(200, "").ok());
    assert!(HttpReply::new(201, "").ok());
    assert!(HttpReply::new(299, "").ok());
    assert!(!HttpReply::new(199, "").ok());
    assert!(!HttpReply::new(301, "").ok());
    assert!(!HttpReply::new(400, "").ok());
    assert!(!HttpReply::new(500, "").ok());
}

#[test]
fn bearer_value_prefixes_token() {
    assert_eq!(bearer_value("abc"), "Bearer abc");
}

#[test]
fn offline_http_rejects_every_call() {
    let http = OfflineHttp;
    let post = block_on(http.post_json("/api/auth/login", &serde_json::json!({})));
    let get = block_on(http.get_with_bearer("/api/auth/me", "abc"));
    assert_eq!(post, Err(HttpError::Unavailable));
    assert_eq!(get, Err(HttpError::Unavailable));
}

#[test]
fn http_error_messages_name_the_stage() {
    assert_eq!(HttpError::Send("offline".into()).to_string(), "request failed: offline");
    assert_eq!(HttpError::Body("truncated".into()).to_string(), "response body unreadable: truncated");
}
