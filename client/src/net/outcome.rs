//! Classification of a finished auth request.
//!
//! The browser flow reads the JSON body before looking at the status, so a
//! body that is not a JSON object is a failure regardless of status class.

#[cfg(test)]
#[path = "outcome_test.rs"]
mod outcome_test;

use super::http::{HttpError, HttpReply};
use super::types::ApiReply;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// 2xx with a JSON body.
    Success { token: Option<String>, message: Option<String> },
    /// Non-2xx with a JSON body; `error` is the server's text, if any.
    Rejected { status: u16, error: Option<String> },
    /// No usable response: transport error or unparseable body.
    Failed(String),
}

impl Outcome {
    #[must_use]
    pub fn from_reply(reply: &HttpReply) -> Self {
        let body = match parse_object(&reply.body) {
            Ok(body) => body,
            Err(reason) => return Self::Failed(format!("invalid response body (status {}): {reason}", reply.status)),
        };
        if reply.ok() {
            Self::Success { token: body.token, message: non_blank(body.message) }
        } else {
            Self::Rejected { status: reply.status, error: non_blank(body.error) }
        }
    }

    #[must_use]
    pub fn from_result(result: Result<HttpReply, HttpError>) -> Self {
        match result {
            Ok(reply) => Self::from_reply(&reply),
            Err(e) => Self::Failed(e.to_string()),
        }
    }
}

// Only a JSON object counts as a reply. serde would otherwise read an array
// positionally into the struct fields.
fn parse_object(body: &str) -> Result<ApiReply, String> {
    let value = serde_json::from_str::<serde_json::Value>(body).map_err(|e| e.to_string())?;
    if !value.is_object() {
        return Err("expected a JSON object".to_owned());
    }
    serde_json::from_value(value).map_err(|e| e.to_string())
}

// An empty server string falls back to the form's default text.
fn non_blank(text: Option<String>) -> Option<String> {
    text.filter(|t| !t.is_empty())
}
