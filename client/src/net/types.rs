//! JSON bodies exchanged with the external authentication API.
//!
//! DESIGN
//! ======
//! The API has no fixed schema beyond a handful of optional fields, so every
//! field here is optional and unknown fields are tolerated.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Body shape shared by the login and signup endpoints, on success and failure.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiReply {
    /// Session token; only the login endpoint returns one.
    #[serde(default)]
    pub token: Option<String>,
    /// Human-readable success text.
    #[serde(default)]
    pub message: Option<String>,
    /// Human-readable failure text.
    #[serde(default)]
    pub error: Option<String>,
}

/// Body returned by the authenticated user-data endpoint.
///
/// Only `name` is rendered; the remaining fields are kept for diagnostics.
/// `name` is kept as raw JSON so a numeric name does not reject the body.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UserData {
    #[serde(default)]
    pub name: Option<serde_json::Value>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl UserData {
    /// Text shown for `name`: strings as is, numbers in their JSON form.
    /// Booleans, arrays and objects render nothing.
    #[must_use]
    pub fn display_name(&self) -> Option<String> {
        match self.name.as_ref()? {
            serde_json::Value::String(name) => Some(name.clone()),
            serde_json::Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }
}
