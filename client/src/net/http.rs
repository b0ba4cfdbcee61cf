//! HTTP transport seam for the auth endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and native tests: `OfflineHttp`, which fails every call
//! since these endpoints are only meaningful in the browser.
//!
//! DESIGN
//! ======
//! Controllers talk to `AuthHttp` instead of `gloo-net` directly so the whole
//! submit lifecycle can run against a scripted transport in native tests.
//! The transport reports status and raw body only; interpreting the body is
//! left to `net::outcome`.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use std::sync::Arc;

/// Failure before a complete response body was available.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum HttpError {
    #[error("request could not be built: {0}")]
    Build(String),
    #[error("request failed: {0}")]
    Send(String),
    #[error("response body unreadable: {0}")]
    Body(String),
    #[error("http not available on server")]
    Unavailable,
}

/// Status code and raw body of a completed request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

impl HttpReply {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self { status, body: body.into() }
    }

    /// `true` for any 2xx status, matching the browser's `Response.ok`.
    #[must_use]
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The two request shapes the pages issue.
#[async_trait::async_trait(?Send)]
pub trait AuthHttp {
    /// POST `body` as JSON to `url`.
    async fn post_json(&self, url: &str, body: &serde_json::Value) -> Result<HttpReply, HttpError>;

    /// GET `url` with an `Authorization: Bearer <token>` header.
    async fn get_with_bearer(&self, url: &str, token: &str) -> Result<HttpReply, HttpError>;
}

pub type SharedHttp = Arc<dyn AuthHttp + Send + Sync>;

pub(crate) fn bearer_value(token: &str) -> String {
    format!("Bearer {token}")
}

/// Transport used wherever there is no browser to issue requests from.
#[derive(Clone, Copy, Debug, Default)]
pub struct OfflineHttp;

#[async_trait::async_trait(?Send)]
impl AuthHttp for OfflineHttp {
    async fn post_json(&self, url: &str, body: &serde_json::Value) -> Result<HttpReply, HttpError> {
        let _ = (url, body);
        Err(HttpError::Unavailable)
    }

    async fn get_with_bearer(&self, url: &str, token: &str) -> Result<HttpReply, HttpError> {
        let _ = (url, token);
        Err(HttpError::Unavailable)
    }
}

#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct GlooHttp;

#[cfg(feature = "hydrate")]
#[async_trait::async_trait(?Send)]
impl AuthHttp for GlooHttp {
    async fn post_json(&self, url: &str, body: &serde_json::Value) -> Result<HttpReply, HttpError> {
        let resp = gloo_net::http::Request::post(url)
            .json(body)
            .map_err(|e| HttpError::Build(e.to_string()))?
            .send()
            .await
            .map_err(|e| HttpError::Send(e.to_string()))?;
        read_reply(resp).await
    }

    async fn get_with_bearer(&self, url: &str, token: &str) -> Result<HttpReply, HttpError> {
        let resp = gloo_net::http::Request::get(url)
            .header("Authorization", &bearer_value(token))
            .header("Content-Type", "application/json")
            .send()
            .await
            .map_err(|e| HttpError::Send(e.to_string()))?;
        read_reply(resp).await
    }
}

#[cfg(feature = "hydrate")]
async fn read_reply(resp: gloo_net::http::Response) -> Result<HttpReply, HttpError> {
    let status = resp.status();
    let body = resp.text().await.map_err(|e| HttpError::Body(e.to_string()))?;
    Ok(HttpReply { status, body })
}

/// Transport for the current build target.
#[must_use]
pub fn default_http() -> SharedHttp {
    #[cfg(feature = "hydrate")]
    {
        Arc::new(GlooHttp)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Arc::new(OfflineHttp)
    }
}
