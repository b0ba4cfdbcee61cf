//! Shared fixtures for native unit tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::config::Endpoints;
use crate::net::http::{AuthHttp, HttpError, HttpReply};
use crate::state::credentials::CredentialStore;
use crate::state::services::AuthServices;

/// A request seen by `ScriptedHttp`.
#[derive(Clone, Debug, PartialEq)]
pub enum RecordedCall {
    Post { url: String, body: serde_json::Value },
    Get { url: String, token: String },
}

/// Transport that answers from a queue of canned results and records every
/// call. An exhausted queue answers with a send error.
#[derive(Default)]
pub struct ScriptedHttp {
    replies: Mutex<VecDeque<Result<HttpReply, HttpError>>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl ScriptedHttp {
    pub fn replying(replies: Vec<Result<HttpReply, HttpError>>) -> Arc<Self> {
        Arc::new(Self { replies: Mutex::new(replies.into()), calls: Mutex::new(Vec::new()) })
    }

    pub fn json(status: u16, body: serde_json::Value) -> Arc<Self> {
        Self::replying(vec![Ok(HttpReply::new(status, body.to_string()))])
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    fn next_reply(&self, call: RecordedCall) -> Result<HttpReply, HttpError> {
        self.calls.lock().unwrap().push(call);
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(HttpError::Send("no scripted reply".to_owned())))
    }
}

#[async_trait::async_trait(?Send)]
impl AuthHttp for ScriptedHttp {
    async fn post_json(&self, url: &str, body: &serde_json::Value) -> Result<HttpReply, HttpError> {
        self.next_reply(RecordedCall::Post { url: url.to_owned(), body: body.clone() })
    }

    async fn get_with_bearer(&self, url: &str, token: &str) -> Result<HttpReply, HttpError> {
        self.next_reply(RecordedCall::Get { url: url.to_owned(), token: token.to_owned() })
    }
}

/// Default endpoints, an empty in-memory credential store, and `http`.
pub fn services_with(http: Arc<ScriptedHttp>) -> AuthServices {
    AuthServices { endpoints: Endpoints::default(), credentials: CredentialStore::in_memory(), http }
}
