//! Dependencies shared by every page, provided once through Leptos context.

use crate::config::Endpoints;
use crate::net::http::{SharedHttp, default_http};
use crate::state::credentials::CredentialStore;

#[derive(Clone)]
pub struct AuthServices {
    pub endpoints: Endpoints,
    pub credentials: CredentialStore,
    pub http: SharedHttp,
}

impl AuthServices {
    /// Build-time endpoints, browser storage, and the target's transport.
    #[must_use]
    pub fn for_browser() -> Self {
        Self {
            endpoints: Endpoints::from_build_env(),
            credentials: CredentialStore::browser(),
            http: default_http(),
        }
    }
}
