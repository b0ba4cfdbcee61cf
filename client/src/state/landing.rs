//! Landing page data: one authenticated fetch on mount.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads the credential token and, when present, fetches the user-data
//! endpoint with a bearer header. Every failure is logged and leaves the page
//! showing nothing user-specific; there is no retry or polling.

#[cfg(test)]
#[path = "landing_test.rs"]
mod landing_test;

use crate::net::types::UserData;
use crate::state::credentials::CredentialStore;
use crate::state::services::AuthServices;
use crate::util::lifecycle::ScopeFlag;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LandingState {
    pub user: Option<UserData>,
}

impl LandingState {
    #[must_use]
    pub fn display_name(&self) -> Option<String> {
        self.user.as_ref().and_then(UserData::display_name)
    }

    /// Store a fetched result unless the page was torn down meanwhile.
    /// Returns whether the result was kept.
    pub fn accept(&mut self, scope: &ScopeFlag, user: Option<UserData>) -> bool {
        if !scope.is_live() {
            return false;
        }
        self.user = user;
        true
    }
}

/// Fetch the current user's data, or `None` when unauthenticated or on error.
pub async fn load_user_data(services: &AuthServices) -> Option<UserData> {
    let Some(token) = services.credentials.read() else {
        log::warn!("No token found in local storage.");
        return None;
    };

    let reply = match services.http.get_with_bearer(&services.endpoints.home, &token).await {
        Ok(reply) => reply,
        Err(e) => {
            log::error!("error fetching user data: {e}");
            return None;
        }
    };
    if !reply.ok() {
        log::error!("error fetching user data: status {}", reply.status);
        return None;
    }

    match serde_json::from_str::<UserData>(&reply.body) {
        Ok(data) => {
            log::debug!("user data: {data:?}");
            Some(data)
        }
        Err(e) => {
            log::error!("error fetching user data: invalid body: {e}");
            None
        }
    }
}

/// Log whether a token is stored. Returns `true` when one is.
///
/// Goes through the parsed read, so a stored JSON `null` or an unparseable
/// value reports as no token.
pub fn report_stored_token(credentials: &CredentialStore) -> bool {
    match credentials.read() {
        Some(token) => {
            log::info!("Token found: {token}");
            true
        }
        None => {
            log::warn!("No token found in local storage.");
            false
        }
    }
}
