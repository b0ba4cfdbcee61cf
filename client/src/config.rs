//! Endpoint configuration baked in at compile time.
//!
//! Each page talks to one endpoint, supplied through an environment variable
//! when the client crate is built:
//! - `AUTH_LOGIN_API` (default `/api/auth/login`)
//! - `AUTH_SIGNUP_API` (default `/api/auth/signup`)
//! - `AUTH_HOME_API` (default `/api/auth/me`)
//!
//! Blank values count as unset.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::state::form::FormKind;

pub const DEFAULT_LOGIN_API: &str = "/api/auth/login";
pub const DEFAULT_SIGNUP_API: &str = "/api/auth/signup";
pub const DEFAULT_HOME_API: &str = "/api/auth/me";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Endpoints {
    pub login: String,
    pub signup: String,
    pub home: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self::from_values(None, None, None)
    }
}

impl Endpoints {
    /// Endpoints captured from the build environment.
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("AUTH_LOGIN_API"),
            option_env!("AUTH_SIGNUP_API"),
            option_env!("AUTH_HOME_API"),
        )
    }

    #[must_use]
    pub fn from_values(login: Option<&str>, signup: Option<&str>, home: Option<&str>) -> Self {
        Self {
            login: pick(login, DEFAULT_LOGIN_API),
            signup: pick(signup, DEFAULT_SIGNUP_API),
            home: pick(home, DEFAULT_HOME_API),
        }
    }

    /// Submission endpoint for a form.
    #[must_use]
    pub fn for_form(&self, kind: FormKind) -> &str {
        match kind {
            FormKind::Login => &self.login,
            FormKind::SignUp => &self.signup,
        }
    }
}

fn pick(raw: Option<&str>, default: &str) -> String {
    raw.map(str::trim).filter(|v| !v.is_empty()).unwrap_or(default).to_owned()
}
