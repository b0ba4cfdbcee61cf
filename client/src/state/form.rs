//! Form flow shared by the login and signup pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Both pages run the same cycle: validate every field, POST the values as
//! JSON, then reconcile the outcome into inline messages and, on success, a
//! delayed redirect. A `FormSpec` captures what differs between the pages
//! (fields and their rules, endpoint, messages, token handling, redirect) and
//! `FormController` runs the cycle against a `FormState`.
//!
//! ORDERING
//! ========
//! Within one submission: validation completes before the request is issued;
//! the token write happens before the success message is set; the redirect
//! is returned only after the message is set, so the caller schedules
//! navigation last.
//!
//! The controller never blocks on time. `finish` returns a `Redirect` and
//! the page owns the timer, which lets it drop the redirect on teardown.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use std::collections::BTreeMap;
use std::fmt;
use std::time::Duration;

use crate::net::http::SharedHttp;
use crate::net::outcome::Outcome;
use crate::state::credentials::CredentialStore;
use crate::state::services::AuthServices;
use crate::util::lifecycle::ScopeFlag;
use crate::util::validation::{MIN_PASSWORD_CHARS, contains_at_sign, has_min_chars, is_well_formed_email};

pub const INVALID_EMAIL_MESSAGE: &str = "Please enter a valid email address.";
pub const SHORT_PASSWORD_MESSAGE: &str = "Password must be at least 8 characters long.";
pub const MISSING_NAME_MESSAGE: &str = "Please enter your name.";
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong. Please try again later.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormKind {
    Login,
    SignUp,
}

impl fmt::Display for FormKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Login => f.write_str("login"),
            Self::SignUp => f.write_str("signup"),
        }
    }
}

/// Client-side check applied to one field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldRule {
    /// Full `local@domain.tld` shape.
    Email,
    /// Any value containing `@`.
    EmailLoose,
    /// At least this many characters.
    MinChars(usize),
    /// Any non-empty value.
    Required,
}

impl FieldRule {
    /// Error message for `value`, or `None` when it passes.
    #[must_use]
    pub fn check(self, value: &str) -> Option<&'static str> {
        let passes = match self {
            Self::Email => is_well_formed_email(value),
            Self::EmailLoose => contains_at_sign(value),
            Self::MinChars(min) => has_min_chars(value, min),
            Self::Required => !value.is_empty(),
        };
        if passes { None } else { Some(self.message()) }
    }

    fn message(self) -> &'static str {
        match self {
            Self::Email | Self::EmailLoose => INVALID_EMAIL_MESSAGE,
            Self::MinChars(_) => SHORT_PASSWORD_MESSAGE,
            Self::Required => MISSING_NAME_MESSAGE,
        }
    }
}

/// One input on a form, with its rendering hints.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldSpec {
    /// JSON key in the request body; also the field's state key.
    pub name: &'static str,
    pub label: &'static str,
    pub input_type: &'static str,
    pub placeholder: &'static str,
    pub rule: FieldRule,
}

/// Everything that distinguishes one auth form from another.
#[derive(Debug)]
pub struct FormSpec {
    pub kind: FormKind,
    pub title: &'static str,
    pub submit_label: &'static str,
    pub fields: &'static [FieldSpec],
    /// Store the returned token before reporting success.
    pub persist_token: bool,
    pub redirect_to: &'static str,
    pub redirect_after: Duration,
    pub success_message: &'static str,
    pub failure_message: &'static str,
    /// Footer prompt and link to the sibling form.
    pub switch_prompt: &'static str,
    pub switch_href: &'static str,
}

pub static LOGIN_FORM: FormSpec = FormSpec {
    kind: FormKind::Login,
    title: "Login",
    submit_label: "Login",
    fields: &[
        FieldSpec {
            name: "email",
            label: "Email address",
            input_type: "email",
            placeholder: "Enter email",
            rule: FieldRule::Email,
        },
        FieldSpec {
            name: "password",
            label: "Password",
            input_type: "password",
            placeholder: "Password",
            rule: FieldRule::MinChars(MIN_PASSWORD_CHARS),
        },
    ],
    persist_token: true,
    redirect_to: "/",
    redirect_after: Duration::from_millis(1500),
    success_message: "Login successful!",
    failure_message: "Failed to login. Please try again.",
    switch_prompt: "Don't have an account?",
    switch_href: "/SignUp",
};

pub static SIGNUP_FORM: FormSpec = FormSpec {
    kind: FormKind::SignUp,
    title: "Sign Up",
    submit_label: "SignUp",
    fields: &[
        FieldSpec {
            name: "name",
            label: "Name",
            input_type: "text",
            placeholder: "Enter Your Name",
            rule: FieldRule::Required,
        },
        FieldSpec {
            name: "email",
            label: "Email address",
            input_type: "email",
            placeholder: "Enter email",
            rule: FieldRule::EmailLoose,
        },
        FieldSpec {
            name: "password",
            label: "Password",
            input_type: "password",
            placeholder: "Password",
            rule: FieldRule::MinChars(MIN_PASSWORD_CHARS),
        },
    ],
    persist_token: false,
    redirect_to: "/Login",
    redirect_after: Duration::from_secs(2),
    success_message: "Signup successful!",
    failure_message: "Failed to sign up. Please try again.",
    switch_prompt: "Already Have an Account?",
    switch_href: "/Login",
};

impl FormSpec {
    /// JSON body carrying every field of this form, missing ones as `""`.
    #[must_use]
    pub fn payload(&self, values: &BTreeMap<&'static str, String>) -> serde_json::Value {
        let body = self
            .fields
            .iter()
            .map(|field| {
                let value = values.get(field.name).cloned().unwrap_or_default();
                (field.name.to_owned(), serde_json::Value::String(value))
            })
            .collect::<serde_json::Map<_, _>>();
        serde_json::Value::Object(body)
    }
}

/// Field-level validation result. Empty means valid.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Validation {
    pub field_errors: BTreeMap<&'static str, &'static str>,
}

impl Validation {
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.field_errors.is_empty()
    }
}

/// Check every field of `spec`; all failures are reported together.
#[must_use]
pub fn validate(spec: &FormSpec, values: &BTreeMap<&'static str, String>) -> Validation {
    let field_errors = spec
        .fields
        .iter()
        .filter_map(|field| {
            let value = values.get(field.name).map_or("", String::as_str);
            field.rule.check(value).map(|message| (field.name, message))
        })
        .collect();
    Validation { field_errors }
}

/// Live state of one form page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormState {
    pub values: BTreeMap<&'static str, String>,
    pub field_errors: BTreeMap<&'static str, &'static str>,
    pub server_error: Option<String>,
    pub success_message: Option<String>,
    /// A request is in flight; submission is refused until it settles.
    pub loading: bool,
}

impl FormState {
    #[must_use]
    pub fn value(&self, field: &str) -> &str {
        self.values.get(field).map_or("", String::as_str)
    }

    pub fn set_value(&mut self, field: &'static str, value: impl Into<String>) {
        self.values.insert(field, value.into());
    }

    #[must_use]
    pub fn field_error(&self, field: &str) -> Option<&'static str> {
        self.field_errors.get(field).copied()
    }
}

/// Navigation to perform once `after` has elapsed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Redirect {
    pub to: &'static str,
    pub after: Duration,
}

/// Runs the validate → submit → reconcile cycle for one `FormSpec`.
#[derive(Clone)]
pub struct FormController {
    spec: &'static FormSpec,
    endpoint: String,
    http: SharedHttp,
    credentials: CredentialStore,
}

impl FormController {
    #[must_use]
    pub fn new(spec: &'static FormSpec, services: &AuthServices) -> Self {
        Self {
            spec,
            endpoint: services.endpoints.for_form(spec.kind).to_owned(),
            http: services.http.clone(),
            credentials: services.credentials.clone(),
        }
    }

    /// Start a submission: clear previous messages, validate, and mark the
    /// form loading. Returns the request body, or `None` when a request is
    /// already in flight or validation failed (errors are left in `state`).
    pub fn begin(&self, state: &mut FormState) -> Option<serde_json::Value> {
        if state.loading {
            return None;
        }
        state.field_errors.clear();
        state.server_error = None;
        state.success_message = None;

        let validation = validate(self.spec, &state.values);
        if !validation.is_valid() {
            state.field_errors = validation.field_errors;
            return None;
        }
        state.loading = true;
        Some(self.spec.payload(&state.values))
    }

    /// Issue the request for a body produced by `begin`.
    pub async fn send(&self, payload: &serde_json::Value) -> Outcome {
        Outcome::from_result(self.http.post_json(&self.endpoint, payload).await)
    }

    /// Apply `outcome` to `state`. Returns the redirect to schedule on success.
    pub fn finish(&self, state: &mut FormState, outcome: Outcome) -> Option<Redirect> {
        state.loading = false;
        match outcome {
            Outcome::Success { token, message } => {
                if self.spec.persist_token {
                    if let Err(e) = self.credentials.write(token.as_deref()) {
                        log::error!("error during {}: {e}", self.spec.kind);
                        state.server_error = Some(GENERIC_FAILURE_MESSAGE.to_owned());
                        return None;
                    }
                }
                if let Some(text) = &message {
                    log::info!("{}: {text}", self.spec.kind);
                }
                state.success_message = Some(message.unwrap_or_else(|| self.spec.success_message.to_owned()));
                Some(Redirect { to: self.spec.redirect_to, after: self.spec.redirect_after })
            }
            Outcome::Rejected { status, error } => {
                log::warn!("{} rejected with status {status}", self.spec.kind);
                state.server_error = Some(error.unwrap_or_else(|| self.spec.failure_message.to_owned()));
                None
            }
            Outcome::Failed(reason) => {
                log::error!("error during {}: {reason}", self.spec.kind);
                state.server_error = Some(GENERIC_FAILURE_MESSAGE.to_owned());
                None
            }
        }
    }

    /// `finish` for a response that may arrive after the page is gone.
    /// Once `scope` is released the outcome is dropped: `state` is left as is,
    /// nothing is persisted, and no redirect is returned.
    pub fn settle(&self, scope: &ScopeFlag, state: &mut FormState, outcome: Outcome) -> Option<Redirect> {
        if !scope.is_live() {
            log::debug!("{} response dropped after teardown", self.spec.kind);
            return None;
        }
        self.finish(state, outcome)
    }

    /// Whole cycle in one call, for callers that hold the state across the
    /// request.
    pub async fn submit(&self, state: &mut FormState) -> Option<Redirect> {
        let payload = self.begin(state)?;
        let outcome = self.send(&payload).await;
        self.finish(state, outcome)
    }
}
