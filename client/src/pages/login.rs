//! Login page: email + password, stores the session token on success.

use leptos::prelude::*;

use crate::components::auth_form::AuthForm;
use crate::state::form::{FormSpec, LOGIN_FORM};

#[component]
pub fn LoginPage() -> impl IntoView {
    let spec: &'static FormSpec = &LOGIN_FORM;
    view! { <AuthForm spec=spec/> }
}
