//! Sign-up page: name, email and password; sends the user to login on success.

use leptos::prelude::*;

use crate::components::auth_form::AuthForm;
use crate::state::form::{FormSpec, SIGNUP_FORM};

#[component]
pub fn SignUpPage() -> impl IntoView {
    let spec: &'static FormSpec = &SIGNUP_FORM;
    view! { <AuthForm spec=spec/> }
}
