//! Landing page greeting the signed-in user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Fetches user data once per mount with the stored token. Without a token
//! the page still renders, just without a name.

use leptos::prelude::*;

use crate::state::landing::{LandingState, report_stored_token};
use crate::state::services::AuthServices;
use crate::util::lifecycle::ScopeFlag;

#[component]
pub fn HomePage() -> impl IntoView {
    let services = expect_context::<AuthServices>();
    let landing = RwSignal::new(LandingState::default());
    let scope = ScopeFlag::bound_to_owner();

    #[cfg(feature = "hydrate")]
    {
        let services = services.clone();
        let scope = scope.clone();
        leptos::task::spawn_local(async move {
            let user = crate::state::landing::load_user_data(&services).await;
            landing.try_update(|s| s.accept(&scope, user));
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = &scope;

    let credentials = services.credentials.clone();
    let on_get_started = move |_| {
        report_stored_token(&credentials);
    };

    view! {
        <div class="container">
            <h1>{move || landing.with(LandingState::display_name)}</h1>
            <h1>"Welcome to Our Website"</h1>
            <button class="btn btn-primary" type="button" on:click=on_get_started>
                "Get Started"
            </button>
        </div>
    }
}
