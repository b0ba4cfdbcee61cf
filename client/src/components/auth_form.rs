//! Form component shared by the login and signup pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Renders the fields described by a `FormSpec`, runs submissions through
//! `FormController`, and schedules the success redirect. The submit button is
//! disabled while a request is in flight, and the controller independently
//! refuses a second submission until the first settles.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::form::{FormController, FormSpec, FormState};
use crate::state::services::AuthServices;
use crate::util::lifecycle::ScopeFlag;

#[component]
pub fn AuthForm(spec: &'static FormSpec) -> impl IntoView {
    let services = expect_context::<AuthServices>();
    let controller = FormController::new(spec, &services);
    let form = RwSignal::new(FormState::default());
    let scope = ScopeFlag::bound_to_owner();
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(payload) = form.try_update(|state| controller.begin(state)).flatten() else {
            return;
        };

        #[cfg(feature = "hydrate")]
        {
            let controller = controller.clone();
            let scope = scope.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let outcome = controller.send(&payload).await;
                let redirect = form.try_update(|state| controller.settle(&scope, state, outcome)).flatten();
                if let Some(redirect) = redirect {
                    gloo_timers::future::sleep(redirect.after).await;
                    if scope.is_live() {
                        navigate(redirect.to, NavigateOptions::default());
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (payload, &scope, &navigate);
        }
    };

    let fields = spec
        .fields
        .iter()
        .map(|field| {
            let name = field.name;
            view! {
                <div class="form-group mb-3">
                    <label class="form-label">{field.label}</label>
                    <input
                        class="form-control"
                        type=field.input_type
                        name=name
                        placeholder=field.placeholder
                        prop:value=move || form.with(|s| s.value(name).to_owned())
                        on:input=move |ev| form.update(|s| s.set_value(name, event_target_value(&ev)))
                    />
                    {move || {
                        form.with(|s| s.field_error(name))
                            .map(|message| view! { <p class="text-danger mt-1">{message}</p> })
                    }}
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="container">
            <h1>{spec.title}</h1>
            <form on:submit=on_submit>
                {fields}
                <Show when=move || form.with(|s| s.server_error.is_some())>
                    <p class="text-danger mt-3" aria-live="assertive">
                        {move || form.with(|s| s.server_error.clone().unwrap_or_default())}
                    </p>
                </Show>
                <Show when=move || form.with(|s| s.success_message.is_some())>
                    <p class="text-success mt-3" aria-live="polite">
                        {move || form.with(|s| s.success_message.clone().unwrap_or_default())}
                    </p>
                </Show>
                <button class="btn btn-primary" type="submit" disabled=move || form.with(|s| s.loading)>
                    {move || {
                        if form.with(|s| s.loading) {
                            view! { <span class="spinner-border spinner-border-sm" role="status"></span> }
                                .into_any()
                        } else {
                            spec.submit_label.into_any()
                        }
                    }}
                </button>
            </form>
            <div class="d-flex mt-4">
                <p class="me-2">{spec.switch_prompt}</p>
                <a href=spec.switch_href class="link">
                    "Click Here"
                </a>
            </div>
        </div>
    }
}
