//! # authpages-client
//!
//! Leptos + WASM frontend with three routes: a landing page that greets the
//! signed-in user, and login and sign-up forms backed by an external
//! authentication API.
//!
//! Form pages share one validate → submit → reconcile flow
//! (`state::form`); the session token lives in browser storage behind
//! `state::credentials`.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(test)]
mod test_support;

/// Browser entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    let _ = console_log::init_with_level(level);
    leptos::mount::hydrate_body(app::App);
}
