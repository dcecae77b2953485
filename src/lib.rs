//! # helpdesk-client
//!
//! Leptos + WASM frontend for the clinic support-desk ticket system
//! ("chamados"). A thin client over the REST backend: login/session
//! management, ticket list/detail/create/edit views, comment threads,
//! and a managerial dashboard.
//!
//! This crate contains pages, components, application state, and the
//! REST API layer. Browser-only code (HTTP, localStorage, file inputs)
//! is gated behind the `hydrate` feature with SSR stubs.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
