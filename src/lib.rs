//! # wifi-portal
//!
//! Leptos + WASM client for a WiFi subscription portal. Visitors sign up or
//! sign in, browse time-limited access plans, buy one, and manage their
//! subscriptions against a JSON backend.
//!
//! This crate contains pages, components, client state, the session layer,
//! and the HTTP client. Browser-only pieces sit behind the `csr` feature so
//! the rest builds and tests natively.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod services;
pub mod session;
pub mod state;
pub mod util;

#[cfg(test)]
pub(crate) mod testing;

/// WASM entry point: install panic and log hooks, then mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger already installed: {err}");
    }
    leptos::mount::mount_to_body(app::App);
}
