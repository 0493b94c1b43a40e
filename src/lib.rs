//! # fitportal-web
//!
//! Leptos + WASM frontend for the FitPortal training application.
//! Talks to the JSON REST backend for authentication, the user profile,
//! training plans, and the teaching-video library.
//!
//! This crate contains pages, components, application state, network
//! wrappers, and the navigation guard that gates authenticated routes.
//! Browser-only code is gated behind the `hydrate` feature so the pure
//! logic stays testable on the host.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

/// WASM entry point that mounts the application into the browser document.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
