//! # client
//!
//! Leptos + WASM operations console for the school-transport platform.
//!
//! This crate contains the route pages, reusable table/dialog components,
//! session and UI state, and the networking layer that reaches the upstream
//! REST API through the server's `/api` proxy. Shared wire types live in the
//! `wire` crate.

#![recursion_limit = "256"]

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
