//! # client
//!
//! Leptos + WASM frontend for the activity sign-up board.
//!
//! This crate fetches the activity snapshot from `/activities`, filters and
//! sorts it locally, renders the list with per-participant removal controls,
//! and runs the signup and unregister flows with a transient status message.
//! The `ssr` build renders the same components on the server; the `hydrate`
//! build attaches them in the browser and performs the network calls.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: installs console logging and hydrates the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
