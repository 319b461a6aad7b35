//! # client
//!
//! Leptos + WASM frontend for the room-booking login flow.
//!
//! This crate contains the home and login pages, the shared auth state, the
//! REST client for the authentication backend, and the bearer-token store.
//! The `server` crate renders it with SSR; the `hydrate` build attaches to
//! that markup in the browser.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install browser logging and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
