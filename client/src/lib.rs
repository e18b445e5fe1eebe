//! # client
//!
//! Leptos + WASM frontend for the Kala Connect artist booking marketplace.
//!
//! This crate contains pages, components, per-panel dashboard state, the
//! data contract shared with a future booking API, and the seed data that
//! stands in for that API today.

#![recursion_limit = "256"]

pub mod app;
pub mod components;
pub mod error;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: installs panic/log hooks and hydrates the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
