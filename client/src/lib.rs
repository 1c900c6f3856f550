//! # elegance-client
//!
//! Leptos + WASM frontend for the Elegance showcase page: a hero carousel
//! driven by wheel/touch gestures and a full-screen overlay menu with
//! choreographed open/close motion.
//!
//! Gesture gating, slide indexing and preview history live in plain state
//! machines under [`state`] so they can be exercised natively. Browser-only
//! glue (Web Animations, window listeners, image preloading) is compiled
//! under the `hydrate` feature.

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs logging and hydrates the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
