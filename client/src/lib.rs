//! # client
//!
//! Leptos + WASM frontend for the solubility reference site.
//!
//! This crate contains the page, its components, client-side state, the
//! dataset loader, and small browser helpers (clipboard, theme, scrolling).
//! All chemistry logic lives in `chemref`; this crate only binds it to the DOM.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
