//! # storefront
//!
//! Leptos + WASM single-page storefront for assembling a parts project:
//! section navigation with back-history, filterable catalogs, a running
//! project estimate, and a local-storage login gate.
//!
//! Behavior lives in plain state objects under `state` so it can be tested
//! natively; `components` and `pages` only render those states and forward
//! UI events to their operations. Browser glue lives in `util` behind the
//! `csr` feature.

pub mod app;
pub mod components;
pub mod config;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install logging and mount the application.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        web_sys::console::warn_1(&"console logger already installed".into());
    }
    leptos::mount::mount_to_body(app::App);
}
