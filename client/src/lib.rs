//! # client
//!
//! Leptos + WASM frontend for the item list manager.
//!
//! This crate contains the item list page, its state and procedures, and
//! the REST helpers for `/api/items`. Browser-only dependencies sit behind
//! the `csr` feature so the crate and its tests also build natively.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;

/// WASM entry point: install browser logging and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger already installed: {e}");
    }
    leptos::mount::mount_to_body(app::App);
}
