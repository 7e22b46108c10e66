//! # simsearch-client
//!
//! Leptos + WASM frontend for the visual similarity search demo.
//! Replaces the vanilla-JS static widget with a Rust-native UI layer.
//!
//! This crate contains the search page, result card components, the
//! search state model, and the HTTP client for the backend `/search`
//! endpoint. The backend owns embeddings and the vector index; this
//! crate only drives the query -> response -> render loop.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point for client-side hydration.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(crate::app::App);
}
