//! # chat-client
//!
//! Leptos + WASM frontend for the session chat service: a sign-in view and
//! an authenticated chat view behind a session-gated navigation controller.
//!
//! Startup runs `plugins` registration, then `app::ApplicationRoot::create`
//! and a single `mount` into the host element. Navigation decisions live in
//! `router` and are pure functions of the route table and `state::session`.

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod logging;
pub mod net;
pub mod pages;
pub mod plugins;
pub mod router;
pub mod state;

/// Browser entry point. Reads the embedded configuration, then boots; a
/// startup failure is thrown as a JS error.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() -> Result<(), wasm_bindgen::JsValue> {
    config::AppConfig::load()
        .map_err(error::BootError::from)
        .and_then(app::boot)
        .map_err(|err| {
            log::error!("startup aborted: {err}");
            wasm_bindgen::JsValue::from_str(&err.to_string())
        })
}
