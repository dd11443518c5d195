//! # client
//!
//! Leptos + WASM frontend for submitting and tracking requirements.
//!
//! Pages and components render the two tabs; all validation, payload
//! assembly, and result shaping lives in the `requirements` crate. This crate
//! only adds the browser bindings: the `gloo-net` endpoint, `web_sys::File`
//! attachments, and the contenteditable description editor.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;

/// WASM entry point: install logging and mount [`app::App`] on `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(app::App);
}
