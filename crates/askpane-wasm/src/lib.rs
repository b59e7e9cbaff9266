//! Browser bindings for askpane
//!
//! Binds the page's search box and chat panel to the query backend: DOM
//! helpers, a `gloo-net` implementation of the backend client, a `web-sys`
//! implementation of the view binding, and the entry points that attach
//! event listeners.

use wasm_bindgen::prelude::*;

mod app;
mod dom;
mod http;
mod utils;
mod view;

pub use app::AskpaneApp;
pub use http::HttpQueryService;
pub use view::{DomView, ElementIds};

/// Initialize the WASM application
/// This sets up panic hooks and logging
#[wasm_bindgen(start)]
pub fn init() {
    // Set panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    wasm_logger::init(wasm_logger::Config::default());

    log::info!("askpane WASM initialized");
}

/// Bind the page's controls to the query backend
#[wasm_bindgen]
pub fn init_app() -> Result<(), JsValue> {
    AskpaneApp::new()?.start()
}
