//! Web UI for menagerie-rs
//!
//! A Yew-based web interface over the animal records REST API: browse
//! the roster, see per-species counts, add and delete animals.

mod api;
mod app;
mod components;

pub use app::App;

use wasm_bindgen::prelude::*;

/// Entry point for the WASM application.
#[wasm_bindgen(start)]
pub fn run_app() {
    // Initialize panic hook for better error messages
    console_error_panic_hook::set_once();

    // Route log macros to the browser console
    wasm_logger::init(wasm_logger::Config::default());

    // Mount the Yew app
    yew::Renderer::<App>::new().render();
}
