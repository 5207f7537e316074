use wasm_bindgen::prelude::*;

mod api;
mod app;
mod components;
pub mod config;
pub mod error;
pub mod filename;
pub mod filter;
pub mod model;
pub mod state;

#[wasm_bindgen(start)]
pub fn run_app() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    yew::Renderer::<app::App>::new().render();
}
