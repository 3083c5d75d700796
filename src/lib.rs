/// Paste Opener - extract and open links from pastebin URLs
/// Built with Rust + WASM + Yew

pub mod browser;
pub mod config;
pub mod error;
pub mod fetch;
pub mod links;
pub mod paste_url;
pub mod storage;
pub mod ui;

use wasm_bindgen::prelude::*;

use crate::config::AppConfig;

// Set up panic hook for better error messages in the browser console
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
}

// Re-export the core text functions for JavaScript access
#[wasm_bindgen]
pub fn normalize_paste_url(input: &str) -> String {
    paste_url::normalize(input)
}

#[wasm_bindgen]
pub fn extract_links(text: &str) -> Vec<String> {
    links::extract_links(text)
}

// Start the Yew app with the default relay and storage key
#[wasm_bindgen]
pub fn start_app() {
    yew::Renderer::<ui::app::App>::new().render();
}

// Start the Yew app with settings from a plain JS object, e.g. `{ relay_prefix: null }`
#[wasm_bindgen]
pub fn start_app_with_config(config: JsValue) -> Result<(), JsValue> {
    let config: AppConfig = if config.is_null() || config.is_undefined() {
        AppConfig::default()
    } else {
        serde_wasm_bindgen::from_value(config)
            .map_err(|e| JsValue::from_str(&format!("Invalid config: {}", e)))?
    };
    log::info!("Starting with {:?}", config);

    yew::Renderer::<ui::app::App>::with_props(ui::app::AppProps { config }).render();
    Ok(())
}
