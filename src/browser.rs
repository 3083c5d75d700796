/// Browser-backed collaborators: fetch, localStorage and tab opening
use crate::error::OpenerError;
use crate::fetch::{HttpClient, HttpResponse};
use crate::storage::KeyValueStore;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Response, Storage, Window};

/// Best-effort readable message from a thrown JS value
pub fn js_error_message(value: &JsValue) -> String {
    if let Some(text) = value.as_string() {
        return text;
    }
    match value.dyn_ref::<js_sys::Error>() {
        Some(error) => String::from(error.message()),
        None => format!("{:?}", value),
    }
}

fn window() -> Result<Window, OpenerError> {
    web_sys::window().ok_or(OpenerError::NoWindow)
}

/// `window.fetch` GET client
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BrowserClient;

impl HttpClient for BrowserClient {
    async fn get_text(&self, url: &str) -> Result<HttpResponse, OpenerError> {
        let network = |e: JsValue| OpenerError::Network(js_error_message(&e));

        let response_js = JsFuture::from(window()?.fetch_with_str(url))
            .await
            .map_err(network)?;
        let response: Response = response_js.dyn_into().map_err(network)?;

        let status = response.status();
        let body = JsFuture::from(response.text().map_err(network)?)
            .await
            .map_err(network)?
            .as_string()
            .unwrap_or_default();

        Ok(HttpResponse { status, body })
    }
}

/// `window.localStorage`
pub struct LocalStorage {
    storage: Storage,
}

impl LocalStorage {
    pub fn open() -> Result<Self, OpenerError> {
        let storage = window()?
            .local_storage()
            .map_err(|e| OpenerError::Storage(js_error_message(&e)))?
            .ok_or_else(|| OpenerError::Storage("localStorage is disabled".to_string()))?;
        Ok(LocalStorage { storage })
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, OpenerError> {
        self.storage
            .get_item(key)
            .map_err(|e| OpenerError::Storage(js_error_message(&e)))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), OpenerError> {
        self.storage
            .set_item(key, value)
            .map_err(|e| OpenerError::Storage(js_error_message(&e)))
    }

    fn remove(&self, key: &str) -> Result<(), OpenerError> {
        self.storage
            .remove_item(key)
            .map_err(|e| OpenerError::Storage(js_error_message(&e)))
    }
}

/// Open a link in a new tab and cut its `window.opener` link back to this page
///
/// `window.open` hands back `null` when a popup blocker stops it.
pub fn open_in_new_tab(url: &str) -> Result<(), OpenerError> {
    let opened = window()?
        .open_with_url_and_target(url, "_blank")
        .map_err(|e| {
            log::warn!("window.open failed for {}: {}", url, js_error_message(&e));
            OpenerError::PopupBlocked(url.to_string())
        })?;
    let tab = require_opened(url, opened)?;

    if let Err(e) = tab.set_opener(&JsValue::NULL) {
        log::warn!("Could not clear opener for {}: {}", url, js_error_message(&e));
    }
    log::info!("Opened {}", url);
    Ok(())
}

fn require_opened<W>(url: &str, opened: Option<W>) -> Result<W, OpenerError> {
    opened.ok_or_else(|| {
        log::warn!("Popup blocked for {}", url);
        OpenerError::PopupBlocked(url.to_string())
    })
}
