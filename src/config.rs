/// Runtime configuration passed in from the host page
use serde::Deserialize;

pub const DEFAULT_RELAY_PREFIX: &str = "https://corsproxy.io/?";
pub const DEFAULT_STORAGE_KEY: &str = "pastebin_quick_url";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// CORS relay prefix; the percent-encoded target URL is appended. `None` fetches directly.
    pub relay_prefix: Option<String>,
    /// localStorage key holding the quick-open paste URL
    pub storage_key: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            relay_prefix: Some(DEFAULT_RELAY_PREFIX.to_string()),
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
        }
    }
}
