/// Persistence of the single quick-open paste URL

use crate::error::OpenerError;
use crate::paste_url::validate_paste_url;

/// A string key-value store such as `window.localStorage`
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, OpenerError>;
    fn set(&self, key: &str, value: &str) -> Result<(), OpenerError>;
    fn remove(&self, key: &str) -> Result<(), OpenerError>;
}

/// The saved quick-open URL, held under one fixed key
pub struct QuickLinkStore<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> QuickLinkStore<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        QuickLinkStore {
            store,
            key: key.into(),
        }
    }

    /// Read the saved URL; blank values count as unset
    pub fn load(&self) -> Result<Option<String>, OpenerError> {
        Ok(self
            .store
            .get(&self.key)?
            .filter(|value| !value.trim().is_empty()))
    }

    /// Validate and persist a paste URL, overwriting any previous one
    ///
    /// An invalid URL is rejected and the stored value is left untouched.
    pub fn save(&self, input: &str) -> Result<String, OpenerError> {
        let url = validate_paste_url(input)?;
        self.store.set(&self.key, &url)?;
        log::info!("Saved quick-open URL {}", url);
        Ok(url)
    }

    pub fn clear(&self) -> Result<(), OpenerError> {
        self.store.remove(&self.key)?;
        log::info!("Cleared quick-open URL");
        Ok(())
    }
}
