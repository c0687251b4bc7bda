//! `window.localStorage` behind the session repository.

use contracts::system::session::repository::{KeyValueStore, StorageError};
use web_sys::window;

/// TOML document overriding the embedded configuration.
const CONFIG_OVERRIDE_KEY: &str = "app_config";

fn get_local_storage() -> Result<web_sys::Storage, StorageError> {
    window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or(StorageError::Unavailable)
}

/// Stateless handle; every call goes to the browser storage, so the value is
/// `Send + Sync` and can live inside a signal.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl KeyValueStore for BrowserStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        get_local_storage()?
            .get_item(key)
            .map_err(|_| StorageError::Unavailable)
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        get_local_storage()?
            .set_item(key, value)
            .map_err(|e| StorageError::Write {
                key: key.to_string(),
                reason: format!("{e:?}"),
            })
    }

    fn remove_item(&mut self, key: &str) -> Result<(), StorageError> {
        get_local_storage()?
            .remove_item(key)
            .map_err(|e| StorageError::Write {
                key: key.to_string(),
                reason: format!("{e:?}"),
            })
    }
}

/// Get the configuration override from localStorage, if any
pub fn config_override() -> Option<String> {
    get_local_storage().ok()?.get_item(CONFIG_OVERRIDE_KEY).ok()?
}
