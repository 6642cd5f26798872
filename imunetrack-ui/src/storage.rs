//! Browser Storage
//!
//! `localStorage` provider for the client session and preferences.

use imunetrack::session::{Storage, StorageError, StorageResult};
use imunetrack::Config;
use wasm_bindgen::JsValue;

/// Keys that override the service URLs, set from the browser console
pub const AUTH_URL_KEY: &str = "imunetrack_auth_url";
pub const API_URL_KEY: &str = "imunetrack_api_url";

/// The window's `localStorage`, looked up on every access
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

fn unavailable(err: JsValue) -> StorageError {
    StorageError::Unavailable(format!("{:?}", err))
}

fn local_storage() -> StorageResult<web_sys::Storage> {
    let window = web_sys::window()
        .ok_or_else(|| StorageError::Unavailable("no window".to_string()))?;
    window
        .local_storage()
        .map_err(unavailable)?
        .ok_or_else(|| StorageError::Unavailable("localStorage disabled".to_string()))
}

impl Storage for LocalStorage {
    fn get_item(&self, key: &str) -> StorageResult<Option<String>> {
        local_storage()?.get_item(key).map_err(unavailable)
    }

    fn set_item(&self, key: &str, value: &str) -> StorageResult<()> {
        local_storage()?.set_item(key, value).map_err(unavailable)
    }

    fn remove_item(&self, key: &str) -> StorageResult<()> {
        local_storage()?.remove_item(key).map_err(unavailable)
    }
}

/// Default configuration with any service URLs saved in `localStorage`
pub fn load_config() -> Config {
    let mut config = Config::default();
    let storage = LocalStorage;
    if let Ok(Some(url)) = storage.get_item(AUTH_URL_KEY) {
        config.api.auth_url = url;
    }
    if let Ok(Some(url)) = storage.get_item(API_URL_KEY) {
        config.api.resource_url = url;
    }
    config
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use imunetrack::session::{Preferences, Theme, THEME_KEY};
    use wasm_bindgen_test::*;

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn local_storage_round_trip() {
        let storage = LocalStorage;
        storage.set_item("imunetrack_test", "{\"id\":1}").unwrap();
        assert_eq!(
            storage.get_item("imunetrack_test").unwrap().as_deref(),
            Some("{\"id\":1}")
        );

        storage.remove_item("imunetrack_test").unwrap();
        assert_eq!(storage.get_item("imunetrack_test").unwrap(), None);
    }

    #[wasm_bindgen_test]
    fn preferences_read_back_from_local_storage() {
        let storage = LocalStorage;
        Preferences::save_theme(&storage, Theme::Dark).unwrap();
        assert_eq!(Preferences::load(&storage).theme, Theme::Dark);
        storage.remove_item(THEME_KEY).unwrap();
    }

    #[wasm_bindgen_test]
    fn service_urls_overridable() {
        let storage = LocalStorage;
        storage.set_item(API_URL_KEY, "http://api.test/").unwrap();

        let config = load_config();
        assert_eq!(config.api.resource_url, "http://api.test/");
        assert_eq!(config.api.auth_url, Config::default().api.auth_url);

        storage.remove_item(API_URL_KEY).unwrap();
    }
}
