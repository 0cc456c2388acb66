//! Browser Storage
//!
//! `KeyValueStore` over `window.localStorage`. The handle is looked up on
//! every call so the type stays `Send + Sync` and can live in a signal.

use todo_core::{KeyValueStore, StoreError, StoreResult};
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

impl LocalStorage {
    fn handle() -> StoreResult<web_sys::Storage> {
        let window = web_sys::window()
            .ok_or_else(|| StoreError::Unavailable("no window".to_string()))?;
        window
            .local_storage()
            .map_err(js_error)?
            .ok_or_else(|| StoreError::Unavailable("localStorage is disabled".to_string()))
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Self::handle()?.get_item(key).map_err(js_error)
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        Self::handle()?.set_item(key, value).map_err(js_error)
    }
}

fn js_error(err: JsValue) -> StoreError {
    StoreError::Backend(err.as_string().unwrap_or_else(|| format!("{:?}", err)))
}

/// Current time in milliseconds since the epoch
pub fn now_millis() -> i64 {
    js_sys::Date::now() as i64
}
