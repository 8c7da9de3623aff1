// Copyright 2026 The Matrix.org Foundation C.I.C.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! The browser's `window.localStorage`.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{DomException, Storage};

use super::{KeyValueStore, StoreError};

pub struct LocalStorage {
    storage: Storage,
}

impl LocalStorage {
    /// Open the page's local storage. Fails when there is no window (for
    /// example in a worker) or storage is disabled.
    pub fn open() -> Result<Self, StoreError> {
        let window = web_sys::window().ok_or(StoreError::Unavailable)?;
        let storage = window
            .local_storage()
            .map_err(to_store_error)?
            .ok_or(StoreError::Unavailable)?;
        Ok(Self { storage })
    }
}

impl KeyValueStore for LocalStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.storage.get_item(key).map_err(to_store_error)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.storage.set_item(key, value).map_err(to_store_error)
    }

    fn remove_item(&self, key: &str) -> Result<(), StoreError> {
        self.storage.remove_item(key).map_err(to_store_error)
    }
}

fn to_store_error(err: JsValue) -> StoreError {
    match err.dyn_into::<DomException>() {
        Ok(exception) => match exception.name().as_str() {
            "QuotaExceededError" | "NS_ERROR_DOM_QUOTA_REACHED" => {
                StoreError::QuotaExceeded
            }
            "SecurityError" => StoreError::Unavailable,
            _ => StoreError::Backend(exception.message()),
        },
        Err(other) => StoreError::Backend(format!("{other:?}")),
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use wasm_bindgen_test::*;

    use super::*;

    wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn set_get_and_remove() {
        let store = LocalStorage::open().unwrap();
        store.set_item("autoformat-test", "value").unwrap();
        assert_eq!(
            store.get_item("autoformat-test").unwrap().as_deref(),
            Some("value")
        );
        store.remove_item("autoformat-test").unwrap();
        assert_eq!(store.get_item("autoformat-test").unwrap(), None);
    }
}
