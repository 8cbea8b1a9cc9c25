//! `localStorage`-backed preference store.

use web_sys::{Storage, Window};

use crate::error::StoreError;
use crate::store::PreferenceStore;

/// Reads and writes `window.localStorage`. Behaves as an empty, read-only
/// store when storage is blocked.
pub(crate) struct LocalStorageStore {
    storage: Option<Storage>,
}

impl LocalStorageStore {
    pub fn from_window(window: &Window) -> Self {
        let storage = match window.local_storage() {
            Ok(storage) => storage,
            Err(err) => {
                log::debug!("localStorage blocked: {err:?}");
                None
            }
        };
        Self { storage }
    }
}

impl PreferenceStore for LocalStorageStore {
    fn get(&self, key: &str) -> Option<String> {
        let storage = self.storage.as_ref()?;
        match storage.get_item(key) {
            Ok(value) => value,
            Err(err) => {
                log::debug!("localStorage read of {key:?} failed: {err:?}");
                None
            }
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let storage = self.storage.as_ref().ok_or(StoreError::Unavailable)?;
        storage.set_item(key, value).map_err(|err| StoreError::Rejected(format!("{err:?}")))
    }
}
