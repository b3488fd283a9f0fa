//! `localStorage` backend for preferences.
//!
//! TRADE-OFFS
//! ==========
//! The storage object is looked up on every call instead of cached: private
//! browsing modes can revoke access mid-session, and a lookup is cheap next
//! to a click handler.

use web_sys::Storage;

use crate::error::SiteError;
use crate::util::storage::PreferenceStore;

#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStore;

impl LocalStore {
    fn storage() -> Result<Storage, SiteError> {
        let window = web_sys::window().ok_or(SiteError::StorageUnavailable)?;
        match window.local_storage() {
            Ok(Some(storage)) => Ok(storage),
            Ok(None) | Err(_) => Err(SiteError::StorageUnavailable),
        }
    }
}

impl PreferenceStore for LocalStore {
    fn read(&self, key: &str) -> Result<Option<String>, SiteError> {
        Self::storage()?.get_item(key).map_err(|_| SiteError::StorageUnavailable)
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), SiteError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| SiteError::StorageWrite { key: key.to_owned(), reason: format!("{e:?}") })
    }
}
