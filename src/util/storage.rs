//! Key-value persistence for preferences.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser build stores preferences in `localStorage` (see
//! `dom::storage`); everything above this seam only sees
//! [`PreferenceStore`]. Reads never fail from the caller's point of view:
//! absent, unreadable and unparsable entries all collapse to the default.

#[cfg(test)]
#[path = "storage_test.rs"]
pub(crate) mod storage_test;

use crate::error::SiteError;
use crate::state::preferences::Preference;

/// Backend holding string preferences under fixed keys.
pub trait PreferenceStore {
    fn read(&self, key: &str) -> Result<Option<String>, SiteError>;

    fn write(&mut self, key: &str, value: &str) -> Result<(), SiteError>;
}

/// Read a preference, falling back to its default.
pub fn get_preference<P: Preference, S: PreferenceStore + ?Sized>(store: &S, key: &str) -> P {
    match store.read(key) {
        Ok(Some(token)) => P::from_token(&token).unwrap_or_else(|| {
            log::debug!("ignoring unknown {:?} token {token:?} under {key}", P::KIND);
            P::default()
        }),
        Ok(None) => P::default(),
        Err(err) => {
            log::debug!("reading {key} failed, using default: {err}");
            P::default()
        }
    }
}

/// Persist a preference under `key`.
pub fn set_preference<P: Preference, S: PreferenceStore + ?Sized>(
    store: &mut S,
    key: &str,
    value: P,
) -> Result<(), SiteError> {
    store.write(key, value.token())
}
