//! Crate error type and best-effort result helpers.
//!
//! Browser calls made by the page controller are almost all best-effort: a
//! missing element or a throwing storage backend must never stop the page.
//! [`ResultExt::or_log`] is the single place where such failures are turned
//! into `None`, so nothing is dropped without leaving a trace in the console.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use std::fmt::Debug;

/// Errors raised by the page controller.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SiteError {
    /// The browser refused to hand out a storage object.
    #[error("preference storage is unavailable")]
    StorageUnavailable,
    /// A storage write was rejected (quota, private mode, denied).
    #[error("failed to persist {key}: {reason}")]
    StorageWrite { key: String, reason: String },
    /// The `#site-config` block could not be used.
    #[error("invalid site config: {0}")]
    InvalidConfig(String),
    /// A DOM call failed.
    #[error("dom operation failed: {0}")]
    Dom(String),
}

/// Best-effort conversion of a fallible call into an `Option`.
pub trait ResultExt<T> {
    /// Return the success value, logging the error at debug level otherwise.
    fn or_log(self, context: &str) -> Option<T>;
}

impl<T, E: Debug> ResultExt<T> for Result<T, E> {
    fn or_log(self, context: &str) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(err) => {
                log::debug!("{context}: {err:?}");
                None
            }
        }
    }
}
