//! Page controller for the Hyundai Coupe (Tiburon) generations guide.
//!
//! This crate is compiled to WebAssembly and enhances server-authored static
//! markup: theme and language toggles, search-and-highlight over the spec
//! lists, scroll-driven navigation state, an image viewer, a video playlist,
//! and visibility-triggered reveals. Every decision lives in browser-free
//! modules that are unit tested natively; the `dom` module (behind the
//! `hydrate` feature) only reads the document and applies results.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`site`] | [`site::SiteCore`]: preference owner, persistence, change hooks |
//! | [`config`] | [`config::SiteConfig`] with defaults and validation |
//! | [`error`] | [`error::SiteError`] and the `or_log` helper |
//! | [`state`] | Preference values and playlist selection state |
//! | [`util`] | Pure helpers: i18n, render values, search, scroll, gallery, debounce, storage |
//! | `dom` | Browser layer (`hydrate` feature only) |

pub mod config;
pub mod error;
pub mod site;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
pub mod dom;
