//! Pure helpers behind the page controller.
//!
//! SYSTEM CONTEXT
//! ==============
//! Everything here is browser-independent and unit tested natively. The
//! `dom` layer reads the document, calls into these modules, and writes the
//! results back.

pub mod debounce;
pub mod gallery;
pub mod generations;
pub mod i18n;
pub mod render;
pub mod resources;
pub mod scroll;
pub mod search;
pub mod storage;
pub mod widgets;
