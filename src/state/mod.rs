//! Page state owned by the controller.
//!
//! DESIGN
//! ======
//! Only plain values live here. Browser handles and listeners belong to the
//! `dom` layer, which keeps these types testable without a document.

pub mod playlist;
pub mod preferences;
