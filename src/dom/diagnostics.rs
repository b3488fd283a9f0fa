//! Window-level error reporting.

use wasm_bindgen::JsCast;
use web_sys::{ErrorEvent, PromiseRejectionEvent};

use super::listener::listen;
use crate::util::resources::Subscriptions;

/// Log uncaught script errors and unhandled promise rejections.
pub fn install(subs: &mut Subscriptions) {
    let Some(window) = web_sys::window() else {
        return;
    };
    listen(subs, &window, "error", |event| {
        if let Some(error) = event.dyn_ref::<ErrorEvent>() {
            log::error!(
                "uncaught error: {} at {}:{}:{}",
                error.message(),
                error.filename(),
                error.lineno(),
                error.colno()
            );
        }
    });
    listen(subs, &window, "unhandledrejection", |event| {
        if let Some(rejection) = event.dyn_ref::<PromiseRejectionEvent>() {
            log::error!("unhandled promise rejection: {:?}", rejection.reason());
        }
    });
}
