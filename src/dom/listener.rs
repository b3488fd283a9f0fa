//! Event listeners that detach themselves.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Event, EventTarget};

use crate::error::SiteError;
use crate::util::resources::{Dispose, Subscriptions};

/// A DOM event listener owning its Rust closure.
///
/// Disposing (or dropping) removes the listener before the closure is freed,
/// so the browser never calls into a dropped closure.
pub struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
    attached: bool,
}

impl Listener {
    pub fn new(
        target: &EventTarget,
        event: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> Result<Self, SiteError> {
        let callback = Closure::<dyn FnMut(Event)>::new(handler);
        target
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .map_err(|e| SiteError::Dom(format!("adding {event} listener: {e:?}")))?;
        Ok(Self { target: target.clone(), event, callback, attached: true })
    }
}

impl Dispose for Listener {
    fn dispose(&mut self) {
        if !self.attached {
            return;
        }
        self.attached = false;
        if let Err(err) =
            self.target.remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref())
        {
            log::debug!("removing {} listener: {err:?}", self.event);
        }
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        self.dispose();
    }
}

/// Attach `handler` and track the listener in `subs`; failures are logged.
pub fn listen(
    subs: &mut Subscriptions,
    target: &EventTarget,
    event: &'static str,
    handler: impl FnMut(Event) + 'static,
) {
    match Listener::new(target, event, handler) {
        Ok(listener) => subs.track(event, listener),
        Err(err) => log::warn!("{err}"),
    }
}
