//! Scoped registry of disposable subscriptions.
//!
//! Every listener, observer and pending timer the controller creates is
//! registered here so a teardown path can release them. Disposal runs in
//! reverse registration order, like nested scopes unwinding.

#[cfg(test)]
#[path = "resources_test.rs"]
mod resources_test;

/// Something holding a browser-side registration that must be released.
pub trait Dispose {
    /// Release the registration. Must be safe to call more than once.
    fn dispose(&mut self);
}

#[derive(Default)]
pub struct Subscriptions {
    entries: Vec<(&'static str, Box<dyn Dispose>)>,
}

impl Subscriptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Track `handle` under a short label used in debug logs.
    pub fn track(&mut self, label: &'static str, handle: impl Dispose + 'static) {
        self.entries.push((label, Box::new(handle)));
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.entries.len()
    }

    /// Dispose every tracked handle, newest first, and forget them.
    pub fn dispose_all(&mut self) {
        while let Some((label, mut handle)) = self.entries.pop() {
            log::debug!("disposing {label}");
            handle.dispose();
        }
    }
}

impl Drop for Subscriptions {
    fn drop(&mut self) {
        self.dispose_all();
    }
}
