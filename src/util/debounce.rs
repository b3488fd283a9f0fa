//! Trailing-edge debounce.
//!
//! [`DebounceGate`] holds the bookkeeping: every call arms a new ticket and
//! only the newest ticket may fire. In the browser build [`Debouncer`] pairs
//! the gate with a `gloo_timers` timeout; replacing the stored timeout
//! cancels the previous one, and [`Dispose`](crate::util::resources::Dispose)
//! cancels whatever is still pending.

#[cfg(test)]
#[path = "debounce_test.rs"]
mod debounce_test;

/// Identifies one armed call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Clone, Debug, Default)]
pub struct DebounceGate {
    latest: u64,
    pending: bool,
}

impl DebounceGate {
    /// Register a call; any earlier ticket is superseded.
    pub fn arm(&mut self) -> Ticket {
        self.latest += 1;
        self.pending = true;
        Ticket(self.latest)
    }

    /// Whether `ticket` is allowed to run. Consumes the pending call.
    pub fn fire(&mut self, ticket: Ticket) -> bool {
        if self.pending && ticket.0 == self.latest {
            self.pending = false;
            true
        } else {
            false
        }
    }

    /// Drop the pending call, if any.
    pub fn cancel(&mut self) {
        self.pending = false;
    }
}

#[cfg(feature = "hydrate")]
pub use browser::Debouncer;

#[cfg(feature = "hydrate")]
mod browser {
    use std::cell::RefCell;
    use std::rc::Rc;

    use gloo_timers::callback::Timeout;

    use super::DebounceGate;
    use crate::util::resources::Dispose;

    /// Runs the most recent callback once calls pause for `delay_ms`.
    pub struct Debouncer {
        delay_ms: u32,
        gate: Rc<RefCell<DebounceGate>>,
        timeout: RefCell<Option<Timeout>>,
    }

    impl Debouncer {
        #[must_use]
        pub fn new(delay_ms: u32) -> Self {
            Self { delay_ms, gate: Rc::new(RefCell::new(DebounceGate::default())), timeout: RefCell::new(None) }
        }

        pub fn call(&self, f: impl FnOnce() + 'static) {
            let ticket = self.gate.borrow_mut().arm();
            let gate = Rc::clone(&self.gate);
            let timeout = Timeout::new(self.delay_ms, move || {
                let ready = gate.borrow_mut().fire(ticket);
                if ready {
                    f();
                }
            });
            // Dropping the previous timeout cancels it.
            drop(self.timeout.replace(Some(timeout)));
        }

        /// Cancel the pending call, if any.
        pub fn cancel(&self) {
            self.gate.borrow_mut().cancel();
            drop(self.timeout.take());
        }
    }

    impl Dispose for Rc<Debouncer> {
        fn dispose(&mut self) {
            self.cancel();
        }
    }
}
