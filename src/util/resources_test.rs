use std::cell::RefCell;
use std::rc::Rc;

use super::*;

struct Recorder {
    name: &'static str,
    log: Rc<RefCell<Vec<&'static str>>>,
}

impl Dispose for Recorder {
    fn dispose(&mut self) {
        self.log.borrow_mut().push(self.name);
    }
}

fn recorder(name: &'static str, log: &Rc<RefCell<Vec<&'static str>>>) -> Recorder {
    Recorder { name, log: Rc::clone(log) }
}

#[test]
fn dispose_all_runs_newest_first() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut subs = Subscriptions::new();
    subs.track("scroll", recorder("scroll", &log));
    subs.track("search", recorder("search", &log));
    subs.track("observer", recorder("observer", &log));
    assert_eq!(subs.count(), 3);

    subs.dispose_all();
    assert_eq!(*log.borrow(), vec!["observer", "search", "scroll"]);
    assert_eq!(subs.count(), 0);
}

#[test]
fn handles_are_disposed_once() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut subs = Subscriptions::new();
    subs.track("scroll", recorder("scroll", &log));
    subs.dispose_all();
    subs.dispose_all();
    assert_eq!(log.borrow().len(), 1);
}

#[test]
fn dropping_the_registry_disposes_remaining_handles() {
    let log = Rc::new(RefCell::new(Vec::new()));
    {
        let mut subs = Subscriptions::new();
        subs.track("keydown", recorder("keydown", &log));
    }
    assert_eq!(*log.borrow(), vec!["keydown"]);
}
