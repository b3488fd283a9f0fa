//! Screen-reader support: live region, skip link, carousel labels, modal focus.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use super::listener::listen;
use super::query_all;
use crate::error::ResultExt;
use crate::state::preferences::Language;
use crate::util::i18n;
use crate::util::resources::{Dispose, Subscriptions};

const LIVE_REGION_ID: &str = "live-region";
const FOCUSABLE: &str =
    r#"button, [href], input, select, textarea, [tabindex]:not([tabindex="-1"])"#;

/// Polite live region. A newer message cancels one still waiting.
pub struct Announcer {
    region: Element,
    delay_ms: u32,
    pending: RefCell<Option<Timeout>>,
}

impl Announcer {
    /// Append `#live-region` to the body.
    pub fn install(document: &Document, delay_ms: u32) -> Option<Self> {
        let body = document.body()?;
        let region = document.create_element("div").or_log("creating live region")?;
        region.set_id(LIVE_REGION_ID);
        region.set_class_name("sr-only");
        region.set_attribute("aria-live", "polite").or_log("setting aria-live");
        region.set_attribute("aria-atomic", "true").or_log("setting aria-atomic");
        body.append_child(&region).or_log("appending live region")?;
        Some(Self { region, delay_ms, pending: RefCell::new(None) })
    }

    /// Clear the region, then write `message` after the delay so assistive
    /// technology sees a change even when the text repeats.
    pub fn announce(&self, message: &str) {
        self.region.set_text_content(None);
        let region = self.region.clone();
        let message = message.to_owned();
        let timeout = Timeout::new(self.delay_ms, move || region.set_text_content(Some(&message)));
        drop(self.pending.replace(Some(timeout)));
    }
}

impl Dispose for Rc<Announcer> {
    fn dispose(&mut self) {
        drop(self.pending.take());
    }
}

/// Insert the skip link as the body's first child.
pub fn insert_skip_link(document: &Document) {
    let Some(body) = document.body() else {
        return;
    };
    let Some(link) = document.create_element("a").or_log("creating skip link") else {
        return;
    };
    link.set_class_name("skip-link");
    link.set_attribute("href", "#main").or_log("setting skip link href");
    link.set_attribute("data-en", i18n::SKIP_LINK.en).or_log("setting skip link text");
    link.set_attribute("data-ar", i18n::SKIP_LINK.ar).or_log("setting skip link text");
    link.set_text_content(Some(i18n::SKIP_LINK.en));
    body.insert_before(&link, body.first_child().as_ref()).or_log("inserting skip link");
}

/// Make carousels focusable regions with a localized label.
pub fn label_carousels(document: &Document, language: Language) {
    for carousel in query_all(document, ".carousel") {
        for (name, value) in
            [("tabindex", "0"), ("role", "region"), ("aria-label", i18n::CAROUSEL_LABEL.get(language))]
        {
            carousel.set_attribute(name, value).or_log("labelling carousel");
        }
    }
}

/// Focus the first focusable element of a modal once it is shown.
pub fn bind_modal_focus(document: &Document, subs: &mut Subscriptions) {
    for modal in query_all(document, ".modal") {
        let target = modal.clone();
        listen(subs, &modal, "shown.bs.modal", move |_| {
            let first = target
                .query_selector(FOCUSABLE)
                .or_log("querying focusable")
                .flatten()
                .and_then(|el| el.dyn_into::<HtmlElement>().or_log("focusable element"));
            if let Some(first) = first {
                first.focus().or_log("focusing modal");
            }
        });
    }
}
