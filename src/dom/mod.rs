//! Browser layer: reads the DOM, drives [`SiteCore`], applies render values.
//!
//! ARCHITECTURE
//! ============
//! Boot runs once on document-ready:
//!
//! 1. resolve [`SiteConfig`] from `#site-config` and install `console_log`;
//! 2. load preferences through [`LocalStore`];
//! 3. inject controller-owned widgets (skip link, live region, search input,
//!    timeline, engine-code marks, performance charts);
//! 4. apply theme and language, so injected widgets are rendered too;
//! 5. register the change hooks (render, then announce);
//! 6. bind event listeners and observers.
//!
//! Every listener, observer and timer lands in one [`Subscriptions`] list
//! held by the page [`Site`]; `teardown()` disposes it.

pub mod a11y;
pub mod diagnostics;
pub mod enhance;
pub mod listener;
pub mod navigation;
pub mod observe;
pub mod preferences;
pub mod search;
pub mod storage;
pub mod text;
pub mod viewer;

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{AddEventListenerOptions, Document, Element, NodeList};

use self::a11y::Announcer;
use self::storage::LocalStore;
use crate::config::{CONFIG_ELEMENT_ID, SiteConfig};
use crate::error::{ResultExt, SiteError};
use crate::site::{SiteCore, StorageKeys};
use crate::util::resources::Subscriptions;

// ── DOM helpers ─────────────────────────────────────────────────

#[must_use]
pub fn document() -> Option<Document> {
    web_sys::window().and_then(|window| window.document())
}

fn elements(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().or_log("node is not an element"))
        .collect()
}

/// Every element matching `selector`; an invalid selector yields none.
#[must_use]
pub fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    document.query_selector_all(selector).or_log(selector).map(|list| elements(&list)).unwrap_or_default()
}

#[must_use]
pub fn query_all_in(root: &Element, selector: &str) -> Vec<Element> {
    root.query_selector_all(selector).or_log(selector).map(|list| elements(&list)).unwrap_or_default()
}

#[must_use]
pub fn query(document: &Document, selector: &str) -> Option<Element> {
    document.query_selector(selector).or_log(selector).flatten()
}

// ── Page controller ─────────────────────────────────────────────

/// The booted page: preference core plus every live subscription.
pub struct Site {
    core: Rc<RefCell<SiteCore<LocalStore>>>,
    subscriptions: Subscriptions,
}

thread_local! {
    static SITE: RefCell<Option<Site>> = const { RefCell::new(None) };
}

fn read_config(document: &Document) -> (SiteConfig, Option<SiteError>) {
    let raw = document.get_element_by_id(CONFIG_ELEMENT_ID).and_then(|el| el.text_content());
    SiteConfig::resolve(raw.as_deref())
}

fn boot() {
    let Some(document) = document() else {
        return;
    };

    let (config, config_error) = read_config(&document);
    console_log::init_with_level(config.level()).or_log("installing console logger");
    if let Some(err) = config_error {
        log::warn!("{err}; using default configuration");
    }

    let mut subscriptions = Subscriptions::new();
    diagnostics::install(&mut subscriptions);

    let core = Rc::new(RefCell::new(SiteCore::load(LocalStore, StorageKeys::from_config(&config))));

    a11y::insert_skip_link(&document);
    let announcer = Announcer::install(&document, config.announce_delay_ms).map(Rc::new);
    let search_input = search::insert_input(&document);
    navigation::insert_timeline(&document);
    enhance::mark_engine_codes(&document);
    enhance::insert_performance_charts(&document);

    {
        let site = core.borrow();
        preferences::apply_theme(&document, &site.theme_render());
        preferences::apply_language(&document, &site.language_render());
    }

    {
        let mut site = core.borrow_mut();
        let doc = document.clone();
        site.on_change(Box::new(move |change| preferences::render_change(&doc, change)));
        if let Some(announcer) = &announcer {
            let announcer = Rc::clone(announcer);
            site.on_change(Box::new(move |change| announcer.announce(change.announcement())));
        }
    }
    if let Some(announcer) = announcer {
        subscriptions.track("announcer", announcer);
    }

    preferences::bind_toggles(&document, &core, &mut subscriptions);
    navigation::bind(&document, &config, &mut subscriptions);
    if let Some(input) = &search_input {
        search::bind(input, config.search_debounce_ms, &mut subscriptions);
    }
    viewer::bind_gallery(&document, &mut subscriptions);
    let language_core = Rc::downgrade(&core);
    viewer::bind_playlist(
        &document,
        move || language_core.upgrade().map(|core| core.borrow().preferences().language).unwrap_or_default(),
        &mut subscriptions,
    );
    observe::bind(&document, &mut subscriptions);
    a11y::bind_modal_focus(&document, &mut subscriptions);

    log::info!("page controller ready with {} subscriptions", subscriptions.count());
    SITE.with(|slot| *slot.borrow_mut() = Some(Site { core, subscriptions }));
}

/// Boot on document-ready.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let Some(document) = document() else {
        return;
    };
    if document.ready_state() != "loading" {
        boot();
        return;
    }
    let options = AddEventListenerOptions::new();
    options.set_once(true);
    let callback = Closure::once_into_js(boot);
    document
        .add_event_listener_with_callback_and_add_event_listener_options(
            "DOMContentLoaded",
            callback.unchecked_ref(),
            &options,
        )
        .or_log("waiting for DOMContentLoaded");
}

/// Release every listener, observer and pending timer.
#[wasm_bindgen]
pub fn teardown() {
    let site = SITE.with(|slot| slot.borrow_mut().take());
    if let Some(mut site) = site {
        site.subscriptions.dispose_all();
        log::info!("page controller torn down");
    }
}

/// Current preferences as JSON, for host scripts.
#[wasm_bindgen(js_name = preferencesJson)]
pub fn preferences_json() -> Option<String> {
    SITE.with(|slot| {
        let site = slot.borrow();
        let prefs = site.as_ref()?.core.borrow().preferences();
        serde_json::to_string(&prefs).or_log("serializing preferences")
    })
}
