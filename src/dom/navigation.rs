//! Navbar scroll state, the generation timeline and smooth anchor scrolling.

use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlElement, ScrollBehavior, ScrollToOptions, Window};

use super::listener::listen;
use super::{query, query_all};
use crate::config::SiteConfig;
use crate::error::ResultExt;
use crate::util::debounce::Debouncer;
use crate::util::resources::Subscriptions;
use crate::util::scroll::{
    ANCHOR_SELECTOR, HEADER_SELECTOR, SectionBounds, active_section, anchor_id, anchor_scroll_target,
    navbar_scrolled, smooth_scroll_id, viewport_midline,
};
use crate::util::widgets::{TIMELINE_CLASS, timeline_markup};

const TIMELINE_ITEM_SELECTOR: &str = ".generation-timeline .timeline-item";

/// Append the generation timeline to the body.
pub fn insert_timeline(document: &Document) {
    let Some(body) = document.body() else {
        return;
    };
    let Some(timeline) = document.create_element("div").or_log("creating timeline") else {
        return;
    };
    timeline.set_class_name(TIMELINE_CLASS);
    timeline.set_inner_html(&timeline_markup());
    body.append_child(&timeline).or_log("appending timeline");
}

/// Bind the navbar class, the debounced timeline update and anchor scrolling.
pub fn bind(document: &Document, config: &SiteConfig, subs: &mut Subscriptions) {
    let Some(window) = web_sys::window() else {
        return;
    };

    let threshold = config.navbar_scroll_threshold;
    let sections = config.tracked_sections.clone();
    let debouncer = Rc::new(Debouncer::new(config.scroll_debounce_ms));
    let pending = Rc::clone(&debouncer);
    let doc = document.clone();
    listen(subs, &window, "scroll", move |_| {
        update_navbar(&doc, threshold);
        let doc = doc.clone();
        let sections = sections.clone();
        pending.call(move || update_timeline(&doc, &sections));
    });
    subs.track("scroll debounce", debouncer);

    // Initial state for pages restored mid-scroll.
    update_navbar(document, threshold);
    update_timeline(document, &config.tracked_sections);

    let gap = config.anchor_gap_px;
    for anchor in query_all(document, ANCHOR_SELECTOR) {
        let doc = document.clone();
        let link = anchor.clone();
        listen(subs, &anchor, "click", move |event| scroll_to_anchor(&doc, &link, &event, gap));
    }
}

fn scroll_y(window: &Window) -> f64 {
    window.scroll_y().or_log("reading scrollY").unwrap_or(0.0)
}

fn update_navbar(document: &Document, threshold: f64) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(navbar) = document.get_element_by_id("mainNavbar") else {
        return;
    };
    let scrolled = navbar_scrolled(scroll_y(&window), threshold);
    navbar.class_list().toggle_with_force("scrolled", scrolled).or_log("toggling navbar class");
}

fn section_bounds(document: &Document, ids: &[String]) -> Vec<SectionBounds> {
    ids.iter()
        .filter_map(|id| {
            let section = document.get_element_by_id(id)?;
            let section = section.dyn_into::<HtmlElement>().or_log("section element")?;
            Some(SectionBounds {
                id: id.clone(),
                top: f64::from(section.offset_top()),
                height: f64::from(section.offset_height()),
            })
        })
        .collect()
}

fn update_timeline(document: &Document, ids: &[String]) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let viewport = window
        .inner_height()
        .or_log("reading innerHeight")
        .and_then(|height| height.as_f64())
        .unwrap_or(0.0);
    let bounds = section_bounds(document, ids);
    let active = active_section(viewport_midline(scroll_y(&window), viewport), &bounds);
    for item in query_all(document, TIMELINE_ITEM_SELECTOR) {
        let href = item.get_attribute("href").unwrap_or_default();
        let on = active.is_some() && anchor_id(&href) == active;
        item.class_list().toggle_with_force("active", on).or_log("toggling timeline item");
    }
}

fn scroll_to_anchor(document: &Document, link: &Element, event: &Event, gap: f64) {
    let Some(href) = link.get_attribute("href") else {
        return;
    };
    let class_name = link.get_attribute("class").unwrap_or_default();
    let Some(target) = smooth_scroll_id(&href, &class_name).and_then(|id| document.get_element_by_id(id))
    else {
        return;
    };
    let Some(target) = target.dyn_into::<HtmlElement>().or_log("anchor target") else {
        return;
    };
    event.prevent_default();
    let header = query(document, HEADER_SELECTOR)
        .and_then(|nav| nav.dyn_into::<HtmlElement>().or_log("navbar element"))
        .map_or(0.0, |nav| f64::from(nav.offset_height()));

    let options = ScrollToOptions::new();
    options.set_top(anchor_scroll_target(f64::from(target.offset_top()), header, gap));
    options.set_behavior(ScrollBehavior::Smooth);
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_scroll_to_options(&options);
    }
}
