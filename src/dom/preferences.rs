//! Applying theme and language render values to the document.

use std::cell::RefCell;
use std::rc::Rc;

use web_sys::{Document, Element};

use super::listener::listen;
use super::storage::LocalStore;
use super::{a11y, enhance, query, query_all, search};
use crate::error::ResultExt;
use crate::site::SiteCore;
use crate::state::preferences::{Language, PreferenceChange, PreferenceKind};
use crate::util::render::{
    LanguageRender, TextSlot, ThemeRender, Translatable, apply_translations, language_render,
    theme_render,
};
use crate::util::resources::Subscriptions;

/// Set `data-theme` and swap the toggle icon.
pub fn apply_theme(document: &Document, render: &ThemeRender) {
    if let Some(html) = document.document_element() {
        html.set_attribute("data-theme", render.data_theme).or_log("setting data-theme");
    }
    if let Some(icon) = query(document, "#darkModeToggle i") {
        icon.set_class_name(render.icon_class);
    }
}

/// Render a language across the document.
pub fn apply_language(document: &Document, render: &LanguageRender) {
    if let Some(html) = document.document_element() {
        html.set_attribute("lang", render.lang).or_log("setting lang");
        html.set_attribute("dir", render.dir.as_str()).or_log("setting dir");
    }
    if let Some(label) = query(document, "#langToggle span") {
        label.set_text_content(Some(render.toggle_label));
    }

    let mut nodes: Vec<DomTranslatable> =
        query_all(document, "[data-en][data-ar]").into_iter().map(DomTranslatable).collect();
    let written = apply_translations(&mut nodes, render.language);
    log::debug!("rendered {written} translatable elements as {:?}", render.language);

    document.set_title(render.title);
    if let Some(meta) = query(document, r#"meta[name="description"]"#) {
        meta.set_attribute("content", render.description).or_log("setting meta description");
    }
    if let Some(input) = document.get_element_by_id(search::INPUT_ID) {
        input.set_attribute("aria-label", render.search_label).or_log("setting search label");
    }

    a11y::label_carousels(document, render.language);
    enhance::refresh_engine_code_titles(document, render.language);
}

/// Change hook: re-render whichever preference moved.
pub fn render_change(document: &Document, change: &PreferenceChange) {
    match change.kind {
        PreferenceKind::Theme => apply_theme(document, &theme_render(change.after.theme)),
        PreferenceKind::Language => {
            apply_language(document, &language_render(change.after.language));
        }
    }
}

/// Wire the theme and language toggle buttons.
pub fn bind_toggles(
    document: &Document,
    core: &Rc<RefCell<SiteCore<LocalStore>>>,
    subs: &mut Subscriptions,
) {
    if let Some(button) = document.get_element_by_id("darkModeToggle") {
        let core = Rc::clone(core);
        listen(subs, &button, "click", move |_| {
            core.borrow_mut().toggle_theme();
        });
    }
    if let Some(button) = document.get_element_by_id("langToggle") {
        let core = Rc::clone(core);
        listen(subs, &button, "click", move |_| {
            core.borrow_mut().toggle_language();
        });
    }
}

struct DomTranslatable(Element);

impl Translatable for DomTranslatable {
    fn slot(&self) -> TextSlot {
        TextSlot::for_tag(&self.0.tag_name())
    }

    fn translation(&self, language: Language) -> Option<String> {
        self.0.get_attribute(language.data_attribute())
    }

    fn render(&mut self, slot: TextSlot, text: &str) {
        match slot {
            TextSlot::Content => self.0.set_text_content(Some(text)),
            TextSlot::Placeholder => {
                self.0.set_attribute("placeholder", text).or_log("setting placeholder");
            }
        }
    }
}
