//! Pure render values for theme and language application.
//!
//! The `dom` layer never decides what to write: it asks these functions for a
//! render value and copies the fields onto the document. Translatable nodes
//! are reached through the [`Translatable`] seam so the same substitution
//! loop runs against the live DOM and against in-memory nodes in tests.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use crate::state::preferences::{Direction, Language, Theme};
use crate::util::i18n;

/// Everything written to the document when a theme is applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThemeRender {
    /// Value of the `data-theme` attribute on `<html>`.
    pub data_theme: &'static str,
    /// Class list of the toggle icon (shows the theme a click switches to).
    pub icon_class: &'static str,
}

#[must_use]
pub fn theme_render(theme: Theme) -> ThemeRender {
    match theme {
        Theme::Light => ThemeRender { data_theme: "light", icon_class: "bi bi-moon-fill" },
        Theme::Dark => ThemeRender { data_theme: "dark", icon_class: "bi bi-sun-fill" },
    }
}

/// Everything written to the document when a language is applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LanguageRender {
    pub language: Language,
    pub lang: &'static str,
    pub dir: Direction,
    /// Label of the language toggle: the language a click switches to.
    pub toggle_label: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    /// Accessible name of the injected search input.
    pub search_label: &'static str,
}

#[must_use]
pub fn language_render(language: Language) -> LanguageRender {
    LanguageRender {
        language,
        lang: match language {
            Language::En => "en",
            Language::Ar => "ar",
        },
        dir: language.direction(),
        toggle_label: match language {
            Language::En => Language::Ar.native_name(),
            Language::Ar => Language::En.native_name(),
        },
        title: i18n::PAGE_TITLE.get(language),
        description: i18n::META_DESCRIPTION.get(language),
        search_label: i18n::SEARCH_PLACEHOLDER.get(language),
    }
}

/// How a translatable element displays its copy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextSlot {
    /// Rendered as the element's text content.
    Content,
    /// Rendered as the `placeholder` of an input-like element.
    Placeholder,
}

impl TextSlot {
    /// Slot used for an element with the given (upper-case) tag name.
    #[must_use]
    pub fn for_tag(tag_name: &str) -> Self {
        if tag_name.eq_ignore_ascii_case("input") || tag_name.eq_ignore_ascii_case("textarea") {
            Self::Placeholder
        } else {
            Self::Content
        }
    }
}

/// A node carrying parallel copy for each supported language.
pub trait Translatable {
    fn slot(&self) -> TextSlot;

    /// Copy stored for `language`, if the node carries it.
    fn translation(&self, language: Language) -> Option<String>;

    fn render(&mut self, slot: TextSlot, text: &str);
}

/// Render `language` into every node. Returns how many nodes were written.
///
/// Nodes without copy for `language` (or with empty copy) keep their
/// current content.
pub fn apply_translations<T: Translatable>(nodes: &mut [T], language: Language) -> usize {
    let mut written = 0;
    for node in nodes.iter_mut() {
        let Some(text) = node.translation(language).filter(|t| !t.is_empty()) else {
            continue;
        };
        let slot = node.slot();
        node.render(slot, &text);
        written += 1;
    }
    written
}
