//! Preference owner of the page controller.
//!
//! ARCHITECTURE
//! ============
//! [`SiteCore`] is the single owner of the current [`Preferences`] and of
//! their persistence. Toggles produce a new immutable value, write it to the
//! store, and then run the registered change hooks in order. The browser
//! layer registers two hooks (apply to the DOM, then announce), so
//! cross-cutting reactions are an explicit list rather than wrapped methods.
//!
//! The core has no browser dependency; the `dom` layer holds it behind an
//! `Rc<RefCell<_>>` and feeds it click events.

#[cfg(test)]
#[path = "site_test.rs"]
mod site_test;

use crate::config::SiteConfig;
use crate::state::preferences::{Language, Preference, PreferenceChange, PreferenceKind, Preferences, Theme};
use crate::util::render::{LanguageRender, ThemeRender, language_render, theme_render};
use crate::util::storage::{PreferenceStore, get_preference, set_preference};

/// Storage keys for the two preferences.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StorageKeys {
    pub theme: String,
    pub language: String,
}

impl StorageKeys {
    #[must_use]
    pub fn from_config(config: &SiteConfig) -> Self {
        Self { theme: config.theme_storage_key.clone(), language: config.language_storage_key.clone() }
    }

    fn for_kind(&self, kind: PreferenceKind) -> &str {
        match kind {
            PreferenceKind::Theme => &self.theme,
            PreferenceKind::Language => &self.language,
        }
    }
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self::from_config(&SiteConfig::default())
    }
}

/// Reaction to a preference change.
pub type ChangeHook = Box<dyn FnMut(&PreferenceChange)>;

pub struct SiteCore<S> {
    store: S,
    keys: StorageKeys,
    prefs: Preferences,
    hooks: Vec<ChangeHook>,
}

impl<S: PreferenceStore> SiteCore<S> {
    /// Read both preferences from `store`, falling back to defaults.
    pub fn load(store: S, keys: StorageKeys) -> Self {
        let prefs = Preferences {
            theme: get_preference::<Theme, S>(&store, &keys.theme),
            language: get_preference::<Language, S>(&store, &keys.language),
        };
        log::debug!("loaded preferences: {prefs:?}");
        Self { store, keys, prefs, hooks: Vec::new() }
    }

    #[must_use]
    pub fn preferences(&self) -> Preferences {
        self.prefs
    }

    #[cfg(test)]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Register a hook run after every change, after earlier hooks.
    pub fn on_change(&mut self, hook: ChangeHook) {
        self.hooks.push(hook);
    }

    #[must_use]
    pub fn theme_render(&self) -> ThemeRender {
        theme_render(self.prefs.theme)
    }

    #[must_use]
    pub fn language_render(&self) -> LanguageRender {
        language_render(self.prefs.language)
    }

    pub fn toggle_theme(&mut self) -> PreferenceChange {
        let theme = self.prefs.theme.toggled();
        self.commit(self.prefs.with_theme(theme), theme)
    }

    pub fn toggle_language(&mut self) -> PreferenceChange {
        let language = self.prefs.language.toggled();
        self.commit(self.prefs.with_language(language), language)
    }

    /// Install `after`, persist `value` (the field that moved), run hooks.
    ///
    /// A failed write never blocks the change: the page keeps working with
    /// the new value for this visit and the failure is logged as a warning.
    fn commit<P: Preference>(&mut self, after: Preferences, value: P) -> PreferenceChange {
        let change = PreferenceChange { kind: P::KIND, before: self.prefs, after };
        self.prefs = after;

        let key = self.keys.for_kind(P::KIND).to_owned();
        if let Err(err) = set_preference(&mut self.store, &key, value) {
            log::warn!("preference not saved, it will reset on reload: {err}");
        }

        for hook in &mut self.hooks {
            hook(&change);
        }
        change
    }
}
