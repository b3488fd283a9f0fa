//! Persisted user preferences: colour theme and display language.
//!
//! DESIGN
//! ======
//! Both preferences are tiny two-valued enums stored as plain tokens
//! (`light`/`dark`, `en`/`ar`). They travel together as an immutable
//! [`Preferences`] value; a toggle produces a new value plus a
//! [`PreferenceChange`] describing what moved, instead of mutating shared
//! fields in place.

#[cfg(test)]
#[path = "preferences_test.rs"]
mod preferences_test;

use serde::{Deserialize, Serialize};

use crate::util::i18n::{self, Localized};

/// Which preference a storage entry or a change refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PreferenceKind {
    Theme,
    Language,
}

/// A two-valued persisted setting.
pub trait Preference: Copy + Default + Eq {
    const KIND: PreferenceKind;

    /// Storage token for this value.
    fn token(self) -> &'static str;

    /// Parse a storage token; unknown tokens yield `None`.
    fn from_token(token: &str) -> Option<Self>;

    /// The other allowed value.
    #[must_use]
    fn toggled(self) -> Self;
}

/// Colour theme applied through the `data-theme` attribute.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Preference for Theme {
    const KIND: PreferenceKind = PreferenceKind::Theme;

    fn token(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    fn from_token(token: &str) -> Option<Self> {
        match token {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// Display language of the page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Ar,
}

impl Language {
    /// Name of the language written in that language, used on the toggle.
    #[must_use]
    pub fn native_name(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Ar => "العربية",
        }
    }

    /// Attribute holding this language's copy on translatable elements.
    #[must_use]
    pub fn data_attribute(self) -> &'static str {
        match self {
            Self::En => "data-en",
            Self::Ar => "data-ar",
        }
    }

    #[must_use]
    pub fn direction(self) -> Direction {
        match self {
            Self::En => Direction::Ltr,
            Self::Ar => Direction::Rtl,
        }
    }
}

impl Preference for Language {
    const KIND: PreferenceKind = PreferenceKind::Language;

    fn token(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ar => "ar",
        }
    }

    fn from_token(token: &str) -> Option<Self> {
        match token {
            "en" => Some(Self::En),
            "ar" => Some(Self::Ar),
            _ => None,
        }
    }

    fn toggled(self) -> Self {
        match self {
            Self::En => Self::Ar,
            Self::Ar => Self::En,
        }
    }
}

/// Text direction written to the document `dir` attribute.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Ltr,
    Rtl,
}

impl Direction {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ltr => "ltr",
            Self::Rtl => "rtl",
        }
    }
}

/// Snapshot of both preferences.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    pub theme: Theme,
    pub language: Language,
}

impl Preferences {
    #[must_use]
    pub fn with_theme(self, theme: Theme) -> Self {
        Self { theme, ..self }
    }

    #[must_use]
    pub fn with_language(self, language: Language) -> Self {
        Self { language, ..self }
    }
}

/// Record of a single preference flip, handed to change hooks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PreferenceChange {
    pub kind: PreferenceKind,
    pub before: Preferences,
    pub after: Preferences,
}

impl PreferenceChange {
    /// Screen-reader message describing this change.
    ///
    /// Theme messages use the current language; language messages are
    /// spoken in the language just switched to.
    #[must_use]
    pub fn announcement(&self) -> &'static str {
        let message: Localized = match self.kind {
            PreferenceKind::Theme => match self.after.theme {
                Theme::Dark => i18n::DARK_MODE_ENABLED,
                Theme::Light => i18n::LIGHT_MODE_ENABLED,
            },
            PreferenceKind::Language => i18n::LANGUAGE_CHANGED,
        };
        message.get(self.after.language)
    }
}
