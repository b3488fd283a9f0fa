//! Fixed bilingual strings owned by the controller.
//!
//! Page copy lives in the markup (`data-en` / `data-ar`); this module only
//! holds the strings the controller writes itself: document metadata,
//! announcements, and the labels of injected widgets.

#[cfg(test)]
#[path = "i18n_test.rs"]
mod i18n_test;

use crate::state::preferences::Language;

/// A string available in both supported languages.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Localized {
    pub en: &'static str,
    pub ar: &'static str,
}

impl Localized {
    #[must_use]
    pub const fn new(en: &'static str, ar: &'static str) -> Self {
        Self { en, ar }
    }

    #[must_use]
    pub fn get(self, language: Language) -> &'static str {
        match language {
            Language::En => self.en,
            Language::Ar => self.ar,
        }
    }
}

// ── Document metadata ───────────────────────────────────────────

pub const PAGE_TITLE: Localized = Localized::new(
    "Hyundai Coupe (Tiburon) - Complete Guide - RD & GK Generations",
    "هيونداي كوبيه (تيبورون) - دليل شامل - أجيال RD و GK",
);

pub const META_DESCRIPTION: Localized = Localized::new(
    "Comprehensive guide to the Hyundai Coupe (Tiburon) - RD1, RD2, GK1, GK2 generations with technical specifications, history, and gallery",
    "دليل شامل لهيونداي كوبيه (تيبورون) - أجيال RD1, RD2, GK1, GK2 مع المواصفات التقنية والتاريخ والمعرض",
);

// ── Announcements ───────────────────────────────────────────────

pub const DARK_MODE_ENABLED: Localized = Localized::new("Dark mode enabled", "تم تفعيل الوضع الليلي");

pub const LIGHT_MODE_ENABLED: Localized = Localized::new("Light mode enabled", "تم تفعيل الوضع النهاري");

pub const LANGUAGE_CHANGED: Localized = Localized::new("Language changed to English", "تم تغيير اللغة إلى العربية");

// ── Injected widgets ────────────────────────────────────────────

pub const SKIP_LINK: Localized = Localized::new("Skip to main content", "تخطى إلى المحتوى الرئيسي");

pub const CAROUSEL_LABEL: Localized = Localized::new("Image carousel", "دائري الصور");

pub const SEARCH_PLACEHOLDER: Localized = Localized::new("Search specifications...", "البحث في المواصفات...");

pub const LOADING: Localized = Localized::new("Loading...", "جار التحميل...");

pub const PERFORMANCE_OVERVIEW: Localized = Localized::new("Performance Overview", "نظرة عامة على الأداء");

pub const HORSEPOWER: Localized = Localized::new("Horsepower", "القوة الحصانية");

pub const TORQUE: Localized = Localized::new("Torque", "عزم الدوران");

pub const ACCELERATION: Localized = Localized::new("0-100 km/h", "0-100 كم/س");
