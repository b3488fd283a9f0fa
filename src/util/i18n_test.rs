use super::*;

#[test]
fn get_selects_language() {
    assert_eq!(SKIP_LINK.get(Language::En), "Skip to main content");
    assert_eq!(SKIP_LINK.get(Language::Ar), "تخطى إلى المحتوى الرئيسي");
}

#[test]
fn every_catalog_entry_has_both_languages() {
    let entries = [
        PAGE_TITLE,
        META_DESCRIPTION,
        DARK_MODE_ENABLED,
        LIGHT_MODE_ENABLED,
        LANGUAGE_CHANGED,
        SKIP_LINK,
        CAROUSEL_LABEL,
        SEARCH_PLACEHOLDER,
        LOADING,
        PERFORMANCE_OVERVIEW,
        HORSEPOWER,
        TORQUE,
        ACCELERATION,
    ];
    for entry in entries {
        assert!(!entry.en.is_empty());
        assert!(!entry.ar.is_empty());
        assert_ne!(entry.en, entry.ar);
    }
}
