use super::*;

// =============================================================
// Defaults and tokens
// =============================================================

#[test]
fn defaults_are_light_and_english() {
    let prefs = Preferences::default();
    assert_eq!(prefs.theme, Theme::Light);
    assert_eq!(prefs.language, Language::En);
}

#[test]
fn tokens_parse_back_to_the_same_value() {
    for theme in [Theme::Light, Theme::Dark] {
        assert_eq!(Theme::from_token(theme.token()), Some(theme));
    }
    for language in [Language::En, Language::Ar] {
        assert_eq!(Language::from_token(language.token()), Some(language));
    }
}

#[test]
fn unknown_tokens_are_rejected() {
    assert_eq!(Theme::from_token("blue"), None);
    assert_eq!(Theme::from_token("Dark"), None);
    assert_eq!(Language::from_token("fr"), None);
    assert_eq!(Language::from_token(""), None);
}

#[test]
fn serde_uses_storage_tokens() {
    let json = serde_json::to_string(&Preferences { theme: Theme::Dark, language: Language::Ar }).unwrap();
    assert_eq!(json, r#"{"theme":"dark","language":"ar"}"#);
}

// =============================================================
// Toggling
// =============================================================

#[test]
fn toggling_twice_is_identity() {
    assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
    assert_eq!(Language::Ar.toggled().toggled(), Language::Ar);
}

#[test]
fn arabic_is_right_to_left() {
    assert_eq!(Language::Ar.direction(), Direction::Rtl);
    assert_eq!(Language::En.direction(), Direction::Ltr);
    assert_eq!(Direction::Rtl.as_str(), "rtl");
}

#[test]
fn with_helpers_only_touch_one_field() {
    let prefs = Preferences::default().with_theme(Theme::Dark);
    assert_eq!(prefs.language, Language::En);
    let prefs = prefs.with_language(Language::Ar);
    assert_eq!(prefs.theme, Theme::Dark);
}

// =============================================================
// Announcements
// =============================================================

#[test]
fn theme_announcement_uses_current_language() {
    let before = Preferences { theme: Theme::Light, language: Language::Ar };
    let change = PreferenceChange { kind: PreferenceKind::Theme, before, after: before.with_theme(Theme::Dark) };
    assert_eq!(change.announcement(), "تم تفعيل الوضع الليلي");
}

#[test]
fn language_announcement_uses_new_language() {
    let before = Preferences::default();
    let change =
        PreferenceChange { kind: PreferenceKind::Language, before, after: before.with_language(Language::Ar) };
    assert_eq!(change.announcement(), "تم تغيير اللغة إلى العربية");

    let back = PreferenceChange { kind: PreferenceKind::Language, before: change.after, after: before };
    assert_eq!(back.announcement(), "Language changed to English");
}
