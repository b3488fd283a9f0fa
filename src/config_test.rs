use super::*;

#[test]
fn defaults_match_production_page() {
    let config = SiteConfig::default();
    assert_eq!(config.theme_storage_key, "hyundai-coupe-theme");
    assert_eq!(config.language_storage_key, "hyundai-coupe-language");
    assert_eq!(config.navbar_scroll_threshold, 100.0);
    assert_eq!(config.scroll_debounce_ms, 100);
    assert_eq!(config.search_debounce_ms, 300);
    assert_eq!(config.announce_delay_ms, 100);
    assert_eq!(config.tracked_sections, vec!["rd1", "rd2", "gk1", "gk2"]);
    assert_eq!(config.level(), log::Level::Info);
    assert!(config.validate().is_ok());
}

#[test]
fn partial_override_keeps_other_defaults() {
    let config = SiteConfig::from_json(r#"{ "search_debounce_ms": 150, "log_level": "debug" }"#).unwrap();
    assert_eq!(config.search_debounce_ms, 150);
    assert_eq!(config.level(), log::Level::Debug);
    assert_eq!(config.scroll_debounce_ms, DEFAULT_SCROLL_DEBOUNCE_MS);
    assert_eq!(config.theme_storage_key, DEFAULT_THEME_STORAGE_KEY);
}

#[test]
fn malformed_json_is_rejected() {
    let err = SiteConfig::from_json("{ not json").unwrap_err();
    assert!(matches!(err, SiteError::InvalidConfig(_)));
}

#[test]
fn unknown_fields_are_rejected() {
    assert!(SiteConfig::from_json(r#"{ "theme_key": "x" }"#).is_err());
}

#[test]
fn shared_storage_key_is_rejected() {
    let raw = r#"{ "theme_storage_key": "prefs", "language_storage_key": "prefs" }"#;
    assert!(SiteConfig::from_json(raw).is_err());
}

#[test]
fn empty_sections_and_bad_level_are_rejected() {
    assert!(SiteConfig::from_json(r#"{ "tracked_sections": [] }"#).is_err());
    assert!(SiteConfig::from_json(r#"{ "log_level": "loud" }"#).is_err());
    assert!(SiteConfig::from_json(r#"{ "navbar_scroll_threshold": -1 }"#).is_err());
}

#[test]
fn resolve_falls_back_to_defaults_and_reports_error() {
    let (config, err) = SiteConfig::resolve(Some("42"));
    assert_eq!(config, SiteConfig::default());
    assert!(err.is_some());

    let (config, err) = SiteConfig::resolve(None);
    assert_eq!(config, SiteConfig::default());
    assert!(err.is_none());

    let (_, err) = SiteConfig::resolve(Some("   "));
    assert!(err.is_none());
}

#[test]
fn resolve_accepts_valid_override() {
    let (config, err) = SiteConfig::resolve(Some(r#"{ "tracked_sections": ["gk1", "gk2"] }"#));
    assert!(err.is_none());
    assert_eq!(config.tracked_sections, vec!["gk1", "gk2"]);
}
