use super::*;

#[derive(Clone, Debug, PartialEq)]
struct FakeNode {
    tag: &'static str,
    en: Option<&'static str>,
    ar: Option<&'static str>,
    content: String,
    placeholder: String,
}

impl FakeNode {
    fn new(tag: &'static str, en: Option<&'static str>, ar: Option<&'static str>) -> Self {
        Self { tag, en, ar, content: "markup".into(), placeholder: String::new() }
    }
}

impl Translatable for FakeNode {
    fn slot(&self) -> TextSlot {
        TextSlot::for_tag(self.tag)
    }

    fn translation(&self, language: Language) -> Option<String> {
        match language {
            Language::En => self.en,
            Language::Ar => self.ar,
        }
        .map(str::to_owned)
    }

    fn render(&mut self, slot: TextSlot, text: &str) {
        match slot {
            TextSlot::Content => self.content = text.to_owned(),
            TextSlot::Placeholder => self.placeholder = text.to_owned(),
        }
    }
}

fn page() -> Vec<FakeNode> {
    vec![
        FakeNode::new("H2", Some("History"), Some("التاريخ")),
        FakeNode::new("INPUT", Some("Search"), Some("بحث")),
        FakeNode::new("P", Some("Only English"), None),
    ]
}

// =============================================================
// Theme
// =============================================================

#[test]
fn theme_render_sets_attribute_and_icon() {
    assert_eq!(theme_render(Theme::Light), ThemeRender { data_theme: "light", icon_class: "bi bi-moon-fill" });
    assert_eq!(theme_render(Theme::Dark), ThemeRender { data_theme: "dark", icon_class: "bi bi-sun-fill" });
}

// =============================================================
// Language
// =============================================================

#[test]
fn english_render_is_left_to_right_and_offers_arabic() {
    let render = language_render(Language::En);
    assert_eq!(render.lang, "en");
    assert_eq!(render.dir, Direction::Ltr);
    assert_eq!(render.toggle_label, "العربية");
    assert!(render.title.starts_with("Hyundai Coupe"));
}

#[test]
fn arabic_render_is_right_to_left_and_offers_english() {
    let render = language_render(Language::Ar);
    assert_eq!(render.lang, "ar");
    assert_eq!(render.dir, Direction::Rtl);
    assert_eq!(render.toggle_label, "English");
    assert_eq!(render.description, i18n::META_DESCRIPTION.ar);
}

#[test]
fn search_label_follows_the_language() {
    assert_eq!(language_render(Language::En).search_label, "Search specifications...");
    assert_eq!(language_render(Language::Ar).search_label, "البحث في المواصفات...");
}

#[test]
fn inputs_receive_placeholders() {
    assert_eq!(TextSlot::for_tag("INPUT"), TextSlot::Placeholder);
    assert_eq!(TextSlot::for_tag("TEXTAREA"), TextSlot::Placeholder);
    assert_eq!(TextSlot::for_tag("SPAN"), TextSlot::Content);

    let mut nodes = page();
    apply_translations(&mut nodes, Language::Ar);
    assert_eq!(nodes[1].placeholder, "بحث");
    assert_eq!(nodes[1].content, "markup");
}

#[test]
fn missing_translation_leaves_node_unchanged() {
    let mut nodes = page();
    let written = apply_translations(&mut nodes, Language::Ar);
    assert_eq!(written, 2);
    assert_eq!(nodes[2].content, "markup");
}

#[test]
fn applying_a_language_twice_matches_applying_once() {
    for language in [Language::En, Language::Ar] {
        let mut once = page();
        apply_translations(&mut once, language);
        let mut twice = page();
        apply_translations(&mut twice, language);
        apply_translations(&mut twice, language);
        assert_eq!(once, twice);
    }
}

#[test]
fn switching_back_restores_original_language() {
    let mut nodes = page();
    apply_translations(&mut nodes, Language::En);
    let english = nodes.clone();
    apply_translations(&mut nodes, Language::Ar);
    apply_translations(&mut nodes, Language::En);
    assert_eq!(nodes, english);
}

#[test]
fn empty_page_is_a_noop() {
    let mut nodes: Vec<FakeNode> = Vec::new();
    assert_eq!(apply_translations(&mut nodes, Language::Ar), 0);
}
