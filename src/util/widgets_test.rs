use super::*;

// =============================================================
// Timeline
// =============================================================

#[test]
fn timeline_is_wrapped_in_grid_and_nav() {
    let html = timeline_markup();
    assert!(html.starts_with(r#"<div class="container"><div class="row justify-content-center">"#));
    assert!(html.contains(r#"<div class="col-auto"><div class="timeline-nav">"#));
    assert_eq!(html.matches(r#"class="timeline-item""#).count(), GENERATIONS.len());
}

#[test]
fn timeline_items_link_sections_in_page_order() {
    let html = timeline_markup();
    let rd1 = html.find(r##"<a href="#rd1" class="timeline-item" data-year="1996-2000">RD1</a>"##);
    let gk2 = html.find(r##"<a href="#gk2" class="timeline-item" data-year="2006-2009">GK2</a>"##);
    assert!(rd1.is_some_and(|a| gk2.is_some_and(|b| a < b)));
}

#[test]
fn timeline_is_hidden_below_large_screens() {
    let classes: Vec<&str> = TIMELINE_CLASS.split(' ').collect();
    assert_eq!(classes, vec!["generation-timeline", "fixed-bottom", "d-none", "d-lg-block"]);
}

// =============================================================
// Performance chart
// =============================================================

#[test]
fn chart_has_translatable_heading_and_three_bars() {
    let html = chart_markup(&GENERATIONS[0].performance);
    assert!(html.starts_with(
        r#"<h5 data-en="Performance Overview" data-ar="نظرة عامة على الأداء">Performance Overview</h5>"#
    ));
    assert!(html.contains(r#"<div class="chart-bars">"#));
    assert_eq!(html.matches(r#"<div class="chart-bar">"#).count(), 3);
    assert_eq!(html.matches(r#"<div class="bar-container">"#).count(), 3);
    assert_eq!(CHART_CLASS, "performance-chart mt-3");
}

#[test]
fn chart_bars_carry_label_width_and_value() {
    let html = chart_markup(&GENERATIONS[0].performance);
    assert!(html.contains(r#"<label data-en="Horsepower" data-ar="القوة الحصانية">Horsepower</label>"#));
    assert!(html.contains(r#"<div class="bar" style="width: 70.0%"></div><span>140 hp</span>"#));
    assert!(html.contains(r#"<span>133 lb-ft</span>"#));
}

#[test]
fn acceleration_bar_gets_its_modifier() {
    let html = chart_markup(&GENERATIONS[0].performance);
    assert_eq!(html.matches(r#"class="bar acceleration""#).count(), 1);
    assert!(html.contains("<span>8.9s</span>"));
}

// =============================================================
// Placement
// =============================================================

#[test]
fn insertion_skips_trailing_whitespace_nodes() {
    use ChildKind::{Element, Other};
    // "\n <button/>\n <button/>\n"
    let children = [Other, Element, Other, Element, Other];
    assert_eq!(before_last_element(&children), Some(3));
}

#[test]
fn insertion_without_elements_appends() {
    assert_eq!(before_last_element(&[]), None);
    assert_eq!(before_last_element(&[ChildKind::Other]), None);
}
