//! Markup and placement of the widgets the controller injects.
//!
//! The page stylesheet targets these exact class names and nesting, so the
//! structure here is part of the page contract. All interpolated values are
//! static ASCII tables or localized constants without markup characters.

#[cfg(test)]
#[path = "widgets_test.rs"]
mod widgets_test;

use crate::util::generations::{ChartBar, GENERATIONS, Performance};
use crate::util::i18n::{self, Localized};

/// Classes of the timeline container: pinned to the bottom, large screens only.
pub const TIMELINE_CLASS: &str = "generation-timeline fixed-bottom d-none d-lg-block";

/// Class of the container each performance chart is rendered into.
pub const CHART_CLASS: &str = "performance-chart mt-3";

/// Inner markup of the generation timeline, one `.timeline-item` per generation.
#[must_use]
pub fn timeline_markup() -> String {
    let mut items = String::new();
    for generation in &GENERATIONS {
        items.push_str(&format!(
            r##"<a href="#{id}" class="timeline-item" data-year="{years}">{label}</a>"##,
            id = generation.id,
            years = generation.years,
            label = generation.label,
        ));
    }
    format!(
        concat!(
            r#"<div class="container"><div class="row justify-content-center"><div class="col-auto">"#,
            r#"<div class="timeline-nav">{items}</div>"#,
            "</div></div></div>",
        ),
        items = items,
    )
}

fn translatable(tag: &str, text: Localized) -> String {
    format!(r#"<{tag} data-en="{en}" data-ar="{ar}">{en}</{tag}>"#, en = text.en, ar = text.ar)
}

fn chart_bar(bar: &ChartBar) -> String {
    let bar_class = match bar.modifier {
        Some(modifier) => format!("bar {modifier}"),
        None => "bar".to_owned(),
    };
    format!(
        concat!(
            r#"<div class="chart-bar">{label}<div class="bar-container">"#,
            r#"<div class="{class}" style="width: {percent:.1}%"></div><span>{value}</span>"#,
            "</div></div>",
        ),
        label = translatable("label", bar.label),
        class = bar_class,
        percent = bar.percent,
        value = bar.value,
    )
}

/// Inner markup of one generation's performance chart.
#[must_use]
pub fn chart_markup(performance: &Performance) -> String {
    let mut html = translatable("h5", i18n::PERFORMANCE_OVERVIEW);
    html.push_str(r#"<div class="chart-bars">"#);
    for bar in &performance.chart_bars() {
        html.push_str(&chart_bar(bar));
    }
    html.push_str("</div>");
    html
}

/// Kind of a container child, as far as widget placement cares.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChildKind {
    Element,
    /// Text, comments and other non-element nodes (indentation whitespace).
    Other,
}

/// Index of the child a widget is inserted before so that it lands ahead of
/// the container's last *element*. `None` means append.
#[must_use]
pub fn before_last_element(children: &[ChildKind]) -> Option<usize> {
    children.iter().rposition(|kind| *kind == ChildKind::Element)
}
