//! Generation section enhancements: engine-code marks and performance charts.

use web_sys::{Document, Element};

use super::query_all;
use super::text::{text_nodes, wrap_ranges};
use crate::error::ResultExt;
use crate::state::preferences::Language;
use crate::util::generations::{ENGINE_CODES, GENERATIONS, engine_code};
use crate::util::widgets::{CHART_CLASS, chart_markup};

const ENGINE_CODE_CLASS: &str = "engine-code";

/// Wrap the first occurrence of each known engine code in every spec item.
pub fn mark_engine_codes(document: &Document) {
    let mut marked = 0;
    for item in query_all(document, ".spec-item li") {
        for engine in &ENGINE_CODES {
            if mark_first(document, &item, engine.code) {
                marked += 1;
            }
        }
    }
    log::debug!("marked {marked} engine codes");
}

fn mark_first(document: &Document, item: &Element, code: &str) -> bool {
    for node in text_nodes(item) {
        let inside_mark =
            node.parent_element().is_some_and(|parent| parent.class_list().contains(ENGINE_CODE_CLASS));
        if inside_mark {
            continue;
        }
        let text = node.node_value().unwrap_or_default();
        if let Some(start) = text.find(code) {
            wrap_ranges(document, &node, &text, &[start..start + code.len()], ENGINE_CODE_CLASS);
            return true;
        }
    }
    false
}

/// Set every engine-code mark's tooltip to its description in `language`.
pub fn refresh_engine_code_titles(document: &Document, language: Language) {
    for mark in query_all(document, "mark.engine-code") {
        let code = mark.text_content().unwrap_or_default();
        if let Some(engine) = engine_code(code.trim()) {
            let title = engine.description.get(language);
            mark.set_attribute("title", title).or_log("setting engine-code title");
        }
    }
}

/// Append a performance chart to each generation's `.specs-section`.
pub fn insert_performance_charts(document: &Document) {
    for generation in &GENERATIONS {
        let Some(section) = document.get_element_by_id(generation.id) else {
            continue;
        };
        let Some(specs) = section.query_selector(".specs-section").or_log("querying specs section").flatten()
        else {
            continue;
        };
        let Some(chart) = document.create_element("div").or_log("creating performance chart") else {
            continue;
        };
        chart.set_class_name(CHART_CLASS);
        chart.set_inner_html(&chart_markup(&generation.performance));
        specs.append_child(&chart).or_log("appending performance chart");
    }
}
