//! Search input over `.spec-item li` with in-place highlighting.

use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlInputElement, Node};

use super::listener::listen;
use super::text::{text_nodes, unwrap_marks, wrap_ranges};
use super::{query, query_all};
use crate::error::ResultExt;
use crate::util::debounce::Debouncer;
use crate::util::i18n;
use crate::util::resources::Subscriptions;
use crate::util::search::{SearchOutcome, SearchTarget, find_literal, perform_search};
use crate::util::widgets::{ChildKind, before_last_element};

pub const ITEM_SELECTOR: &str = ".spec-item li";
pub const INPUT_ID: &str = "specSearch";
const HIGHLIGHT_CLASS: &str = "search-highlight";
const RESULT_CLASS: &str = "search-result";

/// Insert `input#specSearch` before the last element of `.navbar-controls`.
pub fn insert_input(document: &Document) -> Option<Element> {
    let controls = query(document, ".navbar-controls")?;
    let input = document.create_element("input").or_log("creating search input")?;
    input.set_id(INPUT_ID);
    input.set_class_name("form-control form-control-sm me-2");
    for (name, value) in [
        ("type", "search"),
        ("data-en", i18n::SEARCH_PLACEHOLDER.en),
        ("data-ar", i18n::SEARCH_PLACEHOLDER.ar),
        ("placeholder", i18n::SEARCH_PLACEHOLDER.en),
        ("aria-label", i18n::SEARCH_PLACEHOLDER.en),
    ] {
        input.set_attribute(name, value).or_log("setting search input attribute");
    }
    let anchor = insertion_anchor(&controls);
    controls.insert_before(&input, anchor.as_ref()).or_log("inserting search input")?;
    Some(input)
}

/// The container's last element child; whitespace text nodes are skipped.
fn insertion_anchor(container: &Node) -> Option<Node> {
    let children = container.child_nodes();
    let nodes: Vec<Node> = (0..children.length()).filter_map(|i| children.item(i)).collect();
    let kinds: Vec<ChildKind> = nodes
        .iter()
        .map(|node| if node.node_type() == Node::ELEMENT_NODE { ChildKind::Element } else { ChildKind::Other })
        .collect();
    before_last_element(&kinds).and_then(|index| nodes.into_iter().nth(index))
}

/// Run one search pass over the live item set.
pub fn search_document(document: &Document, query: &str) -> SearchOutcome {
    let mut items: Vec<ElementTarget> = query_all(document, ITEM_SELECTOR)
        .into_iter()
        .map(|el| ElementTarget::new(document, el))
        .collect();
    perform_search(&mut items, query)
}

/// Debounce input events into [`search_document`].
pub fn bind(input: &Element, delay_ms: u32, subs: &mut Subscriptions) {
    let debouncer = Rc::new(Debouncer::new(delay_ms));
    let field = input.clone();
    let pending = Rc::clone(&debouncer);
    listen(subs, input, "input", move |_| {
        let Some(value) = field.dyn_ref::<HtmlInputElement>().map(HtmlInputElement::value) else {
            return;
        };
        pending.call(move || {
            if let Some(document) = super::document() {
                search_document(&document, &value);
            }
        });
    });
    subs.track("search debounce", debouncer);
}

struct ElementTarget {
    document: Document,
    element: Element,
}

impl ElementTarget {
    fn new(document: &Document, element: Element) -> Self {
        Self { document: document.clone(), element }
    }
}

impl SearchTarget for ElementTarget {
    fn plain_text(&self) -> String {
        self.element.text_content().unwrap_or_default()
    }

    fn clear(&mut self) {
        unwrap_marks(&self.document, &self.element, HIGHLIGHT_CLASS);
        self.element.class_list().remove_1(RESULT_CLASS).or_log("removing search-result");
    }

    fn highlight(&mut self, query: &str) {
        // Occurrences spanning several text nodes are counted but not wrapped.
        for node in text_nodes(&self.element) {
            let text = node.node_value().unwrap_or_default();
            let ranges = find_literal(&text, query);
            if !ranges.is_empty() {
                wrap_ranges(&self.document, &node, &text, &ranges, HIGHLIGHT_CLASS);
            }
        }
        self.element.class_list().add_1(RESULT_CLASS).or_log("adding search-result");
    }
}
