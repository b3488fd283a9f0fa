//! Text-node surgery shared by search highlighting and engine-code marks.
//!
//! Highlights are built from text nodes and `<mark>` elements, never from
//! HTML strings, so item text is never reparsed as markup.

use std::ops::Range;

use web_sys::{Document, Element, Node};

use crate::error::ResultExt;

/// All text nodes below `root`, in document order.
pub fn text_nodes(root: &Node) -> Vec<Node> {
    let mut out = Vec::new();
    collect_text_nodes(root, &mut out);
    out
}

fn collect_text_nodes(node: &Node, out: &mut Vec<Node>) {
    let children = node.child_nodes();
    for i in 0..children.length() {
        let Some(child) = children.item(i) else {
            continue;
        };
        if child.node_type() == Node::TEXT_NODE {
            out.push(child);
        } else {
            collect_text_nodes(&child, out);
        }
    }
}

/// Replace `node` with plain text and `<mark class=…>` runs for `ranges`.
///
/// `ranges` are byte ranges into `text` (the node's current data), sorted
/// and non-overlapping.
pub fn wrap_ranges(document: &Document, node: &Node, text: &str, ranges: &[Range<usize>], class: &str) {
    let Some(parent) = node.parent_node() else {
        return;
    };
    let mut cursor = 0;
    for range in ranges {
        if range.start > cursor {
            insert_text(document, &parent, node, &text[cursor..range.start]);
        }
        if let Some(mark) = document.create_element("mark").or_log("creating mark") {
            mark.set_class_name(class);
            mark.set_text_content(Some(&text[range.clone()]));
            parent.insert_before(&mark, Some(node)).or_log("inserting mark");
        }
        cursor = range.end;
    }
    if cursor < text.len() {
        insert_text(document, &parent, node, &text[cursor..]);
    }
    parent.remove_child(node).or_log("removing split text node");
}

fn insert_text(document: &Document, parent: &Node, before: &Node, text: &str) {
    let piece = document.create_text_node(text);
    parent.insert_before(&piece, Some(before)).or_log("inserting text");
}

/// Replace every `mark.<class>` below `root` with its text and merge the
/// resulting adjacent text nodes.
pub fn unwrap_marks(document: &Document, root: &Element, class: &str) {
    for mark in super::query_all_in(root, &format!("mark.{class}")) {
        let Some(parent) = mark.parent_node() else {
            continue;
        };
        let text = document.create_text_node(&mark.text_content().unwrap_or_default());
        if parent.replace_child(&text, &mark).or_log("unwrapping mark").is_some() {
            parent.normalize();
        }
    }
}
