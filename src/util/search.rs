//! Literal, case-insensitive search over specification items.
//!
//! ARCHITECTURE
//! ============
//! Matching is a plain scan over case-folded characters; the query is never
//! compiled into a pattern, so `.`, `*` or `(` mean exactly themselves.
//! [`perform_search`] drives any [`SearchTarget`]: the `dom` layer wraps
//! list items, tests use in-memory items. Every run clears all highlights
//! before matching, which keeps repeated identical queries idempotent.

#[cfg(test)]
#[path = "search_test.rs"]
mod search_test;

use std::ops::Range;

/// One folded character and the byte span of the source char it came from.
#[derive(Clone, Copy, Debug)]
struct Folded {
    ch: char,
    start: usize,
    end: usize,
    /// First folded char produced by its source char.
    leads: bool,
    /// Last folded char produced by its source char.
    trails: bool,
}

fn fold(text: &str) -> Vec<Folded> {
    let mut out = Vec::with_capacity(text.len());
    for (start, ch) in text.char_indices() {
        let end = start + ch.len_utf8();
        let lower: Vec<char> = ch.to_lowercase().collect();
        let last = lower.len().saturating_sub(1);
        for (i, folded) in lower.into_iter().enumerate() {
            out.push(Folded { ch: folded, start, end, leads: i == 0, trails: i == last });
        }
    }
    out
}

/// Whether `query` occurs in `text`, ignoring case. Blank queries never match.
#[must_use]
pub fn contains_literal(text: &str, query: &str) -> bool {
    !find_literal(text, query).is_empty()
}

/// Byte ranges of every non-overlapping case-insensitive occurrence of
/// `query` in `text`, left to right.
///
/// Ranges always cover whole source characters, so they can be used to
/// slice `text` directly.
#[must_use]
pub fn find_literal(text: &str, query: &str) -> Vec<Range<usize>> {
    let needle: Vec<char> = query.chars().flat_map(char::to_lowercase).collect();
    if needle.is_empty() {
        return Vec::new();
    }
    let hay = fold(text);
    let mut ranges = Vec::new();
    let mut i = 0;
    while i + needle.len() <= hay.len() {
        let window = &hay[i..i + needle.len()];
        let first = &window[0];
        let last = &window[needle.len() - 1];
        let aligned = first.leads && last.trails;
        if aligned && window.iter().zip(&needle).all(|(f, n)| f.ch == *n) {
            ranges.push(first.start..last.end);
            i += needle.len();
        } else {
            i += 1;
        }
    }
    ranges
}

/// An item that can be searched and highlighted in place.
pub trait SearchTarget {
    /// The item's visible text with any highlight markup removed.
    fn plain_text(&self) -> String;

    /// Remove highlight markers and the result flag.
    fn clear(&mut self);

    /// Wrap occurrences of `query` and flag the item as a result.
    fn highlight(&mut self, query: &str);
}

/// Result of one search pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Blank query: highlights removed, nothing counted.
    Cleared,
    /// Number of items containing the query.
    Matched(usize),
}

/// Clear every item, then highlight the ones containing `query`.
pub fn perform_search<T: SearchTarget>(items: &mut [T], query: &str) -> SearchOutcome {
    for item in items.iter_mut() {
        item.clear();
    }
    if query.trim().is_empty() {
        return SearchOutcome::Cleared;
    }
    let mut matched = 0;
    for item in items.iter_mut() {
        if contains_literal(&item.plain_text(), query) {
            item.highlight(query);
            matched += 1;
        }
    }
    log::info!("found {matched} results for {query:?}");
    SearchOutcome::Matched(matched)
}
