//! Scroll geometry: navbar state, active section, anchor targets.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

/// In-page links that scroll smoothly. The skip link keeps native fragment
/// navigation so focus actually moves into the main content.
pub const ANCHOR_SELECTOR: &str = r##"a[href^="#"]:not(.skip-link)"##;

/// Fixed header whose height is left clear above an anchor target.
pub const HEADER_SELECTOR: &str = ".navbar";

const SKIP_LINK_CLASS: &str = "skip-link";

/// Vertical extent of a tracked section in document coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    /// Half-open containment: the top edge belongs to the section, the
    /// bottom edge to whatever follows it.
    #[must_use]
    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

/// Whether the navbar should render in its compact "scrolled" state.
#[must_use]
pub fn navbar_scrolled(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

/// Reference line used to pick the active section: the viewport's vertical midpoint.
#[must_use]
pub fn viewport_midline(scroll_y: f64, viewport_height: f64) -> f64 {
    scroll_y + viewport_height / 2.0
}

/// The section containing `line`. When sections overlap the last one in
/// `sections` order wins.
#[must_use]
pub fn active_section(line: f64, sections: &[SectionBounds]) -> Option<&str> {
    sections
        .iter()
        .rev()
        .find(|section| section.contains(line))
        .map(|section| section.id.as_str())
}

/// Scroll offset that brings `target_top` just below a fixed header.
#[must_use]
pub fn anchor_scroll_target(target_top: f64, header_height: f64, gap: f64) -> f64 {
    target_top - header_height - gap
}

/// Parse an in-page anchor `href` into the id it points at.
///
/// Only `#id` forms are accepted; a bare `#` or an external URL yields `None`.
#[must_use]
pub fn anchor_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty() && !id.contains(char::is_whitespace))
}

/// Id a clicked link should smooth-scroll to, given its `href` and `class`
/// attribute. Skip links are left to the browser.
#[must_use]
pub fn smooth_scroll_id<'a>(href: &'a str, class_name: &str) -> Option<&'a str> {
    if class_name.split_ascii_whitespace().any(|class| class == SKIP_LINK_CLASS) {
        return None;
    }
    anchor_id(href)
}
