//! Image viewer navigation over gallery thumbnails.

#[cfg(test)]
#[path = "gallery_test.rs"]
mod gallery_test;

/// Arrow-key step through the gallery.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    Previous,
    Next,
}

impl Step {
    /// Map a `KeyboardEvent.key` value to a step.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(Self::Previous),
            "ArrowRight" => Some(Self::Next),
            _ => None,
        }
    }
}

/// Index reached from `current` by `step`, wrapping at both ends.
///
/// An unknown position behaves as if it sat just outside the list: previous
/// lands on the last image, next on the first. Returns `None` for an empty
/// gallery.
#[must_use]
pub fn cycle(current: Option<usize>, len: usize, step: Step) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let next = match (current.filter(|&i| i < len), step) {
        (None, Step::Previous) => len - 1,
        (None, Step::Next) => 0,
        (Some(i), Step::Previous) => (i + len - 1) % len,
        (Some(i), Step::Next) => (i + 1) % len,
    };
    Some(next)
}

/// Full-resolution source for a thumbnail: `data-src` when present, else `src`.
#[must_use]
pub fn full_source<'a>(data_src: Option<&'a str>, src: &'a str) -> &'a str {
    data_src.filter(|s| !s.is_empty()).unwrap_or(src)
}
