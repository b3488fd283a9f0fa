//! Video playlist selection state.
//!
//! Tracks which playlist entry is the active selection and which one is
//! still waiting for its video to report `loadeddata`.

#[cfg(test)]
#[path = "playlist_test.rs"]
mod playlist_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PlaylistState {
    active: Option<usize>,
    loading: Option<usize>,
}

impl PlaylistState {
    /// Select entry `index`; it becomes active and starts loading.
    pub fn select(&mut self, index: usize) {
        self.active = Some(index);
        self.loading = Some(index);
    }

    /// The shared video reported data for the current source.
    pub fn loaded(&mut self) {
        self.loading = None;
    }

    #[must_use]
    pub fn is_active(&self, index: usize) -> bool {
        self.active == Some(index)
    }

    #[must_use]
    pub fn is_loading(&self, index: usize) -> bool {
        self.loading == Some(index)
    }
}
