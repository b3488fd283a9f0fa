use super::*;

#[test]
fn nothing_is_active_initially() {
    let state = PlaylistState::default();
    assert!(!state.is_active(0));
    assert!(!state.is_loading(0));
}

#[test]
fn selection_is_exclusive() {
    let mut state = PlaylistState::default();
    state.select(1);
    state.select(3);
    assert!(state.is_active(3));
    assert!(!state.is_active(1));
    assert!(state.is_loading(3));
    assert!(!state.is_loading(1));
}

#[test]
fn loaded_clears_loading_but_keeps_selection() {
    let mut state = PlaylistState::default();
    state.select(2);
    state.loaded();
    assert!(!state.is_loading(2));
    assert!(state.is_active(2));
}
