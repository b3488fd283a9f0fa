use super::*;

#[test]
fn next_from_last_wraps_to_first() {
    assert_eq!(cycle(Some(4), 5, Step::Next), Some(0));
}

#[test]
fn previous_from_first_wraps_to_last() {
    assert_eq!(cycle(Some(0), 5, Step::Previous), Some(4));
}

#[test]
fn steps_move_by_one_inside_the_list() {
    assert_eq!(cycle(Some(2), 5, Step::Next), Some(3));
    assert_eq!(cycle(Some(2), 5, Step::Previous), Some(1));
}

#[test]
fn unknown_position_enters_from_the_edges() {
    assert_eq!(cycle(None, 3, Step::Next), Some(0));
    assert_eq!(cycle(None, 3, Step::Previous), Some(2));
    assert_eq!(cycle(Some(9), 3, Step::Next), Some(0));
}

#[test]
fn single_image_cycles_onto_itself() {
    assert_eq!(cycle(Some(0), 1, Step::Next), Some(0));
    assert_eq!(cycle(Some(0), 1, Step::Previous), Some(0));
}

#[test]
fn empty_gallery_has_no_target() {
    assert_eq!(cycle(None, 0, Step::Next), None);
    assert_eq!(cycle(Some(0), 0, Step::Previous), None);
}

#[test]
fn only_horizontal_arrows_step() {
    assert_eq!(Step::from_key("ArrowLeft"), Some(Step::Previous));
    assert_eq!(Step::from_key("ArrowRight"), Some(Step::Next));
    assert_eq!(Step::from_key("ArrowUp"), None);
    assert_eq!(Step::from_key("Escape"), None);
}

#[test]
fn data_src_takes_precedence() {
    assert_eq!(full_source(Some("img/gk2-full.jpg"), "img/gk2-thumb.jpg"), "img/gk2-full.jpg");
    assert_eq!(full_source(None, "img/gk2-thumb.jpg"), "img/gk2-thumb.jpg");
    assert_eq!(full_source(Some(""), "img/gk2-thumb.jpg"), "img/gk2-thumb.jpg");
}
