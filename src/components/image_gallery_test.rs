use super::*;

// =====
// Index wrapping
// =====

#[test]
fn next_wraps_past_the_last_photo() {
    assert_eq!(next_index(0, 3), 1);
    assert_eq!(next_index(1, 3), 2);
    assert_eq!(next_index(2, 3), 0);
}

#[test]
fn prev_wraps_before_the_first_photo() {
    assert_eq!(prev_index(2, 3), 1);
    assert_eq!(prev_index(1, 3), 0);
    assert_eq!(prev_index(0, 3), 2);
}

#[test]
fn single_photo_stays_put() {
    assert_eq!(next_index(0, 1), 0);
    assert_eq!(prev_index(0, 1), 0);
}

#[test]
fn empty_gallery_never_indexes() {
    assert_eq!(next_index(0, 0), 0);
    assert_eq!(prev_index(0, 0), 0);
}
