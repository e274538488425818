#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn parse_stored_recognizes_both_choices() {
    assert_eq!(parse_stored("dark"), Some(true));
    assert_eq!(parse_stored("light"), Some(false));
}

#[test]
fn parse_stored_ignores_junk() {
    assert_eq!(parse_stored(""), None);
    assert_eq!(parse_stored("Dark"), None);
    assert_eq!(parse_stored("true"), None);
}

#[test]
fn read_preference_is_false_in_non_hydrate_tests() {
    assert!(!read_preference());
}

#[test]
fn toggle_flips_boolean_value() {
    assert!(toggle(false));
    assert!(!toggle(true));
}

#[test]
fn apply_is_noop_but_callable() {
    apply(false);
    apply(true);
}
