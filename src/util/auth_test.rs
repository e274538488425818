use super::*;

// =============================================================
// Cross-tab relevance predicate
// =============================================================

#[test]
fn auth_key_change_is_relevant() {
    assert!(storage_change_is_relevant(Some("auth")));
}

#[test]
fn full_clear_is_relevant() {
    assert!(storage_change_is_relevant(None));
}

#[test]
fn other_keys_are_ignored() {
    assert!(!storage_change_is_relevant(Some("theme")));
    assert!(!storage_change_is_relevant(Some("cart-draft")));
    assert!(!storage_change_is_relevant(Some("")));
}

#[test]
fn relevance_matches_the_store_key_constant() {
    assert!(storage_change_is_relevant(Some(session_store::AUTH_KEY)));
}
