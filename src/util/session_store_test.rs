#![cfg(not(feature = "hydrate"))]

use std::collections::HashMap;

use super::*;
use crate::net::types::AccountType;

// =============================================================
// Helpers
// =============================================================

fn make_record(token: &str) -> AuthRecord {
    AuthRecord {
        token: token.to_owned(),
        token_type: "Bearer".to_owned(),
        username: "alice".to_owned(),
        account_type: AccountType::Customer,
    }
}

/// Stand-in for `localStorage`: one string slot per key.
type MemoryStore = HashMap<String, String>;

fn save_in(store: &mut MemoryStore, record: &AuthRecord) {
    if let Some(raw) = encode(record) {
        store.insert(AUTH_KEY.to_owned(), raw);
    }
}

fn get_in(store: &MemoryStore) -> Option<AuthRecord> {
    store.get(AUTH_KEY).and_then(|raw| decode(raw))
}

// =============================================================
// Codec laws
// =============================================================

#[test]
fn decode_rejects_malformed_json() {
    assert_eq!(decode("{not json"), None);
    assert_eq!(decode(""), None);
    assert_eq!(decode("null"), None);
}

#[test]
fn decode_rejects_partial_record() {
    // tokenType missing entirely
    let raw = r#"{"token": "abc", "username": "alice", "type": "CUSTOMER"}"#;
    assert_eq!(decode(raw), None);
}

#[test]
fn decode_rejects_empty_token() {
    let raw = r#"{"token": "", "tokenType": "Bearer", "username": "alice", "type": "CUSTOMER"}"#;
    assert_eq!(decode(raw), None);
}

#[test]
fn decode_rejects_whitespace_token() {
    let raw = r#"{"token": "   ", "tokenType": "Bearer", "username": "alice", "type": "CUSTOMER"}"#;
    assert_eq!(decode(raw), None);
}

#[test]
fn encode_then_decode_preserves_record() {
    let record = make_record("tok-1");
    let raw = encode(&record).unwrap();
    assert_eq!(decode(&raw), Some(record));
}

#[test]
fn decode_accepts_record_saved_by_previous_build() {
    // Shape written by the server and persisted verbatim.
    let raw = r#"{"token":"tok-9","tokenType":"Bearer","username":"mira","type":"MERCHANT"}"#;
    let record = decode(raw).unwrap();
    assert_eq!(record.account_type, AccountType::Merchant);
}

// =============================================================
// Store laws (against the in-memory stand-in)
// =============================================================

#[test]
fn get_on_empty_store_is_none() {
    let store = MemoryStore::new();
    assert_eq!(get_in(&store), None);
}

#[test]
fn save_then_get_round_trips() {
    let mut store = MemoryStore::new();
    let record = make_record("tok-1");
    save_in(&mut store, &record);
    assert_eq!(get_in(&store), Some(record));
}

#[test]
fn second_save_replaces_whole_record() {
    let mut store = MemoryStore::new();
    let first = make_record("tok-1");
    let second = AuthRecord {
        token: "tok-2".to_owned(),
        token_type: "Bearer".to_owned(),
        username: "mira".to_owned(),
        account_type: AccountType::Merchant,
    };
    save_in(&mut store, &first);
    save_in(&mut store, &second);
    assert_eq!(get_in(&store), Some(second));
    assert_eq!(store.len(), 1);
}

#[test]
fn corrupt_slot_reads_as_absent() {
    let mut store = MemoryStore::new();
    store.insert(AUTH_KEY.to_owned(), "{half a rec".to_owned());
    assert_eq!(get_in(&store), None);
}

#[test]
fn clear_is_idempotent() {
    let mut store = MemoryStore::new();
    save_in(&mut store, &make_record("tok-1"));
    store.remove(AUTH_KEY);
    store.remove(AUTH_KEY);
    assert_eq!(get_in(&store), None);
}

// =============================================================
// Browser shells in non-hydrate builds
// =============================================================

#[test]
fn get_is_none_without_browser_storage() {
    assert_eq!(get(), None);
}

#[test]
fn save_and_clear_are_noops_but_callable() {
    save(&make_record("tok-1"));
    clear();
    clear();
    assert_eq!(get(), None);
}
