//! Persistent session store backing the auth hook.
//!
//! DESIGN
//! ======
//! One record, one key, whole-record replacement. Reads are fail-soft:
//! malformed JSON, a partial record, or an empty token all read back as
//! "no session" so a bad write can never wedge the UI. The JSON codec is
//! split out as pure functions; the public ops are thin shells over
//! browser storage.

#[cfg(test)]
#[path = "session_store_test.rs"]
mod session_store_test;

use crate::net::types::AuthRecord;
use crate::util::storage;

/// `localStorage` key holding the serialized [`AuthRecord`].
///
/// Also the key cross-tab `storage` events are filtered on.
pub const AUTH_KEY: &str = "auth";

/// Serialize a record for storage.
pub fn encode(record: &AuthRecord) -> Option<String> {
    serde_json::to_string(record).ok()
}

/// Parse a stored record, discarding anything unusable.
///
/// Returns `None` for malformed JSON, a record missing fields, or a record
/// whose token is empty/whitespace.
pub fn decode(raw: &str) -> Option<AuthRecord> {
    serde_json::from_str::<AuthRecord>(raw)
        .ok()
        .filter(AuthRecord::has_token)
}

/// Persist `record`, replacing any previous session.
pub fn save(record: &AuthRecord) {
    if let Some(raw) = encode(record) {
        storage::set_item(AUTH_KEY, &raw);
    }
}

/// Read the current session, if a usable one is stored.
pub fn get() -> Option<AuthRecord> {
    let raw = storage::get_item(AUTH_KEY)?;
    let record = decode(&raw);
    if record.is_none() {
        leptos::logging::warn!("session store: discarding unreadable record");
    }
    record
}

/// Remove any stored session. Idempotent.
pub fn clear() {
    storage::remove_item(AUTH_KEY);
}
