//! Session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided once at the app root as `RwSignal<Session>`; role-gated pages
//! and the header read the derived flags, the auth helpers write
//! transitions. The flags are derived from the stored record on every
//! read, so they can never disagree with each other.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::{AccountType, AuthRecord};

/// Snapshot of the session: the persisted record plus a loading flag for
/// the initial store read after mount.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session {
    pub record: Option<AuthRecord>,
    pub loading: bool,
}

impl Session {
    /// Pre-mount state: nothing known yet, store read still pending.
    pub fn loading() -> Self {
        Self { record: None, loading: true }
    }

    /// The active role, when a usable session is present.
    pub fn role(&self) -> Option<AccountType> {
        self.record
            .as_ref()
            .filter(|r| r.has_token())
            .map(|r| r.account_type)
    }

    pub fn is_logged_in(&self) -> bool {
        self.role().is_some()
    }

    pub fn is_customer(&self) -> bool {
        self.role() == Some(AccountType::Customer)
    }

    pub fn is_merchant(&self) -> bool {
        self.role() == Some(AccountType::Merchant)
    }

    /// Display name for the header, when logged in.
    pub fn username(&self) -> Option<&str> {
        self.record.as_ref().map(|r| r.username.as_str())
    }
}
