//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage, theme,
//! clocks) from page and component logic so the latter stays testable.

pub mod auth;
pub mod dark_mode;
pub mod format;
pub mod session_store;
pub mod storage;
