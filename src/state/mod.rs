//! Shared application state provided through Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! `session` is the source of truth for login/role decisions; `ui` holds
//! presentation-only chrome state. Both are provided as `RwSignal`s at the
//! app root.

pub mod session;
pub mod ui;
