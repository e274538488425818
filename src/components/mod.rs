//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render storefront chrome and listing surfaces while reading
//! shared session and theme state from Leptos context providers.

pub mod access_denied;
pub mod header;
pub mod image_gallery;
pub mod product_card;
pub mod status_pill;
