//! Page-level components, one per route.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages own their fetch lifecycles and translate session role flags into
//! what gets rendered. Role-restricted pages decide before any request
//! leaves: without the right role they show the access-denied placeholder
//! and never touch the network.

pub mod cart;
pub mod create_product;
pub mod edit_product;
pub mod login;
pub mod merchant_dashboard;
pub mod merchant_orders;
pub mod merchant_products;
pub mod orders;
pub mod product_detail;
pub mod products;
pub mod register;
pub mod wishlist;
