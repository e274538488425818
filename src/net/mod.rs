//! Networking modules for the marketplace HTTP API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` holds the request helpers, `types` the shared wire schema. There
//! is no socket layer; everything is request/response.

pub mod api;
pub mod types;
