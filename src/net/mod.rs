//! Networking modules for the backend REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs HTTP calls and `types` defines the JSON wire schema.

pub mod api;
pub mod types;
