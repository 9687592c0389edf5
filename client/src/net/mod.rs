//! Networking for the Item REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls behind the `ItemsApi` trait and `types`
//! defines the shared wire schema.

pub mod api;
pub mod types;
