//! Top-level page components.

pub mod items;
