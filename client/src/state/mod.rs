//! Client-side state.

pub mod items;
