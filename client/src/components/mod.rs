//! Reusable view components.

pub mod item_row;
