//! Client-side state shared across components.

pub mod notices;
pub mod ui;
