//! Shared helpers: validation, navigation, theming, and browser glue.

pub mod links;
pub mod scroll;
pub mod theme;
pub mod validate;
pub mod viewport;
