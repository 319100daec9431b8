//! # eden-roots-site
//!
//! Client-side rendered Leptos app for the Eden Roots natural hair studio.
//! Replaces the static HTML + vanilla JS site with a Rust-native UI layer:
//! smooth-scrolling navigation, contact form validation, a gallery overlay,
//! the mobile menu, reveal-on-scroll, lazy images, notification banners,
//! and the saved theme preference.
//!
//! Interactive state lives in two context signals (`state::ui`,
//! `state::notices`); browser glue is feature-gated behind `csr` so the
//! pure logic builds and tests natively.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;
