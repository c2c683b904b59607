//! MoodReads UI Components
//!
//! Dioxus components that paint the element tree owned by
//! [`moodreads_core::MoodReads`]. The core decides what the page looks
//! like; this crate only mirrors the tree into the webview and forwards
//! clicks back to the coordinator.
//!
//! Colors are never hard-coded here. Every component reads the
//! `--color-*` custom properties the theme applier writes on the root.

pub mod components;

pub use components::*;
