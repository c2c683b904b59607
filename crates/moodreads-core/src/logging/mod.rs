//! Structured logging layers.
//!
//! All log sites use plain `tracing` macros. This module adds two layers
//! the shell and the tests compose onto a subscriber:
//!
//! - [`JsonlLayer`]: appends one JSON object per event to a session log file
//! - [`CaptureLayer`]: keeps events in memory so tests can assert on them
//!
//! ## Usage
//!
//! ```ignore
//! use moodreads_core::logging::JsonlLayer;
//! use tracing_subscriber::prelude::*;
//!
//! let jsonl = JsonlLayer::new("./logs")?;
//! tracing_subscriber::registry()
//!     .with(jsonl)
//!     .with(tracing_subscriber::fmt::layer())
//!     .init();
//! ```
//!
//! ```bash
//! # Every warning from a session
//! jq 'select(.level == "warn")' logs/moodreads-*.jsonl
//! ```

pub mod entry;
pub mod layer;

pub use entry::LogEntry;
pub use layer::{CaptureLayer, CapturedLogs, JsonlLayer};
