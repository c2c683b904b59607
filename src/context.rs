//! App context for MoodReads.
//!
//! Provides the mounted coordinator to all components via use_context.
//!
//! ## Usage
//!
//! ```ignore
//! // In App component
//! use_context_provider(|| app);
//!
//! // In child components
//! let app = use_moodreads();
//! app.write().select_mood("cozy");
//! ```

use std::sync::Arc;

use dioxus::prelude::*;
use moodreads_core::{DomTree, FileSessionStore, MemoryStore, MoodConfig, MoodReads, SharedStore};

/// The mounted coordinator, painted from its own element tree.
pub type AppHandle = Signal<MoodReads<DomTree>>;

/// Timing constants loaded at startup.
pub fn get_config() -> MoodConfig {
    crate::launch_options().config
}

/// Whether `--reduced-motion` forced the preference on.
pub fn forced_reduced_motion() -> bool {
    crate::launch_options().reduced_motion
}

/// Session store for this launch.
///
/// With `--session-file` the unlock state survives restarts; otherwise it
/// lives in memory. A file that cannot be opened falls back to memory.
pub fn open_session_store() -> SharedStore {
    match crate::launch_options().session_file {
        Some(path) => match FileSessionStore::open(&path) {
            Ok(store) => Arc::new(store),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Session file unusable, using memory");
                Arc::new(MemoryStore::new())
            }
        },
        None => Arc::new(MemoryStore::new()),
    }
}

/// Hook to access the mounted coordinator from context.
pub fn use_moodreads() -> AppHandle {
    use_context::<AppHandle>()
}
