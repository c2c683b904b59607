//! MoodReads Core Library
//!
//! Mood-driven book recommendations: the user picks a mood and the page
//! re-themes itself, shows a matching message and lists a few books.
//!
//! ## Overview
//!
//! The core is UI-toolkit agnostic. It describes the page through the
//! [`Surface`] trait and schedules animations on a virtual-clock
//! [`TimerQueue`]; the desktop shell paints the retained [`DomTree`] and
//! advances the clock.
//!
//! - **Catalogs**: static moods, themes, messages and books
//! - **Panels**: theme applier, message panel, results panel, mood selector
//! - **Unlock gesture**: triple click on the logo reveals a hidden mood
//! - **Coordinator**: [`MoodReads`] sequences all of the above per selection
//!
//! ## Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//! use moodreads_core::{build_shell, DomTree, MemoryStore, MoodConfig, MoodReads, MotionPreference};
//!
//! let mut tree = DomTree::new();
//! build_shell(&mut tree)?;
//! let mut app = MoodReads::mount(
//!     tree,
//!     Arc::new(MemoryStore::new()),
//!     MotionPreference::new(false),
//!     MoodConfig::default(),
//! )?;
//!
//! app.select_mood("cozy");
//! app.advance(std::time::Duration::from_millis(16));
//! ```

pub mod app;
pub mod catalog;
pub mod config;
pub mod error;
pub mod logging;
pub mod motion;
pub mod panels;
pub mod recommend;
pub mod storage;
pub mod surface;
pub mod timers;
pub mod types;
pub mod unlock;

// Re-exports
pub use app::{build_shell, ClickTarget, Containers, MoodReads, SharedStore};
pub use config::MoodConfig;
pub use error::{MoodError, MoodResult};
pub use motion::{MotionPreference, MotionWatch};
pub use panels::{EmptyReason, RenderOutcome};
pub use recommend::RecommendationEngine;
pub use storage::{unlock_flag, FileSessionStore, MemoryStore, SessionStore};
pub use surface::{DomTree, Element, Mutation, NodeId, Surface};
pub use timers::{Deferred, TaskBatch, TaskHandle, TimerQueue};
pub use types::*;
pub use unlock::{GestureOutcome, UnlockGesture};
