//! Core data types shared by the catalogs, panels and coordinator.

use serde::{Deserialize, Serialize};

/// A named emotional category that drives theme, message and books.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Mood {
    /// Unique identifier (e.g., "cozy")
    pub id: &'static str,
    /// Human-readable label shown on the selector button
    pub label: &'static str,
    /// Emoji icon shown before the label
    pub icon: &'static str,
    /// Hidden until the unlock gesture completes
    pub is_easter_egg: bool,
}

/// A single validated book recommendation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookRecommendation {
    pub title: String,
    pub author: String,
    pub description: String,
}

impl BookRecommendation {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            description: description.into(),
        }
    }
}

/// A book record as received by the results renderer, possibly malformed.
///
/// Every field is optional so that partial records from any source can be
/// represented and filtered rather than rejected wholesale.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookCandidate {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl BookCandidate {
    /// Names of required fields that are absent or blank after trimming.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let blank = |v: &Option<String>| v.as_deref().map_or(true, |s| s.trim().is_empty());
        let mut missing = Vec::new();
        if blank(&self.title) {
            missing.push("title");
        }
        if blank(&self.author) {
            missing.push("author");
        }
        if blank(&self.description) {
            missing.push("description");
        }
        missing
    }

    /// Convert into a recommendation if every required field is present.
    pub fn validated(&self) -> Option<BookRecommendation> {
        match (&self.title, &self.author, &self.description) {
            (Some(t), Some(a), Some(d))
                if !t.trim().is_empty() && !a.trim().is_empty() && !d.trim().is_empty() =>
            {
                Some(BookRecommendation::new(t.clone(), a.clone(), d.clone()))
            }
            _ => None,
        }
    }
}

impl From<BookRecommendation> for BookCandidate {
    fn from(book: BookRecommendation) -> Self {
        Self {
            title: Some(book.title),
            author: Some(book.author),
            description: Some(book.description),
        }
    }
}

/// Snapshot of the user-visible selection state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AppSelectionState {
    /// `None` until the first selection, then only ever replaced
    pub active_mood_id: Option<String>,
    /// Monotonic within a session
    pub easter_egg_unlocked: bool,
}
