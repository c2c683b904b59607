//! Recommendation lookup.
//!
//! Wraps a [`BookSource`] with the soft-failure policy: bad input, empty
//! results and lookup errors all come back as an empty list, and a short
//! list is only a warning.

use tracing::{debug, error, warn};

use crate::catalog::{BookSource, StaticBooks};
use crate::types::BookRecommendation;

pub const DEFAULT_MIN_RECOMMENDATIONS: usize = 3;

/// Looks up books for a mood without ever failing.
#[derive(Debug, Clone)]
pub struct RecommendationEngine<B = StaticBooks> {
    source: B,
    min_recommendations: usize,
}

impl Default for RecommendationEngine<StaticBooks> {
    fn default() -> Self {
        Self::new(StaticBooks)
    }
}

impl<B: BookSource> RecommendationEngine<B> {
    pub fn new(source: B) -> Self {
        Self {
            source,
            min_recommendations: DEFAULT_MIN_RECOMMENDATIONS,
        }
    }

    pub fn with_min_recommendations(mut self, min: usize) -> Self {
        self.min_recommendations = min;
        self
    }

    pub fn min_recommendations(&self) -> usize {
        self.min_recommendations
    }

    /// Books for `mood_id` in catalog order.
    pub fn get_recommendations(&self, mood_id: &str) -> Vec<BookRecommendation> {
        if mood_id.trim().is_empty() {
            error!(mood_id, "Invalid mood id provided to get_recommendations");
            return Vec::new();
        }

        let books = match self.source.books_for(mood_id) {
            Ok(books) => books,
            Err(e) => {
                error!(mood_id, error = %e, "Error getting recommendations");
                return Vec::new();
            }
        };

        if books.is_empty() {
            warn!(mood_id, "No books found for mood");
            return books;
        }

        if books.len() < self.min_recommendations {
            warn!(
                mood_id,
                found = books.len(),
                expected = self.min_recommendations,
                "Fewer books than expected for mood"
            );
        }

        debug!(mood_id, count = books.len(), "Recommendations resolved");
        books
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{MoodError, MoodResult};

    struct Failing;

    impl BookSource for Failing {
        fn books_for(&self, _mood_id: &str) -> MoodResult<Vec<BookRecommendation>> {
            Err(MoodError::Lookup("index offline".to_string()))
        }
    }

    struct Sparse;

    impl BookSource for Sparse {
        fn books_for(&self, mood_id: &str) -> MoodResult<Vec<BookRecommendation>> {
            Ok(match mood_id {
                "thin" => vec![
                    BookRecommendation::new("One", "A", "First"),
                    BookRecommendation::new("Two", "B", "Second"),
                ],
                _ => Vec::new(),
            })
        }
    }

    #[test]
    fn known_moods_return_catalog_books() {
        let engine = RecommendationEngine::default();
        assert_eq!(engine.get_recommendations("dark").len(), 4);
        assert_eq!(engine.get_recommendations("chaotic").len(), 3);
    }

    #[test]
    fn blank_ids_return_nothing() {
        let engine = RecommendationEngine::default();
        assert!(engine.get_recommendations("").is_empty());
        assert!(engine.get_recommendations("   ").is_empty());
    }

    #[test]
    fn lookup_failure_is_swallowed() {
        let engine = RecommendationEngine::new(Failing);
        assert!(engine.get_recommendations("dark").is_empty());
    }

    #[test]
    fn under_supply_still_returns_books() {
        let engine = RecommendationEngine::new(Sparse);
        assert_eq!(engine.get_recommendations("thin").len(), 2);
        assert!(engine.get_recommendations("other").is_empty());
    }

    #[test]
    fn minimum_is_configurable() {
        let engine = RecommendationEngine::default().with_min_recommendations(10);
        assert_eq!(engine.min_recommendations(), 10);
        assert_eq!(engine.get_recommendations("cozy").len(), 4);
    }
}
