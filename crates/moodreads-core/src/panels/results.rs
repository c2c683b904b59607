use std::time::Duration;

use serde_json::Value;
use tracing::{debug, warn};

use crate::config::MoodConfig;
use crate::error::{MoodError, MoodResult};
use crate::motion::MotionWatch;
use crate::surface::{NodeId, Surface};
use crate::timers::{Deferred, TaskBatch, TimerQueue};
use crate::types::{BookCandidate, BookRecommendation};

pub const CARD_CLASS: &str = "book-card";
pub const CARD_VISIBLE_CLASS: &str = "book-card--animate";
pub const EMPTY_CLASS: &str = "results-panel__empty";

pub const DEFAULT_EMPTY_MESSAGE: &str = "No recommendations found. Try selecting a different mood!";
pub const INCOMPLETE_DATA_MESSAGE: &str =
    "Some books had incomplete data. Please try a different mood.";
pub const ERROR_MESSAGE: &str = "Oops! Something went wrong. Please try again.";

/// Why the panel shows a notice instead of cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyReason {
    /// Input absent or empty
    NoBooks,
    /// Every candidate failed validation
    IncompleteData,
    /// The coordinator hit an error while handling a selection
    Error,
}

impl EmptyReason {
    pub fn message(&self) -> &'static str {
        match self {
            EmptyReason::NoBooks => DEFAULT_EMPTY_MESSAGE,
            EmptyReason::IncompleteData => INCOMPLETE_DATA_MESSAGE,
            EmptyReason::Error => ERROR_MESSAGE,
        }
    }
}

/// What a render produced: cards or exactly one empty-state notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderOutcome {
    Cards { rendered: usize, filtered: usize },
    Empty(EmptyReason),
}

/// Renders recommendation cards with a staggered reveal.
///
/// Every reveal timer the panel schedules is tracked in one batch, which is
/// cancelled whenever the panel is re-rendered or cleared.
#[derive(Debug)]
pub struct ResultsPanel {
    container: NodeId,
    motion: MotionWatch,
    config: MoodConfig,
    reveals: TaskBatch,
}

impl ResultsPanel {
    /// Attach to `container`, which must exist on `surface`.
    pub fn new<S: Surface>(
        surface: &S,
        container: NodeId,
        motion: MotionWatch,
        config: MoodConfig,
    ) -> MoodResult<Self> {
        if !surface.contains(container) {
            return Err(MoodError::UnknownNode(container));
        }
        Ok(Self {
            container,
            motion,
            config,
            reveals: TaskBatch::new(),
        })
    }

    pub fn container(&self) -> NodeId {
        self.container
    }

    /// Reveal timers from the current render that have not fired yet.
    pub fn pending_reveals(&self, timers: &TimerQueue<Deferred>) -> usize {
        self.reveals.pending(timers)
    }

    /// Replace the panel content with cards for the valid subset of `books`.
    pub fn display_books<S: Surface>(
        &mut self,
        surface: &mut S,
        timers: &mut TimerQueue<Deferred>,
        books: Option<&[BookCandidate]>,
    ) -> MoodResult<RenderOutcome> {
        self.clear(surface, timers)?;

        let books = match books {
            Some(books) if !books.is_empty() => books,
            _ => {
                debug!("No books provided, showing empty state");
                return self.show_empty(surface, EmptyReason::NoBooks);
            }
        };

        let valid: Vec<BookRecommendation> =
            books.iter().filter_map(validate_candidate).collect();

        if valid.is_empty() {
            return self.show_empty(surface, EmptyReason::IncompleteData);
        }

        let filtered = books.len() - valid.len();
        if filtered > 0 {
            warn!(filtered, "Filtered out invalid book(s) with missing data");
        }

        for (index, book) in valid.iter().enumerate() {
            let card = create_card(surface, book)?;
            surface.append_child(self.container, card)?;
            let handle = timers.schedule(Duration::ZERO, Deferred::AnimateCard { card, index });
            self.reveals.track(handle);
        }

        debug!(rendered = valid.len(), filtered, "Book cards rendered");
        Ok(RenderOutcome::Cards {
            rendered: valid.len(),
            filtered,
        })
    }

    /// Convenience wrapper for already-validated recommendations.
    pub fn display_recommendations<S: Surface>(
        &mut self,
        surface: &mut S,
        timers: &mut TimerQueue<Deferred>,
        books: &[BookRecommendation],
    ) -> MoodResult<RenderOutcome> {
        let candidates: Vec<BookCandidate> = books.iter().cloned().map(Into::into).collect();
        self.display_books(surface, timers, Some(&candidates))
    }

    /// Render from untyped JSON.
    ///
    /// Anything but an array is treated as absent input; array items that
    /// are not objects become empty candidates and are filtered out.
    pub fn display_json<S: Surface>(
        &mut self,
        surface: &mut S,
        timers: &mut TimerQueue<Deferred>,
        value: &Value,
    ) -> MoodResult<RenderOutcome> {
        let Some(items) = value.as_array() else {
            if !value.is_null() {
                warn!(kind = json_kind(value), "Book list is not an array");
            }
            return self.display_books(surface, timers, None);
        };
        let candidates: Vec<BookCandidate> = items
            .iter()
            .map(|item| match item {
                Value::Object(_) => serde_json::from_value(item.clone()).unwrap_or_else(|e| {
                    warn!(error = %e, "Book record has malformed fields");
                    BookCandidate::default()
                }),
                other => {
                    warn!(kind = json_kind(other), "Invalid book object");
                    BookCandidate::default()
                }
            })
            .collect();
        self.display_books(surface, timers, Some(&candidates))
    }

    /// Cancel pending reveals and remove all content.
    pub fn clear<S: Surface>(
        &mut self,
        surface: &mut S,
        timers: &mut TimerQueue<Deferred>,
    ) -> MoodResult<()> {
        let cancelled = self.reveals.cancel_all(timers);
        if cancelled > 0 {
            debug!(cancelled, "Cancelled pending card reveals");
        }
        surface.clear_children(self.container)
    }

    /// Append a single notice. Callers clear first.
    pub fn show_empty_state<S: Surface>(&self, surface: &mut S, message: &str) -> MoodResult<()> {
        let notice = surface.create_element("div");
        surface.add_class(notice, EMPTY_CLASS)?;
        surface.set_attribute(notice, "role", "status")?;
        surface.set_text(notice, message)?;
        surface.append_child(self.container, notice)
    }

    fn show_empty<S: Surface>(
        &self,
        surface: &mut S,
        reason: EmptyReason,
    ) -> MoodResult<RenderOutcome> {
        self.show_empty_state(surface, reason.message())?;
        Ok(RenderOutcome::Empty(reason))
    }

    /// Next-frame hook: start the card's reveal, or show it at once under
    /// reduced motion.
    pub fn animate_card<S: Surface>(
        &mut self,
        surface: &mut S,
        timers: &mut TimerQueue<Deferred>,
        card: NodeId,
        index: usize,
    ) -> MoodResult<()> {
        if self.motion.reduced() {
            return surface.add_class(card, CARD_VISIBLE_CLASS);
        }
        surface.set_style(card, "will-change", "opacity, transform")?;
        let handle = timers.schedule(self.config.stagger_delay(index), Deferred::RevealCard(card));
        self.reveals.track(handle);
        Ok(())
    }

    pub fn reveal_card<S: Surface>(
        &mut self,
        surface: &mut S,
        timers: &mut TimerQueue<Deferred>,
        card: NodeId,
    ) -> MoodResult<()> {
        surface.add_class(card, CARD_VISIBLE_CLASS)?;
        let handle = timers.schedule(
            self.config.reveal_duration(),
            Deferred::ReleaseWillChange(card),
        );
        self.reveals.track(handle);
        Ok(())
    }

    pub fn release_will_change<S: Surface>(&self, surface: &mut S, card: NodeId) -> MoodResult<()> {
        surface.set_style(card, "will-change", "auto")
    }
}

/// Validate one candidate, logging which fields are missing.
pub fn validate_candidate(candidate: &BookCandidate) -> Option<BookRecommendation> {
    let missing = candidate.missing_fields();
    if !missing.is_empty() {
        warn!(
            missing = %missing.join(", "),
            title = candidate.title.as_deref().unwrap_or(""),
            "Book missing required fields"
        );
        return None;
    }
    candidate.validated()
}

fn create_card<S: Surface>(surface: &mut S, book: &BookRecommendation) -> MoodResult<NodeId> {
    let card = surface.create_element("article");
    surface.add_class(card, CARD_CLASS)?;
    surface.set_attribute(card, "role", "article")?;
    surface.set_attribute(
        card,
        "aria-label",
        &format!("Book: {} by {}", book.title, book.author),
    )?;
    surface.set_attribute(card, "tabindex", "0")?;

    let title = surface.create_element("h3");
    surface.add_class(title, "book-card__title")?;
    surface.set_text(title, &book.title)?;

    let author = surface.create_element("p");
    surface.add_class(author, "book-card__author")?;
    surface.set_text(author, &format!("by {}", book.author))?;

    let description = surface.create_element("p");
    surface.add_class(description, "book-card__description")?;
    surface.set_text(description, &book.description)?;

    surface.append_child(card, title)?;
    surface.append_child(card, author)?;
    surface.append_child(card, description)?;
    Ok(card)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::DomTree;
    use serde_json::json;

    fn setup(reduced: bool) -> (DomTree, TimerQueue<Deferred>, ResultsPanel) {
        let mut tree = DomTree::new();
        let node = tree.create_element("section");
        tree.append_child(tree.root(), node).unwrap();
        let panel =
            ResultsPanel::new(&tree, node, MotionWatch::fixed(reduced), MoodConfig::default())
                .unwrap();
        (tree, TimerQueue::new(), panel)
    }

    fn book(n: usize) -> BookCandidate {
        BookRecommendation::new(format!("Book {n}"), format!("Author {n}"), format!("Desc {n}"))
            .into()
    }

    /// Run every due timer through the panel, as the coordinator does.
    fn run_timers(
        tree: &mut DomTree,
        timers: &mut TimerQueue<Deferred>,
        panel: &mut ResultsPanel,
        elapsed: Duration,
    ) {
        let mut step = elapsed;
        loop {
            let due = timers.advance(step);
            if due.is_empty() {
                break;
            }
            for action in due {
                match action {
                    Deferred::AnimateCard { card, index } => {
                        panel.animate_card(tree, timers, card, index).unwrap()
                    }
                    Deferred::RevealCard(card) => panel.reveal_card(tree, timers, card).unwrap(),
                    Deferred::ReleaseWillChange(card) => {
                        panel.release_will_change(tree, card).unwrap()
                    }
                    other => panic!("unexpected action {other:?}"),
                }
            }
            step = Duration::ZERO;
        }
    }

    #[test]
    fn rejects_missing_container() {
        let tree = DomTree::new();
        let mut other = DomTree::new();
        let foreign = other.create_element("section");
        let result =
            ResultsPanel::new(&tree, foreign, MotionWatch::fixed(false), MoodConfig::default());
        assert!(matches!(result, Err(MoodError::UnknownNode(_))));
    }

    #[test]
    fn renders_accessible_cards() {
        let (mut tree, mut timers, mut panel) = setup(false);
        let outcome = panel
            .display_books(&mut tree, &mut timers, Some(&[book(1), book(2)]))
            .unwrap();
        assert_eq!(outcome, RenderOutcome::Cards { rendered: 2, filtered: 0 });

        let cards = tree.query_class(panel.container(), CARD_CLASS);
        assert_eq!(cards.len(), 2);
        assert_eq!(
            tree.attribute(cards[0], "aria-label").as_deref(),
            Some("Book: Book 1 by Author 1")
        );
        assert_eq!(tree.attribute(cards[0], "tabindex").as_deref(), Some("0"));
        assert_eq!(tree.text_content(cards[1]), "Book 2by Author 2Desc 2");
    }

    #[test]
    fn empty_and_absent_input_show_one_notice() {
        for input in [None, Some(&[][..])] {
            let (mut tree, mut timers, mut panel) = setup(false);
            let outcome = panel.display_books(&mut tree, &mut timers, input).unwrap();
            assert_eq!(outcome, RenderOutcome::Empty(EmptyReason::NoBooks));
            let notices = tree.query_class(panel.container(), EMPTY_CLASS);
            assert_eq!(notices.len(), 1);
            assert!(tree.text_content(notices[0]).contains("No recommendations found"));
            assert!(tree.query_class(panel.container(), CARD_CLASS).is_empty());
        }
    }

    #[test]
    fn all_invalid_shows_incomplete_notice() {
        let (mut tree, mut timers, mut panel) = setup(false);
        let bad = BookCandidate {
            title: Some("Title".into()),
            ..BookCandidate::default()
        };
        let outcome = panel
            .display_books(&mut tree, &mut timers, Some(&[bad, BookCandidate::default()]))
            .unwrap();
        assert_eq!(outcome, RenderOutcome::Empty(EmptyReason::IncompleteData));
        let notices = tree.query_class(panel.container(), EMPTY_CLASS);
        assert_eq!(tree.text_content(notices[0]), INCOMPLETE_DATA_MESSAGE);
    }

    #[test]
    fn partial_batch_renders_valid_subset() {
        let (mut tree, mut timers, mut panel) = setup(false);
        let mut missing_description = book(2);
        missing_description.description = Some("  ".into());
        let outcome = panel
            .display_books(&mut tree, &mut timers, Some(&[book(1), missing_description]))
            .unwrap();
        assert_eq!(outcome, RenderOutcome::Cards { rendered: 1, filtered: 1 });
    }

    #[test]
    fn rerender_cancels_previous_reveals() {
        let (mut tree, mut timers, mut panel) = setup(false);
        panel
            .display_books(&mut tree, &mut timers, Some(&[book(1), book(2)]))
            .unwrap();
        let first_batch: Vec<_> = panel.reveals.handles().to_vec();

        panel
            .display_books(&mut tree, &mut timers, Some(&[book(3), book(4), book(5)]))
            .unwrap();
        assert!(first_batch.iter().all(|h| !timers.is_pending(*h)));
        assert_eq!(timers.pending(), 3);
        assert_eq!(panel.pending_reveals(&timers), 3);
        assert_eq!(tree.query_class(panel.container(), CARD_CLASS).len(), 3);
    }

    #[test]
    fn cards_reveal_with_bounded_stagger() {
        let (mut tree, mut timers, mut panel) = setup(false);
        let books: Vec<_> = (0..5).map(book).collect();
        panel.display_books(&mut tree, &mut timers, Some(&books)).unwrap();

        // Frame hook fires, every card gets a reveal timer.
        run_timers(&mut tree, &mut timers, &mut panel, Duration::ZERO);
        let cards = tree.query_class(panel.container(), CARD_CLASS);
        assert!(cards.iter().all(|c| !tree.has_class(*c, CARD_VISIBLE_CLASS)));
        assert_eq!(
            tree.node(cards[0]).unwrap().styles()["will-change"],
            "opacity, transform"
        );

        run_timers(&mut tree, &mut timers, &mut panel, Duration::from_millis(100));
        let visible = cards
            .iter()
            .filter(|c| tree.has_class(**c, CARD_VISIBLE_CLASS))
            .count();
        assert_eq!(visible, 2);

        // The ceiling reveals everything else at 150ms.
        run_timers(&mut tree, &mut timers, &mut panel, Duration::from_millis(50));
        assert!(cards.iter().all(|c| tree.has_class(*c, CARD_VISIBLE_CLASS)));

        run_timers(&mut tree, &mut timers, &mut panel, Duration::from_millis(500));
        assert_eq!(tree.node(cards[4]).unwrap().styles()["will-change"], "auto");
        assert_eq!(panel.pending_reveals(&timers), 0);
    }

    #[test]
    fn reduced_motion_skips_stagger() {
        let (mut tree, mut timers, mut panel) = setup(true);
        panel
            .display_books(&mut tree, &mut timers, Some(&[book(1), book(2)]))
            .unwrap();
        run_timers(&mut tree, &mut timers, &mut panel, Duration::ZERO);
        let cards = tree.query_class(panel.container(), CARD_CLASS);
        assert!(cards.iter().all(|c| tree.has_class(*c, CARD_VISIBLE_CLASS)));
        assert_eq!(timers.pending(), 0);
    }

    #[test]
    fn clear_removes_cards_and_timers() {
        let (mut tree, mut timers, mut panel) = setup(false);
        panel
            .display_books(&mut tree, &mut timers, Some(&[book(1)]))
            .unwrap();
        panel.clear(&mut tree, &mut timers).unwrap();
        assert_eq!(timers.pending(), 0);
        assert!(tree.node(panel.container()).unwrap().children().is_empty());
    }

    #[test]
    fn json_input_is_filtered() {
        let (mut tree, mut timers, mut panel) = setup(false);
        let value = json!([
            { "title": "Kept", "author": "A", "description": "D" },
            42,
            { "title": "No author", "description": "D" },
            { "title": 7, "author": "A", "description": "D" }
        ]);
        let outcome = panel.display_json(&mut tree, &mut timers, &value).unwrap();
        assert_eq!(outcome, RenderOutcome::Cards { rendered: 1, filtered: 3 });

        for not_a_list in [json!(null), json!("books"), json!({ "title": "x" })] {
            let outcome = panel.display_json(&mut tree, &mut timers, &not_a_list).unwrap();
            assert_eq!(outcome, RenderOutcome::Empty(EmptyReason::NoBooks));
        }
    }
}
