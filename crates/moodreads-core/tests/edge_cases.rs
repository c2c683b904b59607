//! Boundary inputs: absent data, unknown ids, broken storage, odd JSON.

use std::sync::Arc;
use std::time::Duration;

use moodreads_core::catalog::{mood_by_id, themes};
use moodreads_core::logging::CaptureLayer;
use moodreads_core::panels::{
    ResultsPanel, BUTTON_CLASS, CARD_CLASS, DEFAULT_EMPTY_MESSAGE, EMPTY_CLASS,
    INCOMPLETE_DATA_MESSAGE,
};
use moodreads_core::{
    build_shell, unlock_flag, BookCandidate, DomTree, EmptyReason, FileSessionStore, MemoryStore,
    MoodConfig, MoodReads, MotionWatch, NodeId, RecommendationEngine, RenderOutcome, SessionStore,
    Surface, TimerQueue,
};
use serde_json::json;
use tracing_subscriber::prelude::*;

struct Panel {
    tree: DomTree,
    timers: TimerQueue<moodreads_core::Deferred>,
    panel: ResultsPanel,
    container: NodeId,
}

impl Panel {
    fn new() -> Self {
        let mut tree = DomTree::new();
        let container = tree.create_element("div");
        tree.append_child(tree.root(), container).unwrap();
        let panel = ResultsPanel::new(
            &tree,
            container,
            MotionWatch::fixed(false),
            MoodConfig::default(),
        )
        .unwrap();
        Self {
            tree,
            timers: TimerQueue::new(),
            panel,
            container,
        }
    }

    fn show(&mut self, books: Option<&[BookCandidate]>) -> RenderOutcome {
        self.panel
            .display_books(&mut self.tree, &mut self.timers, books)
            .unwrap()
    }

    fn show_json(&mut self, value: serde_json::Value) -> RenderOutcome {
        self.panel
            .display_json(&mut self.tree, &mut self.timers, &value)
            .unwrap()
    }

    fn cards(&self) -> usize {
        self.tree.query_class(self.container, CARD_CLASS).len()
    }

    fn notices(&self) -> Vec<String> {
        self.tree
            .query_class(self.container, EMPTY_CLASS)
            .into_iter()
            .map(|n| self.tree.text_content(n))
            .collect()
    }
}

fn candidate(title: &str, author: &str, description: &str) -> BookCandidate {
    BookCandidate {
        title: Some(title.into()),
        author: Some(author.into()),
        description: Some(description.into()),
    }
}

// ============================================================================
// Results panel input
// ============================================================================

#[test]
fn absent_or_empty_books_show_one_default_notice() {
    let mut panel = Panel::new();
    assert_eq!(panel.show(None), RenderOutcome::Empty(EmptyReason::NoBooks));
    assert_eq!(panel.notices(), vec![DEFAULT_EMPTY_MESSAGE.to_string()]);

    assert_eq!(panel.show(Some(&[])), RenderOutcome::Empty(EmptyReason::NoBooks));
    assert_eq!(panel.notices().len(), 1);
    assert_eq!(panel.cards(), 0);
}

#[test]
fn all_invalid_books_show_incomplete_notice() {
    let mut panel = Panel::new();
    let books = [BookCandidate::default(), candidate("Title", "", "Text")];
    assert_eq!(
        panel.show(Some(&books)),
        RenderOutcome::Empty(EmptyReason::IncompleteData)
    );
    assert_eq!(panel.notices(), vec![INCOMPLETE_DATA_MESSAGE.to_string()]);
}

#[test]
fn one_invalid_book_logs_one_warning() {
    let mut panel = Panel::new();
    let books = [
        candidate("Rebecca", "Daphne du Maurier", "A haunting gothic novel."),
        BookCandidate {
            title: Some("Valid Title".into()),
            author: Some("Valid Author".into()),
            description: None,
        },
    ];

    let (layer, logs) = CaptureLayer::new();
    let subscriber = tracing_subscriber::registry().with(layer);
    let outcome = tracing::subscriber::with_default(subscriber, || panel.show(Some(&books)));

    assert_eq!(outcome, RenderOutcome::Cards { rendered: 1, filtered: 1 });
    assert_eq!(panel.cards(), 1);
    assert_eq!(logs.count("warn", "Book missing required fields"), 1);
    assert_eq!(logs.count("warn", "Filtered out invalid book"), 1);
    let entry = logs
        .entries()
        .into_iter()
        .find(|e| e.msg.contains("missing required"))
        .unwrap();
    assert_eq!(entry.field("missing"), Some(&json!("description")));
}

#[test]
fn second_render_replaces_first_without_stale_timers() {
    let mut panel = Panel::new();
    panel.show(Some(&[candidate("A", "a", "x"), candidate("B", "b", "y")]));
    panel.show(Some(&[
        candidate("C", "c", "z"),
        candidate("D", "d", "w"),
        candidate("E", "e", "v"),
    ]));

    assert_eq!(panel.cards(), 3);
    assert_eq!(panel.timers.pending(), 3);
    assert_eq!(panel.panel.pending_reveals(&panel.timers), 3);
}

#[test]
fn card_markup_is_accessible() {
    let mut panel = Panel::new();
    panel.show(Some(&[candidate("Dune", "Frank Herbert", "Spice and sand.")]));
    let card = panel.tree.query_class(panel.container, CARD_CLASS)[0];
    let element = panel.tree.node(card).unwrap();
    assert_eq!(element.tag(), "article");
    assert_eq!(
        panel.tree.attribute(card, "aria-label").as_deref(),
        Some("Book: Dune by Frank Herbert")
    );
    assert_eq!(panel.tree.attribute(card, "tabindex").as_deref(), Some("0"));
    assert_eq!(
        panel.tree.text_content(card),
        "Duneby Frank HerbertSpice and sand."
    );
}

#[test]
fn json_input_is_tolerated() {
    let mut panel = Panel::new();
    assert_eq!(
        panel.show_json(json!(null)),
        RenderOutcome::Empty(EmptyReason::NoBooks)
    );
    assert_eq!(
        panel.show_json(json!({"title": "Not a list"})),
        RenderOutcome::Empty(EmptyReason::NoBooks)
    );
    assert_eq!(
        panel.show_json(json!([
            null,
            42,
            {"title": "Circe", "author": "Madeline Miller", "description": "A witch's tale."},
            {"title": "Broken", "author": 7, "description": "Typed wrong."}
        ])),
        RenderOutcome::Cards { rendered: 1, filtered: 3 }
    );
    assert_eq!(panel.cards(), 1);
}

// ============================================================================
// Unknown ids
// ============================================================================

#[test]
fn unknown_mood_resolves_to_neutral_everywhere() {
    for id in ["", "   ", "DARK", "unknown-mood", "neutral"] {
        assert!(mood_by_id(id).is_none());
        assert_eq!(themes::resolve(id).mood_id, "neutral");
        assert!(RecommendationEngine::default().get_recommendations(id).is_empty());
    }
}

#[test]
fn selecting_unknown_mood_shows_neutral_and_empty_state() {
    let mut tree = DomTree::new();
    build_shell(&mut tree).unwrap();
    let mut app = MoodReads::mount(
        tree,
        Arc::new(MemoryStore::new()),
        Default::default(),
        MoodConfig::default(),
    )
    .unwrap();
    app.select_mood("dark");

    let outcome = app.select_mood("no-such-mood");
    assert_eq!(outcome, RenderOutcome::Empty(EmptyReason::NoBooks));

    let tree = app.surface();
    let root = tree.node(tree.root()).unwrap();
    assert_eq!(root.styles()["--color-background"], "#f5f5f5");
    assert_eq!(tree.text_content(app.containers().message_panel), "");
    assert_eq!(
        tree.query_class(app.containers().results_panel, EMPTY_CLASS).len(),
        1
    );
}

#[test]
fn blank_mood_id_logs_error_and_returns_nothing() {
    let (layer, logs) = CaptureLayer::new();
    let subscriber = tracing_subscriber::registry().with(layer);
    let books = tracing::subscriber::with_default(subscriber, || {
        RecommendationEngine::default().get_recommendations("  ")
    });
    assert!(books.is_empty());
    assert_eq!(logs.errors(), 1);
}

#[test]
fn results_panel_rejects_foreign_container() {
    let mut other = DomTree::new();
    let foreign = build_shell(&mut other).unwrap().results_panel;
    let tree = DomTree::new();
    let result = ResultsPanel::new(
        &tree,
        foreign,
        MotionWatch::fixed(false),
        MoodConfig::default(),
    );
    assert!(result.is_err());
}

// ============================================================================
// Storage
// ============================================================================

#[test]
fn unavailable_storage_reads_as_locked() {
    let store = MemoryStore::unavailable();
    assert!(!unlock_flag::is_unlocked(&store));
    assert!(!unlock_flag::persist(&store));

    store.set_available(true);
    assert!(unlock_flag::persist(&store));
    assert!(unlock_flag::is_unlocked(&store));
}

#[test]
fn unavailable_storage_mounts_locked() {
    let mut tree = DomTree::new();
    build_shell(&mut tree).unwrap();
    let app = MoodReads::mount(
        tree,
        Arc::new(MemoryStore::unavailable()),
        Default::default(),
        MoodConfig::default(),
    )
    .unwrap();
    assert!(!app.state().easter_egg_unlocked);
    assert_eq!(
        app.surface()
            .query_class(app.containers().mood_selector, BUTTON_CLASS)
            .len(),
        4
    );
}

#[test]
fn file_session_survives_reopen() {
    let temp = tempfile::TempDir::new().unwrap();
    let path = temp.path().join("nested").join("session.json");

    {
        let mut tree = DomTree::new();
        build_shell(&mut tree).unwrap();
        let store = Arc::new(FileSessionStore::open(&path).unwrap());
        let mut app =
            MoodReads::mount(tree, store, Default::default(), MoodConfig::default()).unwrap();
        for _ in 0..3 {
            app.click_logo();
        }
        app.advance(Duration::from_secs(1));
    }

    let reopened = FileSessionStore::open(&path).unwrap();
    assert_eq!(
        reopened.get(unlock_flag::KEY).unwrap().as_deref(),
        Some("true")
    );
}

#[test]
fn unknown_storage_value_reads_as_locked() {
    let store = MemoryStore::new();
    store.set(unlock_flag::KEY, "yes").unwrap();
    assert!(!unlock_flag::is_unlocked(&store));
}

// ============================================================================
// Config
// ============================================================================

#[test]
fn partial_config_file_keeps_defaults() {
    let temp = tempfile::TempDir::new().unwrap();
    let path = temp.path().join("moodreads.json");
    std::fs::write(&path, r#"{ "gesture_window_ms": 1500 }"#).unwrap();

    let config = MoodConfig::load(&path).unwrap();
    assert_eq!(config.gesture_window(), Duration::from_millis(1500));
    assert_eq!(config.stagger_delay(0), Duration::from_millis(50));
    assert_eq!(config.min_recommendations, 3);
}

#[test]
fn malformed_config_is_an_error() {
    let temp = tempfile::TempDir::new().unwrap();
    let path = temp.path().join("moodreads.json");
    std::fs::write(&path, "{ not json").unwrap();
    assert!(MoodConfig::load(&path).is_err());
}
