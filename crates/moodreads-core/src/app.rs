//! The mood coordinator.
//!
//! [`MoodReads`] owns the surface, the timer queue and every panel. It is the
//! single handler for "a mood was selected" and routes clicks and timer
//! expirations to the right panel.
//!
//! ## Selection order
//!
//! 1. theme (so colors match the content that follows)
//! 2. message
//! 3. recommendations, rendered as cards or an empty state
//! 4. active marker in the selector
//!
//! A failure in any step is logged and replaces the results with a generic
//! error notice. Steps that already completed stay applied, and the mood is
//! still marked active.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, error, info, warn};

use crate::catalog::{BookSource, StaticBooks};
use crate::config::MoodConfig;
use crate::error::{MoodError, MoodResult};
use crate::motion::MotionPreference;
use crate::panels::{
    EmptyReason, MessagePanel, MoodSelector, RenderOutcome, ResultsPanel, ThemeApplier,
    ERROR_MESSAGE, MOOD_ID_ATTR,
};
use crate::recommend::RecommendationEngine;
use crate::storage::{unlock_flag, SessionStore};
use crate::surface::{NodeId, Surface};
use crate::timers::{Deferred, TimerQueue};
use crate::types::AppSelectionState;
use crate::unlock::{GestureOutcome, UnlockGesture};

/// Session store shared between the coordinator and the shell.
pub type SharedStore = Arc<dyn SessionStore + Send + Sync>;

pub const MOOD_SELECTOR_ID: &str = "mood-selector";
pub const MESSAGE_PANEL_ID: &str = "message-panel";
pub const RESULTS_PANEL_ID: &str = "results-panel";
pub const LOGO_ID: &str = "logo";

/// The four page containers the coordinator drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Containers {
    pub mood_selector: NodeId,
    pub message_panel: NodeId,
    pub results_panel: NodeId,
    pub logo: NodeId,
}

impl Containers {
    /// Find every container by its fixed id.
    pub fn locate<S: Surface>(surface: &S) -> MoodResult<Self> {
        let find = |id: &str| {
            surface
                .find_by_id(id)
                .ok_or_else(|| MoodError::MissingContainer(id.to_string()))
        };
        Ok(Self {
            mood_selector: find(MOOD_SELECTOR_ID)?,
            message_panel: find(MESSAGE_PANEL_ID)?,
            results_panel: find(RESULTS_PANEL_ID)?,
            logo: find(LOGO_ID)?,
        })
    }
}

/// Build the page skeleton under the surface root.
///
/// ```text
/// div.app
/// ├── header.app-header
/// │   ├── h1#logo
/// │   └── p.tagline
/// ├── div#mood-selector
/// ├── div#message-panel
/// └── div#results-panel
/// ```
pub fn build_shell<S: Surface>(surface: &mut S) -> MoodResult<Containers> {
    let root = surface.root();
    surface.add_class(root, "app")?;

    let header = surface.create_element("header");
    surface.add_class(header, "app-header")?;
    surface.append_child(root, header)?;

    let logo = surface.create_element("h1");
    surface.set_attribute(logo, "id", LOGO_ID)?;
    surface.add_class(logo, "logo")?;
    surface.set_text(logo, "📚 MoodReads")?;
    surface.append_child(header, logo)?;

    let tagline = surface.create_element("p");
    surface.add_class(tagline, "tagline")?;
    surface.set_text(tagline, "How are you feeling today?")?;
    surface.append_child(header, tagline)?;

    let mut section = |id: &str, role: &str| -> MoodResult<NodeId> {
        let node = surface.create_element("div");
        surface.set_attribute(node, "id", id)?;
        surface.add_class(node, id)?;
        surface.set_attribute(node, "role", role)?;
        surface.append_child(root, node)?;
        Ok(node)
    };
    let mood_selector = section(MOOD_SELECTOR_ID, "group")?;
    let message_panel = section(MESSAGE_PANEL_ID, "status")?;
    let results_panel = section(RESULTS_PANEL_ID, "region")?;

    Ok(Containers {
        mood_selector,
        message_panel,
        results_panel,
        logo,
    })
}

/// What a click landed on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickTarget {
    Mood(String),
    Logo(GestureOutcome),
    Nothing,
}

/// The application core: panels, timers, storage and selection state.
pub struct MoodReads<S, B = StaticBooks> {
    surface: S,
    store: SharedStore,
    motion: MotionPreference,
    timers: TimerQueue<Deferred>,
    containers: Containers,
    theme: ThemeApplier,
    message: MessagePanel,
    results: ResultsPanel,
    selector: MoodSelector,
    gesture: UnlockGesture,
    engine: RecommendationEngine<B>,
    config: MoodConfig,
}

impl<S: Surface> MoodReads<S, StaticBooks> {
    /// Mount on a surface that already contains the page containers.
    pub fn mount(
        surface: S,
        store: SharedStore,
        motion: MotionPreference,
        config: MoodConfig,
    ) -> MoodResult<Self> {
        Self::mount_with_source(surface, store, motion, config, StaticBooks)
    }
}

impl<S: Surface, B: BookSource> MoodReads<S, B> {
    pub fn mount_with_source(
        mut surface: S,
        store: SharedStore,
        motion: MotionPreference,
        config: MoodConfig,
        source: B,
    ) -> MoodResult<Self> {
        config.validate()?;
        let containers = Containers::locate(&surface).inspect_err(|e| {
            error!(error = %e, "Required page containers not found");
        })?;

        let theme = ThemeApplier::new(surface.root(), motion.subscribe());
        let message = MessagePanel::new(containers.message_panel, motion.subscribe());
        let results = ResultsPanel::new(
            &surface,
            containers.results_panel,
            motion.subscribe(),
            config.clone(),
        )?;
        let selector = MoodSelector::new(
            containers.mood_selector,
            unlock_flag::is_unlocked(store.as_ref()),
        );
        let gesture = UnlockGesture::new(containers.logo, store.as_ref(), &config);
        let engine =
            RecommendationEngine::new(source).with_min_recommendations(config.min_recommendations);

        theme.apply(&mut surface, "neutral")?;
        gesture.attach(&mut surface)?;
        selector.render(&mut surface)?;

        info!(
            easter_egg_unlocked = selector.is_unlocked(),
            reduced_motion = motion.reduced(),
            "MoodReads mounted"
        );

        Ok(Self {
            surface,
            store,
            motion,
            timers: TimerQueue::new(),
            containers,
            theme,
            message,
            results,
            selector,
            gesture,
            engine,
            config,
        })
    }

    /// Handle a mood selection. Never fails; errors end in the error notice.
    pub fn select_mood(&mut self, mood_id: &str) -> RenderOutcome {
        info!(mood_id, "Mood selected");
        match self.try_select_mood(mood_id) {
            Ok(outcome) => outcome,
            Err(e) => {
                error!(mood_id, error = ?anyhow::Error::from(e), "Error handling mood change");
                if let Err(e) = self.show_error_state() {
                    error!(error = %e, "Could not show error state");
                }
                // The selection still counts even though rendering failed.
                if let Err(e) = self.selector.set_active(&mut self.surface, mood_id) {
                    error!(mood_id, error = %e, "Could not mark mood as active");
                }
                RenderOutcome::Empty(EmptyReason::Error)
            }
        }
    }

    fn try_select_mood(&mut self, mood_id: &str) -> MoodResult<RenderOutcome> {
        self.theme.apply(&mut self.surface, mood_id)?;
        self.message.show(&mut self.surface, mood_id)?;
        let books = self.engine.get_recommendations(mood_id);
        debug!(mood_id, count = books.len(), "Recommendations received");
        let outcome =
            self.results
                .display_recommendations(&mut self.surface, &mut self.timers, &books)?;
        self.selector.set_active(&mut self.surface, mood_id)?;
        Ok(outcome)
    }

    fn show_error_state(&mut self) -> MoodResult<()> {
        self.results.clear(&mut self.surface, &mut self.timers)?;
        self.results.show_empty_state(&mut self.surface, ERROR_MESSAGE)
    }

    /// One click on the unlock trigger.
    pub fn click_logo(&mut self) -> GestureOutcome {
        let outcome =
            self.gesture
                .register_click(&mut self.surface, &mut self.timers, self.store.as_ref());
        if outcome == GestureOutcome::Unlocked {
            info!("Easter egg unlocked! Chaotic Gremlin Mode activated!");
            if let Err(e) = self.selector.unlock_easter_egg(&mut self.surface) {
                error!(error = %e, "Could not reveal easter egg mood");
            }
        }
        outcome
    }

    /// Route a click on any node: mood buttons select, the logo counts.
    pub fn handle_click(&mut self, node: NodeId) -> ClickTarget {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == self.containers.logo {
                return ClickTarget::Logo(self.click_logo());
            }
            if let Some(mood_id) = self.surface.attribute(id, MOOD_ID_ATTR) {
                self.select_mood(&mood_id);
                return ClickTarget::Mood(mood_id);
            }
            if id == self.containers.mood_selector {
                break;
            }
            current = self.surface.parent(id);
        }
        ClickTarget::Nothing
    }

    /// Advance the timer clock and run everything that came due.
    ///
    /// The clock steps from deadline to deadline, so actions scheduled while
    /// dispatching also run if they fall inside `elapsed`. Returns how many
    /// actions ran.
    pub fn advance(&mut self, elapsed: Duration) -> usize {
        let target = self.timers.now() + elapsed;
        let mut ran = 0;
        while let Some(wait) = self.timers.next_due() {
            if self.timers.now() + wait > target {
                break;
            }
            for action in self.timers.advance(wait) {
                ran += 1;
                if let Err(e) = self.dispatch(action) {
                    warn!(?action, error = %e, "Deferred action failed");
                }
            }
        }
        let rest = target.saturating_sub(self.timers.now());
        self.timers.advance(rest);
        ran
    }

    fn dispatch(&mut self, action: Deferred) -> MoodResult<()> {
        match action {
            Deferred::ResetClicks => {
                self.gesture.reset_clicks(&mut self.timers);
                Ok(())
            }
            Deferred::ClearUnlockFeedback => self.gesture.clear_feedback(&mut self.surface),
            Deferred::AnimateCard { card, index } => {
                self.results
                    .animate_card(&mut self.surface, &mut self.timers, card, index)
            }
            Deferred::RevealCard(card) => {
                self.results
                    .reveal_card(&mut self.surface, &mut self.timers, card)
            }
            Deferred::ReleaseWillChange(card) => {
                self.results.release_will_change(&mut self.surface, card)
            }
        }
    }

    /// Forward a platform motion-preference change to every panel.
    pub fn set_reduced_motion(&self, reduced: bool) {
        debug!(reduced, "Motion preference changed");
        self.motion.set_reduced(reduced);
    }

    pub fn state(&self) -> AppSelectionState {
        AppSelectionState {
            active_mood_id: self.selector.active_mood().map(str::to_string),
            easter_egg_unlocked: self.gesture.is_unlocked() || self.selector.is_unlocked(),
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn containers(&self) -> &Containers {
        &self.containers
    }

    pub fn timers(&self) -> &TimerQueue<Deferred> {
        &self.timers
    }

    pub fn results(&self) -> &ResultsPanel {
        &self.results
    }

    pub fn config(&self) -> &MoodConfig {
        &self.config
    }

    pub fn store(&self) -> &SharedStore {
        &self.store
    }

    /// Time until the next timer is due, for the shell's tick pacing.
    pub fn next_due(&self) -> Option<Duration> {
        self.timers.next_due()
    }
}
