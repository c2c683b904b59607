//! Easter-egg unlock gesture.
//!
//! A triple click on the trigger (the logo) within a rolling window unlocks
//! the hidden mood for the rest of the session. The window restarts on every
//! click, so it is measured from the latest click rather than the first.
//!
//! ```text
//! Idle ──click──▶ Counting(1) ──click──▶ Counting(2) ──click──▶ unlock, Idle
//!                      │                      │
//!                      └──── window elapses ──┴──▶ Idle
//! ```
//!
//! Once unlocked, completed gestures are absorbed: no second callback, no
//! second write to storage.

use std::time::Duration;

use tracing::{debug, info, warn};

use crate::config::MoodConfig;
use crate::error::MoodResult;
use crate::storage::{unlock_flag, SessionStore};
use crate::surface::{NodeId, Surface};
use crate::timers::{Deferred, TaskHandle, TimerQueue};

pub const FEEDBACK_CLASS: &str = "easter-egg-unlocked";
pub const TRIGGER_HINT: &str = "Something magical might happen...";

const CLICKS_TO_UNLOCK: u8 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ClickState {
    Idle,
    Counting { count: u8, timeout: TaskHandle },
}

/// Result of feeding one click into the detector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureOutcome {
    /// Gesture in progress with this many clicks
    Counting(u8),
    /// First completed gesture of the session; the caller reveals the mood
    Unlocked,
    /// Gesture completed but the session was already unlocked
    AlreadyUnlocked,
}

/// Triple-click detector bound to one trigger node.
#[derive(Debug)]
pub struct UnlockGesture {
    trigger: NodeId,
    state: ClickState,
    unlocked: bool,
    window: Duration,
    feedback: Duration,
    feedback_task: Option<TaskHandle>,
}

impl UnlockGesture {
    /// Create a detector; the unlocked state is restored from `store`.
    pub fn new(trigger: NodeId, store: &dyn SessionStore, config: &MoodConfig) -> Self {
        Self {
            trigger,
            state: ClickState::Idle,
            unlocked: unlock_flag::is_unlocked(store),
            window: config.gesture_window(),
            feedback: config.unlock_feedback(),
            feedback_task: None,
        }
    }

    pub fn trigger(&self) -> NodeId {
        self.trigger
    }

    pub fn is_unlocked(&self) -> bool {
        self.unlocked
    }

    /// Clicks counted in the current window.
    pub fn click_count(&self) -> u8 {
        match self.state {
            ClickState::Idle => 0,
            ClickState::Counting { count, .. } => count,
        }
    }

    /// Give the trigger a pointer cursor and a hover hint.
    pub fn attach<S: Surface>(&self, surface: &mut S) -> MoodResult<()> {
        surface.set_style(self.trigger, "cursor", "pointer")?;
        surface.set_attribute(self.trigger, "title", TRIGGER_HINT)
    }

    pub fn register_click<S: Surface>(
        &mut self,
        surface: &mut S,
        timers: &mut TimerQueue<Deferred>,
        store: &dyn SessionStore,
    ) -> GestureOutcome {
        let count = match self.state {
            ClickState::Idle => 1,
            ClickState::Counting { count, timeout } => {
                timers.cancel(timeout);
                count + 1
            }
        };

        if count >= CLICKS_TO_UNLOCK {
            self.state = ClickState::Idle;
            return self.unlock(surface, timers, store);
        }

        let timeout = timers.schedule(self.window, Deferred::ResetClicks);
        self.state = ClickState::Counting { count, timeout };
        debug!(count, "Unlock gesture click");
        GestureOutcome::Counting(count)
    }

    /// Window elapsed (or gesture finished): back to idle.
    pub fn reset_clicks(&mut self, timers: &mut TimerQueue<Deferred>) {
        if let ClickState::Counting { count, timeout } = self.state {
            timers.cancel(timeout);
            debug!(count, "Unlock gesture window elapsed");
        }
        self.state = ClickState::Idle;
    }

    fn unlock<S: Surface>(
        &mut self,
        surface: &mut S,
        timers: &mut TimerQueue<Deferred>,
        store: &dyn SessionStore,
    ) -> GestureOutcome {
        if self.unlocked || unlock_flag::is_unlocked(store) {
            self.unlocked = true;
            debug!("Unlock gesture repeated, already unlocked");
            return GestureOutcome::AlreadyUnlocked;
        }

        self.unlocked = true;
        unlock_flag::persist(store);
        if let Err(e) = self.show_feedback(surface, timers) {
            warn!(error = %e, "Could not show unlock feedback");
        }
        info!("Easter egg unlocked");
        GestureOutcome::Unlocked
    }

    fn show_feedback<S: Surface>(
        &mut self,
        surface: &mut S,
        timers: &mut TimerQueue<Deferred>,
    ) -> MoodResult<()> {
        surface.add_class(self.trigger, FEEDBACK_CLASS)?;
        if let Some(previous) = self.feedback_task.take() {
            timers.cancel(previous);
        }
        self.feedback_task = Some(timers.schedule(self.feedback, Deferred::ClearUnlockFeedback));
        Ok(())
    }

    pub fn clear_feedback<S: Surface>(&mut self, surface: &mut S) -> MoodResult<()> {
        self.feedback_task = None;
        surface.remove_class(self.trigger, FEEDBACK_CLASS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use crate::surface::DomTree;

    struct Rig {
        tree: DomTree,
        timers: TimerQueue<Deferred>,
        store: MemoryStore,
        gesture: UnlockGesture,
    }

    impl Rig {
        fn new(store: MemoryStore) -> Self {
            let mut tree = DomTree::new();
            let logo = tree.create_element("h1");
            tree.append_child(tree.root(), logo).unwrap();
            let gesture = UnlockGesture::new(logo, &store, &MoodConfig::default());
            Self {
                tree,
                timers: TimerQueue::new(),
                store,
                gesture,
            }
        }

        fn click(&mut self) -> GestureOutcome {
            self.gesture
                .register_click(&mut self.tree, &mut self.timers, &self.store)
        }

        fn wait(&mut self, ms: u64) {
            for action in self.timers.advance(Duration::from_millis(ms)) {
                match action {
                    Deferred::ResetClicks => self.gesture.reset_clicks(&mut self.timers),
                    Deferred::ClearUnlockFeedback => {
                        self.gesture.clear_feedback(&mut self.tree).unwrap()
                    }
                    other => panic!("unexpected action {other:?}"),
                }
            }
        }
    }

    #[test]
    fn triple_click_unlocks_once() {
        let mut rig = Rig::new(MemoryStore::new());
        assert_eq!(rig.click(), GestureOutcome::Counting(1));
        rig.wait(1500);
        assert_eq!(rig.click(), GestureOutcome::Counting(2));
        rig.wait(1500);
        assert_eq!(rig.click(), GestureOutcome::Unlocked);

        assert!(rig.gesture.is_unlocked());
        assert!(unlock_flag::is_unlocked(&rig.store));
        assert_eq!(rig.gesture.click_count(), 0);
        assert!(rig.tree.has_class(rig.gesture.trigger(), FEEDBACK_CLASS));
    }

    #[test]
    fn window_elapsing_resets_count() {
        let mut rig = Rig::new(MemoryStore::new());
        rig.click();
        rig.click();
        rig.wait(2001);
        assert_eq!(rig.gesture.click_count(), 0);
        assert_eq!(rig.click(), GestureOutcome::Counting(1));
        assert!(!rig.gesture.is_unlocked());
    }

    #[test]
    fn second_gesture_is_absorbed() {
        let mut rig = Rig::new(MemoryStore::new());
        let outcomes: Vec<_> = (0..6).map(|_| rig.click()).collect();
        let unlocks = outcomes
            .iter()
            .filter(|o| **o == GestureOutcome::Unlocked)
            .count();
        assert_eq!(unlocks, 1);
        assert_eq!(outcomes[5], GestureOutcome::AlreadyUnlocked);
    }

    #[test]
    fn feedback_clears_itself() {
        let mut rig = Rig::new(MemoryStore::new());
        (0..3).for_each(|_| {
            rig.click();
        });
        rig.wait(999);
        assert!(rig.tree.has_class(rig.gesture.trigger(), FEEDBACK_CLASS));
        rig.wait(1);
        assert!(!rig.tree.has_class(rig.gesture.trigger(), FEEDBACK_CLASS));
        assert_eq!(rig.timers.pending(), 0);
    }

    #[test]
    fn failed_storage_still_unlocks_in_memory() {
        let mut rig = Rig::new(MemoryStore::unavailable());
        (0..2).for_each(|_| {
            rig.click();
        });
        assert_eq!(rig.click(), GestureOutcome::Unlocked);
        assert!(rig.gesture.is_unlocked());
        assert!(!unlock_flag::is_unlocked(&rig.store));

        (0..2).for_each(|_| {
            rig.click();
        });
        assert_eq!(rig.click(), GestureOutcome::AlreadyUnlocked);
    }

    #[test]
    fn restores_unlock_from_session() {
        let store = MemoryStore::new();
        unlock_flag::force_unlock(&store);
        let mut rig = Rig::new(store);
        assert!(rig.gesture.is_unlocked());
        (0..2).for_each(|_| {
            rig.click();
        });
        assert_eq!(rig.click(), GestureOutcome::AlreadyUnlocked);
    }

    #[test]
    fn attach_sets_hint() {
        let mut rig = Rig::new(MemoryStore::new());
        rig.gesture.attach(&mut rig.tree).unwrap();
        assert_eq!(
            rig.tree.attribute(rig.gesture.trigger(), "title").as_deref(),
            Some(TRIGGER_HINT)
        );
    }
}
