//! Cancelable scheduled actions on a virtual clock.
//!
//! Nothing here sleeps. The owner advances the clock (the desktop shell from
//! a tokio interval, tests by hand) and dispatches whatever became due.

use std::collections::BTreeMap;
use std::time::Duration;

use crate::surface::NodeId;

/// Handle to one scheduled action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskHandle(u64);

/// Actions the coordinator schedules for later.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Deferred {
    /// Gesture window elapsed without completing a triple click
    ResetClicks,
    /// Remove the one-shot unlock highlight from the logo
    ClearUnlockFeedback,
    /// Next-frame hook that starts a card's reveal
    AnimateCard { card: NodeId, index: usize },
    /// Stagger delay elapsed, show the card
    RevealCard(NodeId),
    /// Drop the will-change hint once the reveal has finished
    ReleaseWillChange(NodeId),
}

#[derive(Debug)]
struct Scheduled<A> {
    due: Duration,
    action: A,
}

/// Queue of actions keyed by handle, ordered by deadline then insertion.
#[derive(Debug)]
pub struct TimerQueue<A> {
    now: Duration,
    next_handle: u64,
    tasks: BTreeMap<TaskHandle, Scheduled<A>>,
}

impl<A> Default for TimerQueue<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> TimerQueue<A> {
    pub fn new() -> Self {
        Self {
            now: Duration::ZERO,
            next_handle: 0,
            tasks: BTreeMap::new(),
        }
    }

    /// Time elapsed on the virtual clock.
    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn schedule(&mut self, delay: Duration, action: A) -> TaskHandle {
        let handle = TaskHandle(self.next_handle);
        self.next_handle += 1;
        self.tasks.insert(
            handle,
            Scheduled {
                due: self.now + delay,
                action,
            },
        );
        handle
    }

    /// Cancel a task. Returns false if it already ran or was cancelled.
    pub fn cancel(&mut self, handle: TaskHandle) -> bool {
        self.tasks.remove(&handle).is_some()
    }

    pub fn is_pending(&self, handle: TaskHandle) -> bool {
        self.tasks.contains_key(&handle)
    }

    pub fn pending(&self) -> usize {
        self.tasks.len()
    }

    /// Time until the earliest task is due, if any.
    pub fn next_due(&self) -> Option<Duration> {
        self.tasks
            .values()
            .map(|task| task.due.saturating_sub(self.now))
            .min()
    }

    /// Move the clock forward by `elapsed` and take every task that came due.
    ///
    /// Tasks are returned in deadline order; ties keep scheduling order.
    pub fn advance(&mut self, elapsed: Duration) -> Vec<A> {
        self.now += elapsed;
        let mut due: Vec<(Duration, TaskHandle)> = self
            .tasks
            .iter()
            .filter(|(_, task)| task.due <= self.now)
            .map(|(handle, task)| (task.due, *handle))
            .collect();
        due.sort();
        due.into_iter()
            .filter_map(|(_, handle)| self.tasks.remove(&handle))
            .map(|task| task.action)
            .collect()
    }
}

/// Handles owned by one component, cancelled together.
#[derive(Debug, Default)]
pub struct TaskBatch {
    handles: Vec<TaskHandle>,
}

impl TaskBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn track(&mut self, handle: TaskHandle) {
        self.handles.push(handle);
    }

    /// Cancel every tracked task that is still pending and forget them all.
    pub fn cancel_all<A>(&mut self, queue: &mut TimerQueue<A>) -> usize {
        self.handles
            .drain(..)
            .filter(|handle| queue.cancel(*handle))
            .count()
    }

    /// Tracked tasks that have not run yet.
    pub fn pending<A>(&self, queue: &TimerQueue<A>) -> usize {
        self.handles.iter().filter(|h| queue.is_pending(**h)).count()
    }

    pub fn handles(&self) -> &[TaskHandle] {
        &self.handles
    }
}
