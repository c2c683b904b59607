use tracing::debug;

use crate::catalog::themes::{self, ApplyResult};
use crate::error::MoodResult;
use crate::motion::MotionWatch;
use crate::surface::{NodeId, Surface};

/// Writes theme variables onto one target node (normally the page root).
#[derive(Debug, Clone)]
pub struct ThemeApplier {
    target: NodeId,
    motion: MotionWatch,
}

impl ThemeApplier {
    pub fn new(target: NodeId, motion: MotionWatch) -> Self {
        Self { target, motion }
    }

    /// Resolve the theme for `mood_id` and push it to the surface.
    ///
    /// Unknown ids apply the neutral theme.
    pub fn apply<S: Surface>(&self, surface: &mut S, mood_id: &str) -> MoodResult<ApplyResult> {
        let plan = themes::plan(mood_id, self.motion.reduced());
        for (name, value) in plan.style_vars() {
            surface.set_style(self.target, name, &value)?;
        }
        debug!(
            requested = mood_id,
            theme = plan.mood_id,
            transition_ms = plan.transition.as_millis() as u64,
            "Theme applied"
        );
        Ok(plan)
    }
}
