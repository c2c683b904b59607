use tracing::debug;

use crate::catalog::messages::message_for;
use crate::error::MoodResult;
use crate::motion::MotionWatch;
use crate::surface::{NodeId, Surface};

pub const MESSAGE_ANIMATE_CLASS: &str = "message-panel--animate";

/// Shows the per-mood message with a one-shot entrance animation.
#[derive(Debug, Clone)]
pub struct MessagePanel {
    container: NodeId,
    motion: MotionWatch,
}

impl MessagePanel {
    pub fn new(container: NodeId, motion: MotionWatch) -> Self {
        Self { container, motion }
    }

    pub fn container(&self) -> NodeId {
        self.container
    }

    /// Render the message for `mood_id`; an unknown id empties the panel.
    ///
    /// The animation class is removed, layout is flushed, then the class is
    /// re-added, so showing the same mood twice replays the animation.
    pub fn show<S: Surface>(&self, surface: &mut S, mood_id: &str) -> MoodResult<()> {
        let message = message_for(mood_id);
        if message.is_empty() {
            debug!(mood_id, "No message for mood, clearing panel");
            return surface.clear_children(self.container);
        }

        surface.remove_class(self.container, MESSAGE_ANIMATE_CLASS)?;
        surface.set_text(self.container, message)?;

        if self.motion.reduced() {
            surface.set_style(self.container, "opacity", "1")?;
            surface.set_style(self.container, "transform", "translateY(0)")?;
        } else {
            surface.flush_layout(self.container)?;
            surface.add_class(self.container, MESSAGE_ANIMATE_CLASS)?;
        }
        Ok(())
    }
}
