//! Presentation collaborators driven by the coordinator.
//!
//! Each panel owns one container node and only touches the page through
//! [`Surface`](crate::surface::Surface).

mod message;
mod results;
mod selector;
mod theme;

pub use message::{MessagePanel, MESSAGE_ANIMATE_CLASS};
pub use results::{
    EmptyReason, RenderOutcome, ResultsPanel, CARD_CLASS, CARD_VISIBLE_CLASS,
    DEFAULT_EMPTY_MESSAGE, EMPTY_CLASS, ERROR_MESSAGE, INCOMPLETE_DATA_MESSAGE,
};
pub use selector::{MoodSelector, ACTIVE_CLASS, BUTTON_CLASS, MOOD_ID_ATTR};
pub use theme::ThemeApplier;
