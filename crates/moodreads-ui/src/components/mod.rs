//! Components rendering the core element tree.

mod node_view;

pub use node_view::*;
