//! Node View Component
//!
//! Paints the core [`DomTree`] from a nested snapshot. Only [`TreeView`]
//! subscribes to the coordinator; each [`NodeView`] gets its subtree as a
//! prop, so unchanged subtrees are skipped on re-render.

use dioxus::prelude::*;
use moodreads_core::app::LOGO_ID;
use moodreads_core::panels::MOOD_ID_ATTR;
use moodreads_core::{DomTree, MoodReads, NodeId, Surface};

/// Everything the webview needs to paint one element and its subtree.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeSnapshot {
    pub node: NodeId,
    pub tag: String,
    pub class: Option<String>,
    pub style: Option<String>,
    pub id: Option<String>,
    pub role: Option<String>,
    pub aria_label: Option<String>,
    pub aria_pressed: Option<String>,
    pub aria_hidden: Option<String>,
    pub tabindex: Option<String>,
    pub title: Option<String>,
    pub text: Option<String>,
    pub children: Vec<NodeSnapshot>,
    /// Clicks here go to the coordinator (mood buttons and the logo)
    pub clickable: bool,
}

impl NodeSnapshot {
    /// Copy the paintable state of `node` and its descendants, or `None` if it is gone.
    pub fn of(tree: &DomTree, node: NodeId) -> Option<Self> {
        let el = tree.node(node)?;
        let attr = |name: &str| el.attribute(name).map(str::to_string);
        let id = attr("id");
        let clickable = el.attribute(MOOD_ID_ATTR).is_some() || id.as_deref() == Some(LOGO_ID);

        Some(Self {
            node,
            tag: el.tag().to_string(),
            class: el.class_list(),
            style: el.style_text(),
            role: attr("role"),
            aria_label: attr("aria-label"),
            aria_pressed: attr("aria-pressed"),
            aria_hidden: attr("aria-hidden"),
            tabindex: attr("tabindex"),
            title: attr("title"),
            text: el.text().map(str::to_string),
            children: el
                .children()
                .iter()
                .filter_map(|child| Self::of(tree, *child))
                .collect(),
            clickable,
            id,
        })
    }

    /// The snapshot of `node` within this subtree.
    pub fn find(&self, node: NodeId) -> Option<&NodeSnapshot> {
        if self.node == node {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(node))
    }
}

macro_rules! element {
    ($tag:ident, $view:ident, $app:ident, $onclick:ident) => {
        rsx! {
            $tag {
                class: $view.class,
                style: $view.style,
                id: $view.id,
                role: $view.role,
                "aria-label": $view.aria_label,
                "aria-pressed": $view.aria_pressed,
                "aria-hidden": $view.aria_hidden,
                tabindex: $view.tabindex,
                title: $view.title,
                onclick: $onclick,
                {$view.text}
                for child in $view.children {
                    NodeView { key: "{child.node}", app: $app, view: child }
                }
            }
        }
    };
}

/// Paints the whole tree of the mounted coordinator.
///
/// This is the one component that reads the signal, so a timer tick
/// snapshots the tree once instead of once per node.
///
/// # Example
///
/// ```rust,ignore
/// let app = use_signal(|| mounted_app);
///
/// rsx! {
///     TreeView { app }
/// }
/// ```
#[component]
pub fn TreeView(app: Signal<MoodReads<DomTree>>) -> Element {
    let snapshot = {
        let guard = app.read();
        let tree = guard.surface();
        NodeSnapshot::of(tree, tree.root())
    };
    let Some(view) = snapshot else {
        return rsx! {};
    };

    rsx! {
        NodeView { app, view }
    }
}

/// Paints one snapshot and its children.
#[component]
pub fn NodeView(app: Signal<MoodReads<DomTree>>, view: NodeSnapshot) -> Element {
    let node = view.node;
    let clickable = view.clickable;
    let mut target = app;
    let onclick = move |evt: MouseEvent| {
        if clickable {
            evt.stop_propagation();
            let routed = target.write().handle_click(node);
            tracing::debug!(?routed, %node, "Click routed");
        }
    };

    match view.tag.as_str() {
        "header" => element!(header, view, app, onclick),
        "h1" => element!(h1, view, app, onclick),
        "h3" => element!(h3, view, app, onclick),
        "p" => element!(p, view, app, onclick),
        "button" => element!(button, view, app, onclick),
        "span" => element!(span, view, app, onclick),
        "article" => element!(article, view, app, onclick),
        _ => element!(div, view, app, onclick),
    }
}
