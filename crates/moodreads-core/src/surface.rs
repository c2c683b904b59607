//! Rendering surface abstraction and the retained element tree.
//!
//! The core never paints anything itself. Panels describe the page through
//! the narrow [`Surface`] trait; [`DomTree`] is the in-process
//! implementation that the desktop shell paints and tests inspect.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use crate::error::{MoodError, MoodResult};

/// Handle to an element on a surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.0)
    }
}

/// Operations the core is allowed to perform on the page.
pub trait Surface {
    /// The page root; theme variables are written here.
    fn root(&self) -> NodeId;

    /// Whether `node` is still alive on this surface.
    fn contains(&self, node: NodeId) -> bool;

    /// Create a detached element.
    fn create_element(&mut self, tag: &str) -> NodeId;

    fn append_child(&mut self, parent: NodeId, child: NodeId) -> MoodResult<()>;

    /// Remove and drop every descendant of `node`, and its text.
    fn clear_children(&mut self, node: NodeId) -> MoodResult<()>;

    /// Replace all content of `node` with `text`.
    fn set_text(&mut self, node: NodeId, text: &str) -> MoodResult<()>;

    /// Set a named style property or custom property (`--name`).
    fn set_style(&mut self, node: NodeId, name: &str, value: &str) -> MoodResult<()>;

    fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) -> MoodResult<()>;

    fn attribute(&self, node: NodeId, name: &str) -> Option<String>;

    fn add_class(&mut self, node: NodeId, class: &str) -> MoodResult<()>;

    fn remove_class(&mut self, node: NodeId, class: &str) -> MoodResult<()>;

    fn has_class(&self, node: NodeId, class: &str) -> bool;

    /// Descendants of `node` carrying `class`, in document order.
    fn query_class(&self, node: NodeId, class: &str) -> Vec<NodeId>;

    /// First element whose `id` attribute equals `id`.
    fn find_by_id(&self, id: &str) -> Option<NodeId>;

    fn parent(&self, node: NodeId) -> Option<NodeId>;

    /// Force pending style changes to take effect, so a class removed and
    /// re-added around this call restarts its animation.
    fn flush_layout(&mut self, node: NodeId) -> MoodResult<()>;
}

/// One recorded surface change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation {
    Append { parent: NodeId, child: NodeId },
    Clear(NodeId),
    Text(NodeId, String),
    Style(NodeId, String, String),
    Attribute(NodeId, String, String),
    AddClass(NodeId, String),
    RemoveClass(NodeId, String),
    LayoutFlush(NodeId),
}

/// A single element of the retained tree.
#[derive(Debug, Clone, Default)]
pub struct Element {
    tag: String,
    classes: Vec<String>,
    attributes: BTreeMap<String, String>,
    styles: BTreeMap<String, String>,
    text: Option<String>,
    children: Vec<NodeId>,
    parent: Option<NodeId>,
}

impl Element {
    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Space-separated class list, `None` when there are no classes.
    pub fn class_list(&self) -> Option<String> {
        (!self.classes.is_empty()).then(|| self.classes.join(" "))
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn styles(&self) -> &BTreeMap<String, String> {
        &self.styles
    }

    /// Inline `style` attribute text, `None` when no styles are set.
    pub fn style_text(&self) -> Option<String> {
        if self.styles.is_empty() {
            return None;
        }
        Some(
            self.styles
                .iter()
                .map(|(name, value)| format!("{name}: {value};"))
                .collect::<Vec<_>>()
                .join(" "),
        )
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
}

/// Arena-backed element tree.
///
/// Mutations are journaled only when built with [`DomTree::with_journal`];
/// a long-running tree keeps no history.
#[derive(Debug, Clone)]
pub struct DomTree {
    nodes: HashMap<NodeId, Element>,
    next_id: u32,
    root: NodeId,
    journaling: bool,
    journal: Vec<Mutation>,
}

impl Default for DomTree {
    fn default() -> Self {
        Self::new()
    }
}

impl DomTree {
    /// Create a tree containing only a root `div`.
    pub fn new() -> Self {
        let root = NodeId(0);
        let mut nodes = HashMap::new();
        nodes.insert(
            root,
            Element {
                tag: "div".to_string(),
                ..Element::default()
            },
        );
        Self {
            nodes,
            next_id: 1,
            root,
            journaling: false,
            journal: Vec::new(),
        }
    }

    /// Like [`DomTree::new`], but records every mutation until drained.
    pub fn with_journal() -> Self {
        Self {
            journaling: true,
            ..Self::new()
        }
    }

    pub fn node(&self, id: NodeId) -> Option<&Element> {
        self.nodes.get(&id)
    }

    /// Number of live elements, root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Concatenated text of `node` and its descendants.
    pub fn text_content(&self, node: NodeId) -> String {
        let mut out = String::new();
        self.collect_text(node, &mut out);
        out
    }

    fn collect_text(&self, node: NodeId, out: &mut String) {
        if let Some(el) = self.nodes.get(&node) {
            if let Some(text) = &el.text {
                out.push_str(text);
            }
            for child in &el.children {
                self.collect_text(*child, out);
            }
        }
    }

    pub fn journal(&self) -> &[Mutation] {
        &self.journal
    }

    /// Drain the journal, returning everything recorded so far.
    pub fn take_journal(&mut self) -> Vec<Mutation> {
        std::mem::take(&mut self.journal)
    }

    fn record(&mut self, mutation: Mutation) {
        if self.journaling {
            self.journal.push(mutation);
        }
    }

    fn get_mut(&mut self, id: NodeId) -> MoodResult<&mut Element> {
        self.nodes.get_mut(&id).ok_or(MoodError::UnknownNode(id))
    }

    fn drop_subtree(&mut self, id: NodeId) {
        if let Some(el) = self.nodes.remove(&id) {
            for child in el.children {
                self.drop_subtree(child);
            }
        }
    }

    fn descendants(&self, node: NodeId, out: &mut Vec<NodeId>) {
        if let Some(el) = self.nodes.get(&node) {
            for child in &el.children {
                out.push(*child);
                self.descendants(*child, out);
            }
        }
    }
}

impl Surface for DomTree {
    fn root(&self) -> NodeId {
        self.root
    }

    fn contains(&self, node: NodeId) -> bool {
        self.nodes.contains_key(&node)
    }

    fn create_element(&mut self, tag: &str) -> NodeId {
        let id = NodeId(self.next_id);
        self.next_id += 1;
        self.nodes.insert(
            id,
            Element {
                tag: tag.to_string(),
                ..Element::default()
            },
        );
        id
    }

    fn append_child(&mut self, parent: NodeId, child: NodeId) -> MoodResult<()> {
        if !self.nodes.contains_key(&parent) {
            return Err(MoodError::UnknownNode(parent));
        }
        let old_parent = {
            let el = self.get_mut(child)?;
            el.parent.replace(parent)
        };
        if let Some(old) = old_parent {
            if let Some(el) = self.nodes.get_mut(&old) {
                el.children.retain(|c| *c != child);
            }
        }
        self.get_mut(parent)?.children.push(child);
        self.record(Mutation::Append { parent, child });
        Ok(())
    }

    fn clear_children(&mut self, node: NodeId) -> MoodResult<()> {
        let children = {
            let el = self.get_mut(node)?;
            el.text = None;
            std::mem::take(&mut el.children)
        };
        for child in children {
            self.drop_subtree(child);
        }
        self.record(Mutation::Clear(node));
        Ok(())
    }

    fn set_text(&mut self, node: NodeId, text: &str) -> MoodResult<()> {
        self.clear_children(node)?;
        self.get_mut(node)?.text = (!text.is_empty()).then(|| text.to_string());
        self.record(Mutation::Text(node, text.to_string()));
        Ok(())
    }

    fn set_style(&mut self, node: NodeId, name: &str, value: &str) -> MoodResult<()> {
        self.get_mut(node)?
            .styles
            .insert(name.to_string(), value.to_string());
        self.record(Mutation::Style(node, name.to_string(), value.to_string()));
        Ok(())
    }

    fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) -> MoodResult<()> {
        self.get_mut(node)?
            .attributes
            .insert(name.to_string(), value.to_string());
        self.record(Mutation::Attribute(node, name.to_string(), value.to_string()));
        Ok(())
    }

    fn attribute(&self, node: NodeId, name: &str) -> Option<String> {
        self.nodes
            .get(&node)
            .and_then(|el| el.attributes.get(name).cloned())
    }

    fn add_class(&mut self, node: NodeId, class: &str) -> MoodResult<()> {
        let el = self.get_mut(node)?;
        if !el.classes.iter().any(|c| c == class) {
            el.classes.push(class.to_string());
        }
        self.record(Mutation::AddClass(node, class.to_string()));
        Ok(())
    }

    fn remove_class(&mut self, node: NodeId, class: &str) -> MoodResult<()> {
        self.get_mut(node)?.classes.retain(|c| c != class);
        self.record(Mutation::RemoveClass(node, class.to_string()));
        Ok(())
    }

    fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.nodes
            .get(&node)
            .is_some_and(|el| el.classes.iter().any(|c| c == class))
    }

    fn query_class(&self, node: NodeId, class: &str) -> Vec<NodeId> {
        let mut all = Vec::new();
        self.descendants(node, &mut all);
        all.retain(|id| self.has_class(*id, class));
        all
    }

    fn find_by_id(&self, id: &str) -> Option<NodeId> {
        let mut all = vec![self.root];
        self.descendants(self.root, &mut all);
        all.into_iter()
            .find(|node| self.attribute(*node, "id").as_deref() == Some(id))
    }

    fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes.get(&node).and_then(|el| el.parent)
    }

    fn flush_layout(&mut self, node: NodeId) -> MoodResult<()> {
        if !self.nodes.contains_key(&node) {
            return Err(MoodError::UnknownNode(node));
        }
        self.record(Mutation::LayoutFlush(node));
        Ok(())
    }
}
