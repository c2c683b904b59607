use tracing::{debug, info};

use crate::catalog::moods::{all_moods, standard_moods};
use crate::error::MoodResult;
use crate::surface::{NodeId, Surface};
use crate::types::Mood;

pub const BUTTON_CLASS: &str = "mood-button";
pub const ACTIVE_CLASS: &str = "mood-button--active";
pub const MOOD_ID_ATTR: &str = "data-mood-id";

/// Row of mood buttons with a single pressed entry.
#[derive(Debug, Clone)]
pub struct MoodSelector {
    container: NodeId,
    active: Option<String>,
    easter_egg_unlocked: bool,
}

impl MoodSelector {
    /// `easter_egg_unlocked` is normally restored from session storage.
    pub fn new(container: NodeId, easter_egg_unlocked: bool) -> Self {
        Self {
            container,
            active: None,
            easter_egg_unlocked,
        }
    }

    pub fn container(&self) -> NodeId {
        self.container
    }

    pub fn active_mood(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn is_unlocked(&self) -> bool {
        self.easter_egg_unlocked
    }

    /// Moods that get a button right now.
    pub fn visible_moods(&self) -> Vec<&'static Mood> {
        if self.easter_egg_unlocked {
            all_moods().iter().collect()
        } else {
            standard_moods().collect()
        }
    }

    /// Rebuild every button from scratch.
    pub fn render<S: Surface>(&self, surface: &mut S) -> MoodResult<()> {
        surface.clear_children(self.container)?;
        for mood in self.visible_moods() {
            let button = self.create_button(surface, mood)?;
            surface.append_child(self.container, button)?;
        }
        Ok(())
    }

    fn create_button<S: Surface>(&self, surface: &mut S, mood: &Mood) -> MoodResult<NodeId> {
        let is_active = self.active.as_deref() == Some(mood.id);

        let button = surface.create_element("button");
        surface.add_class(button, BUTTON_CLASS)?;
        if is_active {
            surface.add_class(button, ACTIVE_CLASS)?;
        }
        surface.set_attribute(button, MOOD_ID_ATTR, mood.id)?;
        surface.set_attribute(button, "role", "button")?;
        surface.set_attribute(button, "aria-label", &format!("Select {} mood", mood.label))?;
        surface.set_attribute(button, "aria-pressed", if is_active { "true" } else { "false" })?;

        let icon = surface.create_element("span");
        surface.add_class(icon, "mood-button__icon")?;
        surface.set_attribute(icon, "aria-hidden", "true")?;
        surface.set_text(icon, mood.icon)?;

        let label = surface.create_element("span");
        surface.add_class(label, "mood-button__label")?;
        surface.set_text(label, mood.label)?;

        surface.append_child(button, icon)?;
        surface.append_child(button, label)?;
        Ok(button)
    }

    /// Mark `mood_id` pressed and every other button released.
    ///
    /// Idempotent: applying the same id again leaves the same state.
    pub fn set_active<S: Surface>(&mut self, surface: &mut S, mood_id: &str) -> MoodResult<()> {
        self.active = Some(mood_id.to_string());
        for button in surface.query_class(self.container, BUTTON_CLASS) {
            let matches = surface.attribute(button, MOOD_ID_ATTR).as_deref() == Some(mood_id);
            if matches {
                surface.add_class(button, ACTIVE_CLASS)?;
                surface.set_attribute(button, "aria-pressed", "true")?;
            } else {
                surface.remove_class(button, ACTIVE_CLASS)?;
                surface.set_attribute(button, "aria-pressed", "false")?;
            }
        }
        Ok(())
    }

    /// Reveal the easter-egg mood. Returns false if it was already visible.
    ///
    /// Only re-renders; the unlock gesture owns persisting the flag.
    pub fn unlock_easter_egg<S: Surface>(&mut self, surface: &mut S) -> MoodResult<bool> {
        if self.easter_egg_unlocked {
            debug!("Easter egg already visible in selector");
            return Ok(false);
        }
        self.easter_egg_unlocked = true;
        self.render(surface)?;
        info!("Easter egg mood added to selector");
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::DomTree;

    fn setup(unlocked: bool) -> (DomTree, MoodSelector) {
        let mut tree = DomTree::new();
        let node = tree.create_element("div");
        tree.append_child(tree.root(), node).unwrap();
        let selector = MoodSelector::new(node, unlocked);
        selector.render(&mut tree).unwrap();
        (tree, selector)
    }

    fn pressed(tree: &DomTree, selector: &MoodSelector) -> Vec<String> {
        tree.query_class(selector.container(), ACTIVE_CLASS)
            .into_iter()
            .filter_map(|b| tree.attribute(b, MOOD_ID_ATTR))
            .collect()
    }

    #[test]
    fn renders_standard_moods_only() {
        let (tree, selector) = setup(false);
        let buttons = tree.query_class(selector.container(), BUTTON_CLASS);
        assert_eq!(buttons.len(), 4);
        assert_eq!(
            tree.attribute(buttons[2], "aria-label").as_deref(),
            Some("Select Heartbreaking mood")
        );
        assert_eq!(tree.attribute(buttons[0], "aria-pressed").as_deref(), Some("false"));
    }

    #[test]
    fn exactly_one_active_button() {
        let (mut tree, mut selector) = setup(false);
        selector.set_active(&mut tree, "cozy").unwrap();
        selector.set_active(&mut tree, "dark").unwrap();
        selector.set_active(&mut tree, "dark").unwrap();
        assert_eq!(pressed(&tree, &selector), vec!["dark"]);
        assert_eq!(selector.active_mood(), Some("dark"));

        let pressed_attrs = tree
            .query_class(selector.container(), BUTTON_CLASS)
            .into_iter()
            .filter(|b| tree.attribute(*b, "aria-pressed").as_deref() == Some("true"))
            .count();
        assert_eq!(pressed_attrs, 1);
    }

    #[test]
    fn unlock_rerenders_with_easter_egg_and_keeps_active() {
        let (mut tree, mut selector) = setup(false);
        selector.set_active(&mut tree, "motivational").unwrap();

        assert!(selector.unlock_easter_egg(&mut tree).unwrap());
        assert!(!selector.unlock_easter_egg(&mut tree).unwrap());
        assert!(selector.is_unlocked());

        let buttons = tree.query_class(selector.container(), BUTTON_CLASS);
        assert_eq!(buttons.len(), 5);
        assert_eq!(tree.attribute(buttons[4], MOOD_ID_ATTR).as_deref(), Some("chaotic"));
        assert_eq!(pressed(&tree, &selector), vec!["motivational"]);
    }

    #[test]
    fn restored_unlock_renders_all_moods() {
        let (tree, selector) = setup(true);
        assert_eq!(tree.query_class(selector.container(), BUTTON_CLASS).len(), 5);
    }
}
