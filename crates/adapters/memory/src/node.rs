//! A single in-memory node.

use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;

use serde::Serialize;

use tunerdash_app::ports::VisualNode;

/// Display attributes of a node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeState {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub classes: Vec<String>,
    pub visible: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checked: Option<bool>,
}

impl Default for NodeState {
    fn default() -> Self {
        Self {
            text: None,
            classes: Vec::new(),
            visible: true,
            color: None,
            value: None,
            checked: None,
        }
    }
}

impl NodeState {
    /// Space-separated class list, as a `class` attribute would read.
    #[must_use]
    pub fn class_name(&self) -> String {
        self.classes.join(" ")
    }

    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|existing| existing == class)
    }
}

/// Shared handle onto a [`NodeState`].
#[derive(Debug, Clone, Default)]
pub struct MemoryNode(Rc<RefCell<NodeState>>);

impl MemoryNode {
    /// Copy of the node's current state.
    #[must_use]
    pub fn state(&self) -> NodeState {
        self.borrow().clone()
    }

    pub(crate) fn state_mut(&self) -> RefMut<'_, NodeState> {
        self.0.borrow_mut()
    }

    fn borrow(&self) -> Ref<'_, NodeState> {
        self.0.borrow()
    }
}

impl VisualNode for MemoryNode {
    fn set_text(&self, text: &str) {
        self.state_mut().text = Some(text.to_string());
    }

    fn set_class(&self, class: &str) {
        self.state_mut().classes = class.split_whitespace().map(String::from).collect();
    }

    fn toggle_class(&self, class: &str, on: bool) {
        let mut state = self.state_mut();
        let present = state.has_class(class);
        if on && !present {
            state.classes.push(class.to_string());
        } else if !on && present {
            state.classes.retain(|existing| existing != class);
        }
    }

    fn set_visible(&self, visible: bool) {
        self.state_mut().visible = visible;
    }

    fn set_color(&self, color: &str) {
        self.state_mut().color = Some(color.to_string());
    }

    fn value(&self) -> Option<String> {
        self.borrow().value.clone()
    }

    fn set_value(&self, value: &str) {
        self.state_mut().value = Some(value.to_string());
    }

    fn set_checked(&self, checked: bool) {
        self.state_mut().checked = Some(checked);
    }
}
