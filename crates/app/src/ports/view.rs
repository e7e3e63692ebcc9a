//! View port — keyed access to the dashboard's visual nodes.

use tunerdash_domain::catalog::NodeKey;

/// A single node on the page.
///
/// Nodes are handles: writes go through a shared reference, the way a DOM
/// element handle behaves. Every write is an absolute set, so applying the
/// same value twice leaves the node unchanged.
pub trait VisualNode {
    /// Replace the node's text content.
    fn set_text(&self, text: &str);

    /// Replace the node's whole class list.
    fn set_class(&self, class: &str);

    /// Add (`on`) or remove a single class.
    fn toggle_class(&self, class: &str, on: bool);

    /// Show or hide the node.
    fn set_visible(&self, visible: bool);

    /// Set the node's foreground color.
    fn set_color(&self, color: &str);

    /// Current value of an input node; `None` for other nodes.
    fn value(&self) -> Option<String>;

    /// Set the value of an input node. No-op for other nodes.
    fn set_value(&self, value: &str);

    /// Set the checked state of a checkbox or radio node. No-op for other nodes.
    fn set_checked(&self, checked: bool);
}

/// The page, seen as a catalog of resolvable nodes.
///
/// Resolution never fails: a key the page does not carry resolves to `None`
/// and the caller skips it.
pub trait ViewTarget {
    /// Handle type of a resolved node.
    type Node: VisualNode;

    /// Resolve the node for `key`, if the page has one.
    fn resolve(&self, key: NodeKey) -> Option<Self::Node>;

    /// Resolve every node tagged with `key`.
    ///
    /// Only group keys such as [`NodeKey::StatusIndicator`] map to more than
    /// one node; the default returns the single resolved node, if any.
    fn resolve_all(&self, key: NodeKey) -> Vec<Self::Node> {
        self.resolve(key).into_iter().collect()
    }
}

impl<T: ViewTarget> ViewTarget for &T {
    type Node = T::Node;

    fn resolve(&self, key: NodeKey) -> Option<Self::Node> {
        (**self).resolve(key)
    }

    fn resolve_all(&self, key: NodeKey) -> Vec<Self::Node> {
        (**self).resolve_all(key)
    }
}
