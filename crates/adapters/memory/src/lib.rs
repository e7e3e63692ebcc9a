//! # tunerdash-adapter-memory
//!
//! In-memory page that implements the [`ViewTarget`] port.
//!
//! Every node is a shared handle onto a [`NodeState`] record, so writes made
//! through the synchronizer are visible to whoever holds the page. The page
//! can be built with any subset of the catalog to model page variants that
//! lack some regions.
//!
//! ## Dependency rule
//!
//! Depends on `tunerdash-app` (port traits) and `tunerdash-domain` only.

mod node;

use std::collections::BTreeMap;

use tunerdash_app::ports::ViewTarget;
use tunerdash_domain::catalog::NodeKey;

pub use node::{MemoryNode, NodeState};

/// A page held in memory.
#[derive(Debug, Default)]
pub struct InMemoryPage {
    nodes: BTreeMap<NodeKey, Vec<MemoryNode>>,
}

impl InMemoryPage {
    /// A page with no nodes at all.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// A page carrying one node for every key in the catalog.
    #[must_use]
    pub fn full() -> Self {
        NodeKey::ALL
            .iter()
            .fold(Self::empty(), |page, key| page.with_node(*key))
    }

    /// Add one more node under `key`.
    ///
    /// Only the first node of a key is returned by `resolve`; additional nodes
    /// are reached through `resolve_all` (status indicators).
    #[must_use]
    pub fn with_node(mut self, key: NodeKey) -> Self {
        self.nodes.entry(key).or_default().push(MemoryNode::default());
        self
    }

    /// Remove every node under `key`.
    #[must_use]
    pub fn without(mut self, key: NodeKey) -> Self {
        self.nodes.remove(&key);
        self
    }

    /// Preset the value of the input node under `key`, if present.
    #[must_use]
    pub fn with_value(self, key: NodeKey, value: &str) -> Self {
        if let Some(node) = self.nodes.get(&key).and_then(|nodes| nodes.first()) {
            node.state_mut().value = Some(value.to_string());
        }
        self
    }

    /// Whether the page carries a node for `key`.
    #[must_use]
    pub fn contains(&self, key: NodeKey) -> bool {
        self.nodes.contains_key(&key)
    }

    /// State of the first node under `key`.
    #[must_use]
    pub fn state(&self, key: NodeKey) -> Option<NodeState> {
        self.nodes
            .get(&key)
            .and_then(|nodes| nodes.first())
            .map(MemoryNode::state)
    }

    /// Text content of the first node under `key`.
    #[must_use]
    pub fn text(&self, key: NodeKey) -> Option<String> {
        self.state(key).and_then(|state| state.text)
    }

    /// States of every node, keyed by node key.
    #[must_use]
    pub fn dump(&self) -> BTreeMap<NodeKey, Vec<NodeState>> {
        self.nodes
            .iter()
            .map(|(key, nodes)| (*key, nodes.iter().map(MemoryNode::state).collect()))
            .collect()
    }
}

impl ViewTarget for InMemoryPage {
    type Node = MemoryNode;

    fn resolve(&self, key: NodeKey) -> Option<MemoryNode> {
        self.nodes.get(&key).and_then(|nodes| nodes.first()).cloned()
    }

    fn resolve_all(&self, key: NodeKey) -> Vec<MemoryNode> {
        self.nodes.get(&key).cloned().unwrap_or_default()
    }
}
