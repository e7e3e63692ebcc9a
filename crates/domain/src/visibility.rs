//! Model-conditional visibility of the tuner controls.
//!
//! The IC-998 has no tuning/SWR feedback lines and no AUTO/SEMI mode, so the
//! controls bound to them are hidden while that model is selected. The policy
//! yields an absolute flag for every group; nothing is toggled relative to
//! the previous pass.

use crate::catalog::NodeKey;
use crate::derive::civ::CivModel;

/// A set of nodes shown or hidden together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisibilityGroup {
    TuningIndicator,
    SwrIndicator,
    /// The labels wrapping the tuning and SWR dots.
    IndicatorLabels,
    AutoToggle,
    AntennaChainLink,
    SwrBeeperShortcut,
}

impl VisibilityGroup {
    pub const ALL: [VisibilityGroup; 6] = [
        Self::TuningIndicator,
        Self::SwrIndicator,
        Self::IndicatorLabels,
        Self::AutoToggle,
        Self::AntennaChainLink,
        Self::SwrBeeperShortcut,
    ];

    /// Nodes belonging to the group.
    #[must_use]
    pub fn nodes(self) -> &'static [NodeKey] {
        match self {
            Self::TuningIndicator => &[NodeKey::TuningDot],
            Self::SwrIndicator => &[NodeKey::SwrDot],
            Self::IndicatorLabels => &[NodeKey::TuningLabel, NodeKey::SwrLabel],
            Self::AutoToggle => &[NodeKey::AutoButton],
            Self::AntennaChainLink => &[NodeKey::LinkButton],
            Self::SwrBeeperShortcut => &[NodeKey::SwrBeeperShortcut],
        }
    }
}

/// Visibility state selected by the configured model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisibilityPolicy {
    /// Every optional group shown.
    Full,
    /// IC-998 layout: tuner feedback and mode controls hidden.
    Reduced,
}

impl VisibilityPolicy {
    #[must_use]
    pub fn for_model(model: &CivModel) -> Self {
        match model {
            CivModel::Ic998 => Self::Reduced,
            CivModel::Ic991To994 | CivModel::Other(_) => Self::Full,
        }
    }

    #[must_use]
    pub fn is_visible(self, _group: VisibilityGroup) -> bool {
        matches!(self, Self::Full)
    }

    /// Absolute visibility of every node the policy controls.
    pub fn node_flags(self) -> impl Iterator<Item = (NodeKey, bool)> {
        VisibilityGroup::ALL.into_iter().flat_map(move |group| {
            let visible = self.is_visible(group);
            group.nodes().iter().map(move |key| (*key, visible))
        })
    }
}
