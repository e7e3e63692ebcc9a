//! View synchronizer — applies telemetry snapshots to the dashboard nodes.
//!
//! Each pass is a full overwrite: every tracked node the page carries is
//! rewritten from the snapshot alone, so the displayed page always matches the
//! last applied snapshot and applying it twice changes nothing. Nodes the page
//! does not carry are skipped.

use tracing::{debug, trace};

use tunerdash_domain::catalog::NodeKey;
use tunerdash_domain::derive::civ::CivModel;
use tunerdash_domain::derive::latch::{ACTIVE_CLASS, LatchState};
use tunerdash_domain::derive::status::{ConnectionStatus, IndicatorDot, RemoteLink};
use tunerdash_domain::scalar::display_or;
use tunerdash_domain::snapshot::{FrameKind, TelemetrySnapshot};
use tunerdash_domain::time::clock_label;
use tunerdash_domain::view::{DerivedView, LatchView};
use tunerdash_domain::visibility::VisibilityPolicy;

use crate::clock::SystemClock;
use crate::ports::{Clock, ViewTarget, VisualNode};

/// Text written to the footer, followed by the pass's completion time.
pub const FOOTER_PREFIX: &str = "Dashboard updates in real-time via WebSocket. Last updated: ";

/// Drives a [`ViewTarget`] from telemetry snapshots.
pub struct ViewSynchronizer<T, C = SystemClock> {
    target: T,
    clock: C,
}

impl<T: ViewTarget> ViewSynchronizer<T> {
    /// Create a synchronizer stamping the footer with the system clock.
    pub fn new(target: T) -> Self {
        Self::with_clock(target, SystemClock)
    }
}

impl<T: ViewTarget, C: Clock> ViewSynchronizer<T, C> {
    /// Create a synchronizer with an explicit clock.
    pub fn with_clock(target: T, clock: C) -> Self {
        Self { target, clock }
    }

    /// The page being driven.
    pub fn target(&self) -> &T {
        &self.target
    }

    /// Give back the page.
    pub fn into_target(self) -> T {
        self.target
    }

    /// Route a frame by its type and apply it.
    ///
    /// Full dashboard updates go through [`sync`](Self::sync), state updates
    /// through [`sync_latches`](Self::sync_latches); other frame types are
    /// ignored. Returns the frame kind that was detected.
    pub fn apply(&self, snapshot: &TelemetrySnapshot) -> FrameKind {
        let kind = snapshot.frame_kind();
        match &kind {
            FrameKind::DashboardUpdate => self.sync(snapshot),
            FrameKind::StateUpdate => self.sync_latches(snapshot),
            FrameKind::Unrecognized(kind) => debug!(%kind, "ignoring unrendered frame type"),
        }
        kind
    }

    /// Apply one snapshot to every tracked node.
    pub fn sync(&self, snapshot: &TelemetrySnapshot) {
        let displayed_number = self
            .with_node(NodeKey::DeviceNumber, |node| node.value())
            .flatten();
        let view = DerivedView::compute(snapshot, displayed_number.as_deref());

        self.write_latches(&view.latches);
        self.write_indicator(NodeKey::TuningDot, IndicatorDot::Tuning, view.tuning_active);
        self.write_indicator(NodeKey::SwrDot, IndicatorDot::Swr, view.swr_ok);

        for (key, text) in &view.metrics {
            self.with_node(*key, |node| node.set_text(text));
        }

        let number = view.device_number.to_string();
        self.with_node(NodeKey::DeviceNumber, |node| node.set_value(&number));

        // Without a model in the payload the last applied visibility stands.
        if let Some(model) = &view.model {
            self.apply_model(model);
        }

        self.write_remote_link(view.remote_link);
        self.write_system_status(view.status);
        self.write_footer();

        debug!(
            model = ?view.model,
            status = ?view.status,
            civ_address = %view.civ_address,
            "dashboard synchronized"
        );
    }

    /// Refresh only the two latch controls and their state texts.
    pub fn sync_latches(&self, snapshot: &TelemetrySnapshot) {
        self.write_latches(&LatchView::compute(snapshot));
        let ant_state = display_or(snapshot.ant_state.as_ref(), "Unknown");
        let auto_state = display_or(snapshot.auto_state.as_ref(), "Unknown");
        self.with_node(NodeKey::AntState, |node| node.set_text(&ant_state));
        self.with_node(NodeKey::AutoState, |node| node.set_text(&auto_state));
        debug!("latch controls synchronized");
    }

    /// Check the model radio buttons and apply the model's visibility policy.
    ///
    /// Every controlled node gets an absolute visibility flag.
    pub fn apply_model(&self, model: &CivModel) {
        self.with_node(NodeKey::CivModel991, |node| {
            node.set_checked(*model == CivModel::Ic991To994);
        });
        self.with_node(NodeKey::CivModel998, |node| {
            node.set_checked(*model == CivModel::Ic998);
        });
        for (key, visible) in VisibilityPolicy::for_model(model).node_flags() {
            self.with_node(key, |node| node.set_visible(visible));
        }
    }

    fn write_latches(&self, latches: &LatchView) {
        self.write_latch(NodeKey::AntButton, latches.antenna);
        self.write_latch(NodeKey::AutoButton, latches.auto_mode);
    }

    fn write_latch(&self, key: NodeKey, state: LatchState) {
        self.with_node(key, |node| {
            node.toggle_class(ACTIVE_CLASS, state.active);
            node.set_text(state.label);
        });
    }

    fn write_indicator(&self, key: NodeKey, dot: IndicatorDot, active: bool) {
        self.with_node(key, |node| node.set_class(dot.class(active)));
    }

    fn write_remote_link(&self, link: RemoteLink) {
        self.with_node(NodeKey::RemoteWsIndicator, |node| {
            node.set_class(link.status.indicator_class());
        });
        self.with_node(NodeKey::RemoteWsLabel, |node| {
            node.set_text(link.label);
            node.set_color(link.accent.css_color());
        });
    }

    fn write_system_status(&self, status: ConnectionStatus) {
        for node in self.target.resolve_all(NodeKey::StatusIndicator) {
            node.set_class(status.indicator_class());
        }
    }

    fn write_footer(&self) {
        let note = format!("{FOOTER_PREFIX}{}", clock_label(&self.clock.now()));
        self.with_node(NodeKey::Footer, |node| node.set_text(&note));
    }

    fn with_node<R>(&self, key: NodeKey, write: impl FnOnce(&T::Node) -> R) -> Option<R> {
        if let Some(node) = self.target.resolve(key) {
            Some(write(&node))
        } else {
            trace!(%key, "node not on page, skipped");
            None
        }
    }
}
