//! Derived view — everything one sync pass writes, computed up front.
//!
//! A [`DerivedView`] has no identity and is never stored; it lives for the
//! duration of a single pass.

use crate::catalog::NodeKey;
use crate::derive::civ::{CIV_BAUD_LABEL, CivAddress, CivModel, DeviceNumber};
use crate::derive::endpoint::websocket_endpoint;
use crate::derive::latch::LatchState;
use crate::derive::status::{ConnectionStatus, IndicatorDot, RemoteLink};
use crate::derive::uptime::Uptime;
use crate::scalar::{Scalar, display_or};
use crate::snapshot::TelemetrySnapshot;
use crate::visibility::VisibilityPolicy;

/// Display values derived from one snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedView {
    /// Text of every metric node, in write order.
    pub metrics: Vec<(NodeKey, String)>,
    pub device_number: DeviceNumber,
    pub civ_address: CivAddress,
    /// `None` when the snapshot carries no `civ_model`.
    pub model: Option<CivModel>,
    /// `None` when the snapshot carries no `civ_model`; prior visibility stays.
    pub visibility: Option<VisibilityPolicy>,
    pub status: ConnectionStatus,
    pub remote_link: RemoteLink,
    pub tuning_active: bool,
    pub swr_ok: bool,
    pub latches: LatchView,
}

/// The two latch controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatchView {
    pub antenna: LatchState,
    pub auto_mode: LatchState,
}

impl LatchView {
    #[must_use]
    pub fn compute(snapshot: &TelemetrySnapshot) -> Self {
        Self {
            antenna: LatchState::antenna(snapshot.ant_state.as_ref()),
            auto_mode: LatchState::auto_mode(snapshot.auto_state.as_ref()),
        }
    }
}

impl DerivedView {
    /// Derive the view of `snapshot`.
    ///
    /// `displayed_device_number` is the current content of the device-number
    /// input, used when the snapshot has no usable `device_number`.
    #[must_use]
    pub fn compute(snapshot: &TelemetrySnapshot, displayed_device_number: Option<&str>) -> Self {
        let device_number =
            DeviceNumber::resolve(snapshot.device_number.as_ref(), displayed_device_number);
        let civ_address = device_number.civ_address();
        let model = snapshot.civ_model.as_ref().map(CivModel::from_scalar);
        let visibility = model.as_ref().map(VisibilityPolicy::for_model);

        let uptime = Uptime::from_fields(
            snapshot.uptime_days.as_ref(),
            snapshot.uptime_hours.as_ref(),
            snapshot.uptime_minutes.as_ref(),
            snapshot.uptime_seconds.as_ref(),
        );

        let metrics = vec![
            (
                NodeKey::CurrentTime,
                display_or(snapshot.time.as_ref(), "TIME_NOT_SET"),
            ),
            (NodeKey::MemTotal, kilobytes(snapshot.mem_total.as_ref())),
            (NodeKey::MemUsed, kilobytes(snapshot.mem_used.as_ref())),
            (NodeKey::MemFree, kilobytes(snapshot.mem_free.as_ref())),
            (NodeKey::FlashTotal, kilobytes(snapshot.flash_total.as_ref())),
            (NodeKey::FlashUsed, kilobytes(snapshot.flash_used.as_ref())),
            (NodeKey::FlashFree, kilobytes(snapshot.flash_free.as_ref())),
            (NodeKey::Uptime, uptime.to_string()),
            (NodeKey::ChipId, unknown_or(snapshot.chip_id.as_ref())),
            (NodeKey::ChipRev, unknown_or(snapshot.chip_rev.as_ref())),
            (
                NodeKey::CpuFreq,
                format!("{} MHz", display_or(snapshot.cpu_freq.as_ref(), "0")),
            ),
            (NodeKey::PsramSize, kilobytes(snapshot.psram_size.as_ref())),
            (NodeKey::AntState, unknown_or(snapshot.ant_state.as_ref())),
            (NodeKey::AutoState, unknown_or(snapshot.auto_state.as_ref())),
            (NodeKey::CivBaud, CIV_BAUD_LABEL.to_string()),
            (NodeKey::CivAddress, civ_address.to_string()),
            (NodeKey::IpAddress, unknown_or(snapshot.ip.as_ref())),
            (
                NodeKey::WebsocketPort,
                websocket_endpoint(snapshot.ip.as_ref(), snapshot.websocket_port.as_ref()),
            ),
            (NodeKey::UdpPort, unknown_or(snapshot.udp_port.as_ref())),
        ];

        Self {
            metrics,
            device_number,
            civ_address,
            model,
            visibility,
            status: ConnectionStatus::classify(
                snapshot.ota_active.as_ref(),
                snapshot.captive_portal_active.as_ref(),
            ),
            remote_link: RemoteLink::classify(snapshot.remote_ws_connected.as_ref()),
            tuning_active: IndicatorDot::is_active(snapshot.tuning_active.as_ref()),
            swr_ok: IndicatorDot::is_active(snapshot.swr_ok.as_ref()),
            latches: LatchView::compute(snapshot),
        }
    }

    /// Text computed for `key`, if it is a metric node.
    #[must_use]
    pub fn metric(&self, key: NodeKey) -> Option<&str> {
        self.metrics
            .iter()
            .find(|(candidate, _)| *candidate == key)
            .map(|(_, text)| text.as_str())
    }
}

fn kilobytes(value: Option<&Scalar>) -> String {
    format!("{} KB", display_or(value, "0"))
}

fn unknown_or(value: Option<&Scalar>) -> String {
    display_or(value, "Unknown")
}
