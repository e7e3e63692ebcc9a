//! Telemetry snapshot — one status payload pushed by the tuner controller.
//!
//! Every field is optional. A snapshot is never rejected for missing or
//! oddly-typed fields; coercion to display values happens in [`crate::derive`].
//!
//! An explicit `null` usually reads as absent. `civ_model` and
//! `remote_ws_connected` keep it as [`Scalar::Json`] because a reported
//! `null` still counts as defined for them.

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::SnapshotError;
use crate::scalar::Scalar;

/// A single telemetry payload as received from the controller.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TelemetrySnapshot {
    /// Frame discriminator (`dashboard_update`, `state_update`).
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<Scalar>,

    // Network
    pub time: Option<Scalar>,
    pub ip: Option<Scalar>,
    pub websocket_port: Option<Scalar>,
    pub udp_port: Option<Scalar>,

    // Memory and flash, in KB
    pub mem_total: Option<Scalar>,
    pub mem_used: Option<Scalar>,
    pub mem_free: Option<Scalar>,
    pub flash_total: Option<Scalar>,
    pub flash_used: Option<Scalar>,
    pub flash_free: Option<Scalar>,

    // Uptime
    pub uptime_days: Option<Scalar>,
    pub uptime_hours: Option<Scalar>,
    pub uptime_minutes: Option<Scalar>,
    pub uptime_seconds: Option<Scalar>,

    // Chip
    pub chip_id: Option<Scalar>,
    pub chip_rev: Option<Scalar>,
    pub cpu_freq: Option<Scalar>,
    pub psram_size: Option<Scalar>,

    // Tuner
    pub ant_state: Option<Scalar>,
    pub auto_state: Option<Scalar>,
    pub tuning_active: Option<Scalar>,
    pub swr_ok: Option<Scalar>,

    // CI-V
    #[serde(deserialize_with = "defined")]
    pub civ_model: Option<Scalar>,
    pub device_number: Option<Scalar>,

    // Connectivity
    #[serde(deserialize_with = "defined")]
    pub remote_ws_connected: Option<Scalar>,
    pub ota_active: Option<Scalar>,
    pub captive_portal_active: Option<Scalar>,
}

/// Keep a present field, `null` included. A missing one falls back to the
/// struct default.
fn defined<'de, D>(deserializer: D) -> Result<Option<Scalar>, D::Error>
where
    D: Deserializer<'de>,
{
    Scalar::deserialize(deserializer).map(Some)
}

/// What a frame asks the dashboard to refresh.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrameKind {
    /// Full status payload; every tracked node is rewritten.
    DashboardUpdate,
    /// Button-state notification; only the latch controls are rewritten.
    StateUpdate,
    /// A frame type the dashboard does not render.
    Unrecognized(String),
}

impl TelemetrySnapshot {
    /// Decode a raw JSON frame.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError::Json`] if the frame is not JSON and
    /// [`SnapshotError::NotAnObject`] if it is not a JSON object. Unknown or
    /// oddly-typed fields are never an error.
    pub fn from_json(frame: &str) -> Result<Self, SnapshotError> {
        let value: serde_json::Value = serde_json::from_str(frame)?;
        Self::from_value(value)
    }

    /// Decode an already-parsed JSON value.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError::NotAnObject`] if `value` is not an object.
    pub fn from_value(value: serde_json::Value) -> Result<Self, SnapshotError> {
        if value.is_object() {
            return Ok(serde_json::from_value(value)?);
        }
        let kind = match value {
            serde_json::Value::Object(_) => "object",
            serde_json::Value::Null => "null",
            serde_json::Value::Bool(_) => "boolean",
            serde_json::Value::Number(_) => "number",
            serde_json::Value::String(_) => "string",
            serde_json::Value::Array(_) => "array",
        };
        Err(SnapshotError::NotAnObject(kind))
    }

    /// Classify the frame by its `type` field. A missing type is a full update.
    #[must_use]
    pub fn frame_kind(&self) -> FrameKind {
        match &self.kind {
            None => FrameKind::DashboardUpdate,
            Some(Scalar::Text(kind)) if kind == "dashboard_update" => FrameKind::DashboardUpdate,
            Some(Scalar::Text(kind)) if kind == "state_update" => FrameKind::StateUpdate,
            Some(other) => FrameKind::Unrecognized(other.display()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_decode_empty_object_as_default_snapshot() {
        let snapshot = TelemetrySnapshot::from_json("{}").unwrap();
        assert_eq!(snapshot, TelemetrySnapshot::default());
    }

    #[test]
    fn should_decode_firmware_dashboard_frame() {
        let frame = r#"{
            "type": "dashboard_update",
            "time": "12:00:01",
            "ip": "192.168.1.40",
            "websocket_port": "192.168.1.40:81",
            "udp_port": 4210,
            "chip_rev": 3,
            "tuning_active": -1,
            "swr_ok": 1,
            "remote_ws_connected": false,
            "civ_model": "998",
            "flash_size": 4096
        }"#;
        let snapshot = TelemetrySnapshot::from_json(frame).unwrap();
        assert_eq!(snapshot.frame_kind(), FrameKind::DashboardUpdate);
        assert_eq!(snapshot.udp_port, Some(Scalar::Int(4210)));
        assert_eq!(snapshot.chip_rev, Some(Scalar::Int(3)));
        assert_eq!(snapshot.tuning_active, Some(Scalar::Int(-1)));
        assert_eq!(snapshot.remote_ws_connected, Some(Scalar::Bool(false)));
        assert_eq!(snapshot.civ_model, Some(Scalar::Text("998".to_string())));
    }

    #[test]
    fn should_treat_null_fields_as_absent() {
        let snapshot = TelemetrySnapshot::from_json(r#"{"ip": null}"#).unwrap();
        assert_eq!(snapshot.ip, None);
    }

    #[test]
    fn should_keep_null_for_fields_where_defined_matters() {
        let snapshot =
            TelemetrySnapshot::from_json(r#"{"civ_model": null, "remote_ws_connected": null}"#)
                .unwrap();
        assert_eq!(
            snapshot.civ_model,
            Some(Scalar::Json(serde_json::Value::Null))
        );
        assert_eq!(
            snapshot.remote_ws_connected,
            Some(Scalar::Json(serde_json::Value::Null))
        );

        let missing = TelemetrySnapshot::from_json("{}").unwrap();
        assert_eq!(missing.civ_model, None);
        assert_eq!(missing.remote_ws_connected, None);
    }

    #[test]
    fn should_accept_unexpected_field_shapes() {
        let snapshot = TelemetrySnapshot::from_json(r#"{"chip_id": [1, 2]}"#).unwrap();
        assert!(matches!(snapshot.chip_id, Some(Scalar::Json(_))));
    }

    #[test]
    fn should_reject_non_object_frame() {
        let err = TelemetrySnapshot::from_json("[1, 2, 3]").unwrap_err();
        assert!(matches!(err, SnapshotError::NotAnObject("array")));
    }

    #[test]
    fn should_reject_invalid_json() {
        let err = TelemetrySnapshot::from_json("{not json").unwrap_err();
        assert!(matches!(err, SnapshotError::Json(_)));
    }

    #[test]
    fn should_classify_state_update_frame() {
        let snapshot =
            TelemetrySnapshot::from_json(r#"{"type": "state_update", "ant_state": "ANT 2"}"#)
                .unwrap();
        assert_eq!(snapshot.frame_kind(), FrameKind::StateUpdate);
    }

    #[test]
    fn should_flag_unknown_frame_type() {
        let snapshot = TelemetrySnapshot::from_json(r#"{"type": "log_line"}"#).unwrap();
        assert_eq!(
            snapshot.frame_kind(),
            FrameKind::Unrecognized("log_line".to_string())
        );
    }
}
