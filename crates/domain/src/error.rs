//! Error types for the transport boundary.
//!
//! Rendering never fails. The only fallible step is turning a raw frame into
//! a [`TelemetrySnapshot`](crate::snapshot::TelemetrySnapshot).

/// Failure to decode a raw telemetry frame.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    /// The frame is not valid JSON.
    #[error("telemetry frame is not valid JSON")]
    Json(#[from] serde_json::Error),

    /// The frame is valid JSON but not an object.
    #[error("telemetry frame must be a JSON object, got {0}")]
    NotAnObject(&'static str),
}
