//! WebSocket endpoint display.

use crate::scalar::{Scalar, display_or, is_truthy};

/// Render the WebSocket endpoint.
///
/// Newer firmware already sends `"ip:port"`; older builds send the bare port,
/// in which case the device IP is prepended when known.
#[must_use]
pub fn websocket_endpoint(ip: Option<&Scalar>, port: Option<&Scalar>) -> String {
    let port = display_or(port, "Unknown");
    let bare_port = !port.is_empty() && port.bytes().all(|byte| byte.is_ascii_digit());
    match ip {
        Some(ip) if bare_port && is_truthy(Some(ip)) => format!("{}:{port}", ip.display()),
        _ => port,
    }
}
