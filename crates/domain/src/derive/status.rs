//! Connection-status classification and indicator styling.

use crate::scalar::{Scalar, is_truthy};

/// Categorical health shown by status indicators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionStatus {
    Online,
    Offline,
    Warning,
}

impl ConnectionStatus {
    /// System status: an OTA update wins over the captive portal, which wins
    /// over normal operation.
    #[must_use]
    pub fn classify(ota_active: Option<&Scalar>, captive_portal_active: Option<&Scalar>) -> Self {
        if is_truthy(ota_active) {
            Self::Warning
        } else if is_truthy(captive_portal_active) {
            Self::Offline
        } else {
            Self::Online
        }
    }

    /// Full class list of an indicator in this state.
    #[must_use]
    pub fn indicator_class(self) -> &'static str {
        match self {
            Self::Online => "status-indicator status-online",
            Self::Offline => "status-indicator status-offline",
            Self::Warning => "status-indicator status-warning",
        }
    }
}

/// Accent color of the remote-link label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accent {
    Green,
    Red,
    Neutral,
}

impl Accent {
    #[must_use]
    pub fn css_color(self) -> &'static str {
        match self {
            Self::Green => "#4CAF50",
            Self::Red => "#F44336",
            Self::Neutral => "#888",
        }
    }
}

/// Display state of the remote WebSocket link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemoteLink {
    pub status: ConnectionStatus,
    pub label: &'static str,
    pub accent: Accent,
}

impl RemoteLink {
    /// A reported value, even `false`, is "known"; a missing one is "Unknown".
    #[must_use]
    pub fn classify(remote_ws_connected: Option<&Scalar>) -> Self {
        match remote_ws_connected {
            Some(value) if value.is_truthy() => Self {
                status: ConnectionStatus::Online,
                label: "Connected",
                accent: Accent::Green,
            },
            Some(_) => Self {
                status: ConnectionStatus::Offline,
                label: "Disconnected",
                accent: Accent::Red,
            },
            None => Self {
                status: ConnectionStatus::Offline,
                label: "Unknown",
                accent: Accent::Neutral,
            },
        }
    }
}

/// One of the two tuner feedback dots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndicatorDot {
    Tuning,
    Swr,
}

impl IndicatorDot {
    /// Whether a feedback input reads as active: any truthy value lights the
    /// dot, including the firmware's `-1` pin read fault.
    #[must_use]
    pub fn is_active(value: Option<&Scalar>) -> bool {
        is_truthy(value)
    }

    /// Class list of the dot.
    #[must_use]
    pub fn class(self, active: bool) -> &'static str {
        match (self, active) {
            (Self::Tuning, true) => "indicator-dot tuning",
            (Self::Tuning, false) => "indicator-dot tuning gray",
            (Self::Swr, true) => "indicator-dot swr",
            (Self::Swr, false) => "indicator-dot swr gray",
        }
    }
}
