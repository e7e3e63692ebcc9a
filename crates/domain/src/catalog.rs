//! Node catalog — the stable keys shared with the dashboard markup.
//!
//! Each [`NodeKey`] names one visual element (or, for
//! [`NodeKey::StatusIndicator`], every element tagged as a status indicator).
//! The string form returned by [`NodeKey::as_str`] is the wire contract with
//! the page and must not change between releases.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

macro_rules! define_catalog {
    ($($(#[doc = $doc:expr])* $variant:ident => $key:literal;)+) => {
        /// Stable key of a dashboard node.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum NodeKey {
            $($(#[doc = $doc])* $variant,)+
        }

        impl NodeKey {
            /// Every key in the catalog, in declaration order.
            pub const ALL: &'static [NodeKey] = &[$(NodeKey::$variant,)+];

            /// The stable string form of the key.
            #[must_use]
            pub fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $key,)+
                }
            }
        }
    };
}

define_catalog! {
    /// Controller wall-clock time.
    CurrentTime => "current-time";
    MemTotal => "mem-total";
    MemUsed => "mem-used";
    MemFree => "mem-free";
    FlashTotal => "flash-total";
    FlashUsed => "flash-used";
    FlashFree => "flash-free";
    /// Formatted uptime.
    Uptime => "uptime";
    ChipId => "chip-id";
    ChipRev => "chip-rev";
    CpuFreq => "cpu-freq";
    PsramSize => "psram-size";
    /// Raw antenna state text.
    AntState => "ant-state";
    /// Raw auto/semi state text.
    AutoState => "auto-state";
    CivBaud => "civ-baud";
    /// Computed CI-V address.
    CivAddress => "civ-address";
    IpAddress => "ip-address";
    /// WebSocket endpoint (`ip:port` when possible).
    WebsocketPort => "websocket-port";
    UdpPort => "udp-port";
    /// Footer note with the last update time.
    Footer => "footer";
    /// Device-number input; read as a fallback and written back.
    DeviceNumber => "device-number";
    /// Radio button for the IC-991..994 model family.
    CivModel991 => "civ-model-991";
    /// Radio button for the IC-998 model.
    CivModel998 => "civ-model-998";
    /// Every node tagged as a system status indicator.
    StatusIndicator => "status-indicator";
    /// Remote WebSocket link indicator.
    RemoteWsIndicator => "remote-ws-indicator";
    /// Remote WebSocket link label.
    RemoteWsLabel => "remote-ws-label";
    /// Tuning-in-progress dot.
    TuningDot => "tuning-dot";
    /// SWR-ok dot.
    SwrDot => "swr-dot";
    /// Label wrapping the tuning dot.
    TuningLabel => "tuning-label";
    /// Label wrapping the SWR dot.
    SwrLabel => "swr-label";
    /// Antenna-chain link control.
    LinkButton => "link-button";
    /// SWR beeper shortcut.
    SwrBeeperShortcut => "swr-beeper-shortcut";
    /// ANT 1 / ANT 2 latch.
    AntButton => "ant-button";
    /// AUTO / SEMI latch. Also hidden by the visibility policy.
    AutoButton => "auto-button";
}

impl fmt::Display for NodeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when parsing a string that is not in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown node key: {0}")]
pub struct UnknownNodeKey(pub String);

impl FromStr for NodeKey {
    type Err = UnknownNodeKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| UnknownNodeKey(s.to_string()))
    }
}

impl Serialize for NodeKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for NodeKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn should_define_every_key_exactly_once() {
        let unique: HashSet<&str> = NodeKey::ALL.iter().map(|key| key.as_str()).collect();
        assert_eq!(unique.len(), NodeKey::ALL.len());
    }

    #[test]
    fn should_parse_every_key_from_its_string_form() {
        for key in NodeKey::ALL {
            assert_eq!(key.as_str().parse::<NodeKey>().unwrap(), *key);
        }
    }

    #[test]
    fn should_reject_unknown_key() {
        let err = "tuning-knob".parse::<NodeKey>().unwrap_err();
        assert_eq!(err.to_string(), "unknown node key: tuning-knob");
    }

    #[test]
    fn should_serialize_as_plain_string() {
        let json = serde_json::to_string(&NodeKey::CivAddress).unwrap();
        assert_eq!(json, "\"civ-address\"");
        let parsed: NodeKey = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, NodeKey::CivAddress);
    }
}
