//! Where each catalog key lives in the dashboard markup.

use tunerdash_domain::catalog::NodeKey;

/// How a node key is found in the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Locator {
    /// Element with this `id`.
    Id(&'static str),
    /// First element matching this CSS selector.
    Selector(&'static str),
    /// Every element matching this CSS selector.
    All(&'static str),
    /// Parent element of the element with this `id`.
    ParentOf(&'static str),
}

/// Locate `key` in the dashboard markup.
#[must_use]
pub fn locate(key: NodeKey) -> Locator {
    match key {
        NodeKey::CurrentTime => Locator::Id("current-time"),
        NodeKey::MemTotal => Locator::Selector(r#"[data-metric="mem-total"]"#),
        NodeKey::MemUsed => Locator::Selector(r#"[data-metric="mem-used"]"#),
        NodeKey::MemFree => Locator::Selector(r#"[data-metric="mem-free"]"#),
        NodeKey::FlashTotal => Locator::Selector(r#"[data-metric="flash-total"]"#),
        NodeKey::FlashUsed => Locator::Selector(r#"[data-metric="flash-used"]"#),
        NodeKey::FlashFree => Locator::Selector(r#"[data-metric="flash-free"]"#),
        NodeKey::Uptime => Locator::Selector(r#"[data-metric="uptime"]"#),
        NodeKey::ChipId => Locator::Selector(r#"[data-metric="chip-id"]"#),
        NodeKey::ChipRev => Locator::Selector(r#"[data-metric="chip-rev"]"#),
        NodeKey::CpuFreq => Locator::Selector(r#"[data-metric="cpu-freq"]"#),
        NodeKey::PsramSize => Locator::Selector(r#"[data-metric="psram-size"]"#),
        NodeKey::AntState => Locator::Selector(r#"[data-metric="ant-state"]"#),
        NodeKey::AutoState => Locator::Selector(r#"[data-metric="auto-state"]"#),
        NodeKey::CivBaud => Locator::Selector(r#"[data-metric="civ-baud"]"#),
        NodeKey::CivAddress => Locator::Selector(r#"[data-metric="civ-address"]"#),
        NodeKey::IpAddress => Locator::Selector(r#"[data-metric="ip-address"]"#),
        NodeKey::WebsocketPort => Locator::Selector(r#"[data-metric="websocket-port"]"#),
        NodeKey::UdpPort => Locator::Selector(r#"[data-metric="udp-port"]"#),
        NodeKey::Footer => Locator::Selector(".footer"),
        NodeKey::DeviceNumber => Locator::Selector(r#"[data-metric="device-number"]"#),
        NodeKey::CivModel991 => Locator::Id("civ-model-991"),
        NodeKey::CivModel998 => Locator::Id("civ-model-998"),
        // The remote-link indicator carries the same class but is driven on its own.
        NodeKey::StatusIndicator => Locator::All(".status-indicator:not(#remote-ws-indicator)"),
        NodeKey::RemoteWsIndicator => Locator::Id("remote-ws-indicator"),
        NodeKey::RemoteWsLabel => Locator::Id("remote-ws-label"),
        NodeKey::TuningDot => Locator::Id("tuning-dot"),
        NodeKey::SwrDot => Locator::Id("swr-dot"),
        NodeKey::TuningLabel => Locator::ParentOf("tuning-dot"),
        NodeKey::SwrLabel => Locator::ParentOf("swr-dot"),
        NodeKey::LinkButton => Locator::Id("lup-ldn-link-btn"),
        NodeKey::SwrBeeperShortcut => Locator::Id("swr-beeper-shortcut"),
        NodeKey::AntButton => Locator::Id("button-ant"),
        NodeKey::AutoButton => Locator::Id("button-auto"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_only_use_all_locator_for_status_group() {
        for key in NodeKey::ALL {
            let is_all = matches!(locate(*key), Locator::All(_));
            assert_eq!(is_all, *key == NodeKey::StatusIndicator, "{key}");
        }
    }

    #[test]
    fn should_locate_indicator_labels_through_their_dots() {
        assert_eq!(locate(NodeKey::TuningLabel), Locator::ParentOf("tuning-dot"));
        assert_eq!(locate(NodeKey::SwrLabel), Locator::ParentOf("swr-dot"));
    }

    #[test]
    fn should_locate_metrics_by_data_attribute() {
        assert_eq!(
            locate(NodeKey::CivAddress),
            Locator::Selector(r#"[data-metric="civ-address"]"#)
        );
    }
}
