//! End-to-end tests of the dashboard core against the in-memory page.
//!
//! Each test wires the real synchronizer onto an `InMemoryPage` and feeds it
//! decoded frames, the way the replay tool and the browser adapter do.

use chrono::TimeZone;
use serde_json::json;
use tunerdash_adapter_memory::InMemoryPage;
use tunerdash_app::ports::Clock;
use tunerdash_app::services::view_synchronizer::ViewSynchronizer;
use tunerdash_domain::catalog::NodeKey;
use tunerdash_domain::snapshot::{FrameKind, TelemetrySnapshot};
use tunerdash_domain::time::Timestamp;

struct FixedClock;

impl Clock for FixedClock {
    fn now(&self) -> Timestamp {
        chrono::Local
            .with_ymd_and_hms(2024, 11, 2, 9, 41, 30)
            .unwrap()
    }
}

fn synchronizer(page: InMemoryPage) -> ViewSynchronizer<InMemoryPage, FixedClock> {
    ViewSynchronizer::with_clock(page, FixedClock)
}

fn session() -> Vec<TelemetrySnapshot> {
    include_str!("fixtures/session.ndjson")
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| TelemetrySnapshot::from_json(line).expect("fixture frame should decode"))
        .collect()
}

fn snapshot(value: serde_json::Value) -> TelemetrySnapshot {
    TelemetrySnapshot::from_value(value).expect("test payload should be an object")
}

const CONTROLLED: [NodeKey; 7] = [
    NodeKey::TuningDot,
    NodeKey::SwrDot,
    NodeKey::TuningLabel,
    NodeKey::SwrLabel,
    NodeKey::AutoButton,
    NodeKey::LinkButton,
    NodeKey::SwrBeeperShortcut,
];

// ---------------------------------------------------------------------------
// Recorded session
// ---------------------------------------------------------------------------

#[test]
fn should_render_first_frame_of_recorded_session() {
    let sync = synchronizer(InMemoryPage::full());
    let frames = session();
    assert_eq!(sync.apply(&frames[0]), FrameKind::DashboardUpdate);

    let page = sync.target();
    assert_eq!(page.text(NodeKey::CurrentTime).as_deref(), Some("09:41:07"));
    assert_eq!(page.text(NodeKey::MemUsed).as_deref(), Some("121 KB"));
    assert_eq!(page.text(NodeKey::Uptime).as_deref(), Some("03:12"));
    assert_eq!(page.text(NodeKey::ChipRev).as_deref(), Some("3"));
    assert_eq!(page.text(NodeKey::PsramSize).as_deref(), Some("0 KB"));
    assert_eq!(page.text(NodeKey::CpuFreq).as_deref(), Some("240 MHz"));
    assert_eq!(
        page.text(NodeKey::WebsocketPort).as_deref(),
        Some("192.168.1.40:81")
    );
    assert_eq!(page.text(NodeKey::CivAddress).as_deref(), Some("0xB8"));
    assert_eq!(page.text(NodeKey::CivBaud).as_deref(), Some("19200"));
    assert_eq!(page.text(NodeKey::RemoteWsLabel).as_deref(), Some("Connected"));
    assert_eq!(page.text(NodeKey::AutoButton).as_deref(), Some("AUTO"));
    assert!(CONTROLLED.iter().all(|key| page.state(*key).unwrap().visible));
    assert_eq!(
        page.state(NodeKey::CivModel991).unwrap().checked,
        Some(true)
    );
    assert_eq!(
        page.text(NodeKey::Footer).as_deref(),
        Some("Dashboard updates in real-time via WebSocket. Last updated: 09:41:30")
    );
}

#[test]
fn should_apply_state_update_between_dashboard_frames() {
    let sync = synchronizer(InMemoryPage::full());
    let frames = session();
    sync.apply(&frames[0]);
    assert_eq!(sync.apply(&frames[1]), FrameKind::StateUpdate);

    let page = sync.target();
    let ant = page.state(NodeKey::AntButton).unwrap();
    assert_eq!(ant.text.as_deref(), Some("ANT 2"));
    assert!(ant.has_class("active"));
    assert_eq!(page.text(NodeKey::AutoButton).as_deref(), Some("SEMI"));
    // Metrics from the first frame are untouched.
    assert_eq!(page.text(NodeKey::MemUsed).as_deref(), Some("121 KB"));
}

#[test]
fn should_switch_to_998_layout_on_last_frame() {
    let sync = synchronizer(InMemoryPage::full());
    for frame in session() {
        sync.apply(&frame);
    }

    let page = sync.target();
    assert!(CONTROLLED.iter().all(|key| !page.state(*key).unwrap().visible));
    assert_eq!(
        page.state(NodeKey::CivModel998).unwrap().checked,
        Some(true)
    );
    let ant = page.state(NodeKey::AntButton).unwrap();
    assert_eq!(ant.text.as_deref(), Some("ANT 2"));
    assert!(ant.has_class("active"));
    assert_eq!(
        page.state(NodeKey::StatusIndicator).unwrap().class_name(),
        "status-indicator status-warning"
    );
    assert_eq!(
        page.text(NodeKey::RemoteWsLabel).as_deref(),
        Some("Disconnected")
    );
    assert_eq!(
        page.state(NodeKey::TuningDot).unwrap().class_name(),
        "indicator-dot tuning"
    );
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

#[test]
fn should_produce_same_page_when_snapshot_applied_twice() {
    let once = synchronizer(InMemoryPage::full());
    let twice = synchronizer(InMemoryPage::full());
    for frame in session() {
        once.apply(&frame);
        twice.apply(&frame);
        twice.apply(&frame);
    }
    assert_eq!(once.target().dump(), twice.target().dump());
}

#[test]
fn should_complete_when_every_node_is_absent() {
    let sync = synchronizer(InMemoryPage::empty());
    for frame in session() {
        sync.apply(&frame);
    }
    assert!(sync.target().dump().is_empty());
}

#[test]
fn should_clamp_device_number_to_known_addresses() {
    let cases = [
        (json!(-5), "0xB8"),
        (json!(0), "0xB8"),
        (json!(1), "0xB8"),
        (json!(4), "0xBB"),
        (json!(9), "0xBB"),
        (json!("abc"), "0xB8"),
        (json!(null), "0xB8"),
    ];
    for (device_number, expected) in cases {
        let sync = synchronizer(InMemoryPage::full());
        sync.sync(&snapshot(json!({ "device_number": device_number })));
        assert_eq!(
            sync.target().text(NodeKey::CivAddress).as_deref(),
            Some(expected),
            "device_number = {device_number}"
        );
    }
}

#[test]
fn should_keep_visibility_until_model_reported_again() {
    let sync = synchronizer(InMemoryPage::full());
    sync.sync(&snapshot(json!({ "civ_model": "998" })));
    sync.sync(&snapshot(json!({ "mem_total": 1 })));
    assert!(
        CONTROLLED
            .iter()
            .all(|key| !sync.target().state(*key).unwrap().visible)
    );

    sync.sync(&snapshot(json!({ "civ_model": "991-994" })));
    assert!(
        CONTROLLED
            .iter()
            .all(|key| sync.target().state(*key).unwrap().visible)
    );
}

#[test]
fn should_classify_every_status_indicator_on_page() {
    let page = InMemoryPage::full()
        .with_node(NodeKey::StatusIndicator)
        .with_node(NodeKey::StatusIndicator);
    let sync = synchronizer(page);
    sync.sync(&snapshot(
        json!({ "ota_active": false, "captive_portal_active": true }),
    ));
    let dump = sync.target().dump();
    let states = &dump[&NodeKey::StatusIndicator];
    assert_eq!(states.len(), 3);
    assert!(
        states
            .iter()
            .all(|state| state.class_name() == "status-indicator status-offline")
    );
}

#[test]
fn should_skip_missing_regions_and_write_the_rest() {
    let page = InMemoryPage::full()
        .without(NodeKey::SwrBeeperShortcut)
        .without(NodeKey::LinkButton)
        .without(NodeKey::Footer);
    let sync = synchronizer(page);
    sync.sync(&snapshot(json!({ "civ_model": "998", "uptime_days": 2 })));

    let page = sync.target();
    assert!(!page.contains(NodeKey::Footer));
    assert_eq!(page.text(NodeKey::Uptime).as_deref(), Some("2 days 00:00:00"));
    assert!(!page.state(NodeKey::TuningDot).unwrap().visible);
}

#[test]
fn should_use_preset_device_number_when_payload_has_none() {
    let page = InMemoryPage::full().with_value(NodeKey::DeviceNumber, "3");
    let sync = synchronizer(page);
    sync.sync(&snapshot(json!({})));
    assert_eq!(sync.target().text(NodeKey::CivAddress).as_deref(), Some("0xBA"));
    assert_eq!(
        sync.target().state(NodeKey::DeviceNumber).unwrap().value.as_deref(),
        Some("3")
    );
}
