//! Latch controls — the antenna and auto/semi toggle buttons.

use crate::scalar::Scalar;

/// Active flag and label of a latch control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatchState {
    pub active: bool,
    pub label: &'static str,
}

/// Class toggled on a latch control while it is active.
pub const ACTIVE_CLASS: &str = "active";

impl LatchState {
    /// Antenna selector: active on `"ANT 2"`, anything else reads as `"ANT 1"`.
    #[must_use]
    pub fn antenna(ant_state: Option<&Scalar>) -> Self {
        let active = matches_literal(ant_state, "ANT 2");
        Self {
            active,
            label: if active { "ANT 2" } else { "ANT 1" },
        }
    }

    /// Auto/semi selector: active on `"AUTO"`.
    #[must_use]
    pub fn auto_mode(auto_state: Option<&Scalar>) -> Self {
        let active = matches_literal(auto_state, "AUTO");
        Self {
            active,
            label: if active { "AUTO" } else { "SEMI" },
        }
    }
}

fn matches_literal(value: Option<&Scalar>, literal: &str) -> bool {
    value
        .and_then(Scalar::as_text)
        .is_some_and(|text| text.trim().eq_ignore_ascii_case(literal))
}
