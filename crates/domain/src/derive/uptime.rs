//! Uptime formatting.

use std::fmt;

use crate::scalar::Scalar;

/// Controller uptime split into calendar components.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Uptime {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl Uptime {
    #[must_use]
    pub fn new(days: u64, hours: u64, minutes: u64, seconds: u64) -> Self {
        Self {
            days,
            hours,
            minutes,
            seconds,
        }
    }

    /// Build from raw payload fields. Absent, non-numeric or negative
    /// components count as zero.
    #[must_use]
    pub fn from_fields(
        days: Option<&Scalar>,
        hours: Option<&Scalar>,
        minutes: Option<&Scalar>,
        seconds: Option<&Scalar>,
    ) -> Self {
        Self::new(
            component(days),
            component(hours),
            component(minutes),
            component(seconds),
        )
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn component(value: Option<&Scalar>) -> u64 {
    match value.and_then(Scalar::as_number) {
        Some(number) if number > 0.0 => number.trunc() as u64,
        _ => 0,
    }
}

/// `[<d> days ][HH:]MM:SS` — the hour field appears once days or hours are
/// non-zero.
impl fmt::Display for Uptime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.days > 0 {
            write!(f, "{} days ", self.days)?;
        }
        if self.days > 0 || self.hours > 0 {
            write!(f, "{:02}:", self.hours)?;
        }
        write!(f, "{:02}:{:02}", self.minutes, self.seconds)
    }
}
