//! Loosely-typed payload values.
//!
//! The controller firmware is not consistent about the JSON type of a given
//! field (`chip_rev` is a number, `udp_port` may be a number or a string,
//! indicator inputs are `-1 | 0 | 1` instead of booleans). Every snapshot
//! field is therefore decoded as a [`Scalar`] and coerced where it is used.

use serde::{Deserialize, Serialize};

/// A single loosely-typed payload value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Json(serde_json::Value),
}

impl Scalar {
    /// Whether the value counts as "set" for display fallbacks.
    ///
    /// `false`, `0`, `NaN` and the empty string are falsy, everything else is
    /// truthy.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Bool(value) => *value,
            Self::Int(value) => *value != 0,
            Self::Float(value) => *value != 0.0 && !value.is_nan(),
            Self::Text(value) => !value.is_empty(),
            Self::Json(value) => !value.is_null(),
        }
    }

    /// The value as a number, only when it was sent as a JSON number.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Int(value) => Some(*value as f64),
            Self::Float(value) if value.is_finite() => Some(*value),
            _ => None,
        }
    }

    /// Leading integer of the value.
    ///
    /// Numbers are truncated toward zero, strings are read up to the first
    /// non-digit after an optional sign (`" 3rd"` is `3`). Booleans, objects
    /// and strings without leading digits yield `None`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Int(value) => Some(*value),
            // `as` saturates out-of-range floats, which is what clamping wants.
            Self::Float(value) if value.is_finite() => Some(value.trunc() as i64),
            Self::Text(value) => parse_leading_integer(value),
            _ => None,
        }
    }

    /// The value as text, when it was sent as a JSON string.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value),
            _ => None,
        }
    }

    /// Render the value the way the dashboard prints it.
    #[must_use]
    pub fn display(&self) -> String {
        match self {
            Self::Bool(value) => value.to_string(),
            Self::Int(value) => value.to_string(),
            Self::Float(value) => format_float(*value),
            Self::Text(value) => value.clone(),
            Self::Json(value) => value.to_string(),
        }
    }
}

/// Display `value` if it is truthy, `fallback` otherwise.
#[must_use]
pub fn display_or(value: Option<&Scalar>, fallback: &str) -> String {
    match value {
        Some(value) if value.is_truthy() => value.display(),
        _ => fallback.to_string(),
    }
}

/// Whether an optional value is present and truthy.
#[must_use]
pub fn is_truthy(value: Option<&Scalar>) -> bool {
    value.is_some_and(Scalar::is_truthy)
}

#[allow(clippy::cast_possible_truncation)]
fn format_float(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        (value as i64).to_string()
    } else {
        value.to_string()
    }
}

fn parse_leading_integer(input: &str) -> Option<i64> {
    let trimmed = input.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits: Vec<i64> = rest
        .bytes()
        .take_while(u8::is_ascii_digit)
        .map(|digit| i64::from(digit - b'0'))
        .collect();
    if digits.is_empty() {
        return None;
    }
    let magnitude = digits.iter().fold(0_i64, |acc, digit| {
        acc.saturating_mul(10).saturating_add(*digit)
    });
    Some(if negative { -magnitude } else { magnitude })
}
