//! CI-V addressing and model identification.
//!
//! The controller answers on the CI-V bus at `0xB7 + n`, where `n` is the
//! device number configured on the dashboard (1..=4).

use std::fmt;

use crate::scalar::Scalar;

/// Address of device number zero; real devices start one above.
pub const CIV_BASE_ADDRESS: u8 = 0xB7;

/// Baud rate the controller's CI-V port is fixed at.
pub const CIV_BAUD_LABEL: &str = "19200";

/// Device number, always within `1..=4`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct DeviceNumber(u8);

impl DeviceNumber {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 4;

    /// Clamp an arbitrary integer into the valid range.
    #[must_use]
    pub fn clamped(value: i64) -> Self {
        let clamped = value.clamp(i64::from(Self::MIN), i64::from(Self::MAX));
        // The clamp above guarantees the conversion succeeds.
        Self(u8::try_from(clamped).unwrap_or(Self::MIN))
    }

    /// Resolve the device number for a sync pass.
    ///
    /// Precedence: the payload's `device_number` when it parses to an
    /// integer, then the value currently shown in the device-number input,
    /// then 1. The result is clamped to `1..=4`.
    #[must_use]
    pub fn resolve(explicit: Option<&Scalar>, displayed: Option<&str>) -> Self {
        explicit
            .and_then(Scalar::as_integer)
            .or_else(|| {
                displayed
                    .filter(|value| !value.is_empty())
                    .and_then(|value| Scalar::Text(value.to_string()).as_integer())
            })
            .map_or(Self(Self::MIN), Self::clamped)
    }

    #[must_use]
    pub fn get(self) -> u8 {
        self.0
    }

    /// CI-V address this device number answers on.
    #[must_use]
    pub fn civ_address(self) -> CivAddress {
        CivAddress(CIV_BASE_ADDRESS + self.0)
    }
}

impl Default for DeviceNumber {
    fn default() -> Self {
        Self(Self::MIN)
    }
}

impl fmt::Display for DeviceNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A CI-V bus address, displayed as `0xNN`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CivAddress(u8);

impl CivAddress {
    #[must_use]
    pub fn get(self) -> u8 {
        self.0
    }
}

impl fmt::Display for CivAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:02X}", self.0)
    }
}

/// Radio model family the controller is configured for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CivModel {
    /// IC-991 through IC-994 (tuner with tuning/SWR feedback lines).
    Ic991To994,
    /// IC-998 (no tuning/SWR feedback).
    Ic998,
    /// Any other identifier the firmware reports.
    Other(String),
}

impl CivModel {
    /// Interpret a payload `civ_model` value. Only the exact strings
    /// `"991-994"` and `"998"` select a known model.
    #[must_use]
    pub fn from_scalar(value: &Scalar) -> Self {
        match value.as_text() {
            Some("991-994") => Self::Ic991To994,
            Some("998") => Self::Ic998,
            _ => Self::Other(value.display()),
        }
    }
}

impl fmt::Display for CivModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ic991To994 => f.write_str("991-994"),
            Self::Ic998 => f.write_str("998"),
            Self::Other(model) => f.write_str(model),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn address_for(explicit: Option<Scalar>) -> String {
        DeviceNumber::resolve(explicit.as_ref(), None)
            .civ_address()
            .to_string()
    }

    #[test]
    fn should_compute_address_for_in_range_numbers() {
        assert_eq!(address_for(Some(Scalar::Int(1))), "0xB8");
        assert_eq!(address_for(Some(Scalar::Int(2))), "0xB9");
        assert_eq!(address_for(Some(Scalar::Int(3))), "0xBA");
        assert_eq!(address_for(Some(Scalar::Int(4))), "0xBB");
    }

    #[test]
    fn should_clamp_out_of_range_numbers() {
        assert_eq!(address_for(Some(Scalar::Int(-5))), "0xB8");
        assert_eq!(address_for(Some(Scalar::Int(0))), "0xB8");
        assert_eq!(address_for(Some(Scalar::Int(9))), "0xBB");
    }

    #[test]
    fn should_default_non_numeric_and_missing_to_one() {
        assert_eq!(address_for(Some(Scalar::Text("abc".to_string()))), "0xB8");
        assert_eq!(address_for(None), "0xB8");
    }

    #[test]
    fn should_parse_numeric_strings() {
        assert_eq!(address_for(Some(Scalar::Text("3".to_string()))), "0xBA");
    }

    #[test]
    fn should_fall_back_to_displayed_value() {
        let number = DeviceNumber::resolve(None, Some("3"));
        assert_eq!(number.get(), 3);
    }

    #[test]
    fn should_prefer_explicit_field_over_displayed_value() {
        let number = DeviceNumber::resolve(Some(&Scalar::Int(2)), Some("3"));
        assert_eq!(number.get(), 2);
    }

    #[test]
    fn should_use_displayed_value_when_explicit_field_does_not_parse() {
        let explicit = Scalar::Text("abc".to_string());
        let number = DeviceNumber::resolve(Some(&explicit), Some("4"));
        assert_eq!(number.get(), 4);
    }

    #[test]
    fn should_ignore_empty_displayed_value() {
        assert_eq!(DeviceNumber::resolve(None, Some("")).get(), 1);
    }

    #[test]
    fn should_pad_address_to_two_hex_digits() {
        assert_eq!(CivAddress(0x0A).to_string(), "0x0A");
    }

    #[test]
    fn should_identify_known_models() {
        let model = |raw: &str| CivModel::from_scalar(&Scalar::Text(raw.to_string()));
        assert_eq!(model("991-994"), CivModel::Ic991To994);
        assert_eq!(model("998"), CivModel::Ic998);
        assert_eq!(model("705"), CivModel::Other("705".to_string()));
    }

    #[test]
    fn should_not_match_numeric_model_value() {
        let model = CivModel::from_scalar(&Scalar::Int(998));
        assert_eq!(model, CivModel::Other("998".to_string()));
    }
}
