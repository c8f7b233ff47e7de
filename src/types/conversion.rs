//! Conversion request and result types.

use std::fmt;

use super::TemperatureUnit;

/// A request to convert `value` from one unit to another.
///
/// Nothing is validated at construction; the conversion rejects
/// unusable units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConvertRequest {
    pub value: f64,
    pub from_unit: TemperatureUnit,
    pub to_unit: TemperatureUnit,
}

impl ConvertRequest {
    pub fn new(value: f64, from_unit: TemperatureUnit, to_unit: TemperatureUnit) -> Self {
        Self {
            value,
            from_unit,
            to_unit,
        }
    }
}

/// The formula branch that produced a converted value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Formula {
    /// Source and destination were the same; the value passed through.
    SameUnit,
    ToCelsius,
    ToFahrenheit,
    ToKelvin,
}

impl Formula {
    /// Human-readable description carried in `formula_used` on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SameUnit => "same unit, no conversion",
            Self::ToCelsius => "C = source converted to celsius",
            Self::ToFahrenheit => "F = (C × 9/5) + 32",
            Self::ToKelvin => "K = C + 273.15",
        }
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of a successful conversion.
#[derive(Debug, Clone, PartialEq)]
pub struct Conversion {
    pub converted_value: f64,
    /// Formula description as received; always one of [`Formula::as_str`]
    /// when produced by this crate.
    pub formula_used: String,
}

impl Conversion {
    pub fn new(converted_value: f64, formula: Formula) -> Self {
        Self {
            converted_value,
            formula_used: formula.as_str().to_string(),
        }
    }
}
