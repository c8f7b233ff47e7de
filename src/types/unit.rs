//! Temperature units.

use std::fmt;
use std::str::FromStr;

use crate::TempconvError;

/// A temperature scale.
///
/// `Unspecified` is the wire default and is never a valid conversion
/// endpoint; the conversion rejects it. `Unrecognized` carries an enum
/// number from a newer or foreign schema through to the conversion
/// untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TemperatureUnit {
    #[default]
    Unspecified,
    Celsius,
    Fahrenheit,
    Kelvin,
    Unrecognized(i32),
}

impl TemperatureUnit {
    /// The three units a conversion can start or end at.
    pub const CONVERTIBLE: [TemperatureUnit; 3] = [Self::Celsius, Self::Fahrenheit, Self::Kelvin];

    /// Unit for a schema enum number. Numbers outside the schema are kept
    /// as [`TemperatureUnit::Unrecognized`].
    pub fn from_number(number: i32) -> Self {
        match number {
            0 => Self::Unspecified,
            1 => Self::Celsius,
            2 => Self::Fahrenheit,
            3 => Self::Kelvin,
            other => Self::Unrecognized(other),
        }
    }

    /// Schema enum number.
    pub fn number(self) -> i32 {
        match self {
            Self::Unspecified => 0,
            Self::Celsius => 1,
            Self::Fahrenheit => 2,
            Self::Kelvin => 3,
            Self::Unrecognized(number) => number,
        }
    }

    /// Canonical upper-case name, matching the schema's enum value names.
    pub fn name(self) -> &'static str {
        match self {
            Self::Unspecified => "TEMPERATURE_UNIT_UNSPECIFIED",
            Self::Celsius => "CELSIUS",
            Self::Fahrenheit => "FAHRENHEIT",
            Self::Kelvin => "KELVIN",
            Self::Unrecognized(_) => "UNRECOGNIZED",
        }
    }
}

/// Schema name, or the bare number for units outside the schema.
impl fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unrecognized(number) => write!(f, "{number}"),
            known => f.write_str(known.name()),
        }
    }
}

/// Parses the single-letter codes `C`, `F` and `K`, in either case.
impl FromStr for TemperatureUnit {
    type Err = TempconvError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "C" | "c" => Ok(Self::Celsius),
            "F" | "f" => Ok(Self::Fahrenheit),
            "K" | "k" => Ok(Self::Kelvin),
            other => Err(TempconvError::InvalidUnit(other.to_string())),
        }
    }
}

/// Which end of a conversion a unit sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitRole {
    Source,
    Destination,
}

impl fmt::Display for UnitRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Source => "source",
            Self::Destination => "destination",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_codes_in_either_case() {
        assert_eq!("C".parse::<TemperatureUnit>().unwrap(), TemperatureUnit::Celsius);
        assert_eq!("c".parse::<TemperatureUnit>().unwrap(), TemperatureUnit::Celsius);
        assert_eq!("F".parse::<TemperatureUnit>().unwrap(), TemperatureUnit::Fahrenheit);
        assert_eq!("f".parse::<TemperatureUnit>().unwrap(), TemperatureUnit::Fahrenheit);
        assert_eq!("K".parse::<TemperatureUnit>().unwrap(), TemperatureUnit::Kelvin);
        assert_eq!("k".parse::<TemperatureUnit>().unwrap(), TemperatureUnit::Kelvin);
    }

    #[test]
    fn rejects_everything_else() {
        for input in ["", "X", "CELSIUS", "celsius", " C", "C ", "CK", "0"] {
            let err = input.parse::<TemperatureUnit>().unwrap_err();
            assert!(
                matches!(err, TempconvError::InvalidUnit(ref s) if s == input),
                "expected InvalidUnit for {input:?}, got {err:?}"
            );
        }
    }

    #[test]
    fn invalid_unit_message_names_the_input() {
        let err = "X".parse::<TemperatureUnit>().unwrap_err();
        assert_eq!(err.to_string(), "invalid unit: X");
    }

    #[test]
    fn default_is_unspecified() {
        assert_eq!(TemperatureUnit::default(), TemperatureUnit::Unspecified);
    }

    #[test]
    fn display_uses_schema_names() {
        assert_eq!(TemperatureUnit::Unspecified.to_string(), "TEMPERATURE_UNIT_UNSPECIFIED");
        assert_eq!(TemperatureUnit::Kelvin.to_string(), "KELVIN");
        assert_eq!(TemperatureUnit::Unrecognized(9).to_string(), "9");
    }

    #[test]
    fn numbers_follow_the_schema() {
        for number in -2..6 {
            assert_eq!(TemperatureUnit::from_number(number).number(), number);
        }
        assert_eq!(TemperatureUnit::from_number(0), TemperatureUnit::Unspecified);
        assert_eq!(TemperatureUnit::from_number(3), TemperatureUnit::Kelvin);
        assert_eq!(TemperatureUnit::from_number(7), TemperatureUnit::Unrecognized(7));
    }
}
