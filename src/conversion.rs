//! The conversion arithmetic.
//!
//! Every conversion pivots through Celsius: the source value is first
//! brought to Celsius, then taken to the destination scale. The pivot is
//! kept even where a direct formula exists so results round the same way
//! on every path.

use crate::types::{Conversion, ConvertRequest, Formula, TemperatureUnit, UnitRole};
use crate::{Result, TempconvError};

const KELVIN_OFFSET: f64 = 273.15;

/// Convert `value` from `from` to `to`.
///
/// Units are compared by enum number before any validation, so identical
/// units pass the value through unchanged even when the unit itself could
/// not be converted. Otherwise the source is checked before the destination.
pub fn convert(value: f64, from: TemperatureUnit, to: TemperatureUnit) -> Result<(f64, Formula)> {
    if from.number() == to.number() {
        return Ok((value, Formula::SameUnit));
    }

    let celsius = match from {
        TemperatureUnit::Celsius => value,
        TemperatureUnit::Fahrenheit => (value - 32.0) * 5.0 / 9.0,
        TemperatureUnit::Kelvin => value - KELVIN_OFFSET,
        TemperatureUnit::Unspecified | TemperatureUnit::Unrecognized(_) => {
            return Err(TempconvError::UnsupportedUnit(UnitRole::Source));
        }
    };

    match to {
        TemperatureUnit::Celsius => Ok((celsius, Formula::ToCelsius)),
        TemperatureUnit::Fahrenheit => Ok((celsius * 9.0 / 5.0 + 32.0, Formula::ToFahrenheit)),
        TemperatureUnit::Kelvin => Ok((celsius + KELVIN_OFFSET, Formula::ToKelvin)),
        TemperatureUnit::Unspecified | TemperatureUnit::Unrecognized(_) => {
            Err(TempconvError::UnsupportedUnit(UnitRole::Destination))
        }
    }
}

/// [`convert`] over a whole request.
pub fn convert_request(request: &ConvertRequest) -> Result<Conversion> {
    let (value, formula) = convert(request.value, request.from_unit, request.to_unit)?;
    Ok(Conversion::new(value, formula))
}

#[cfg(test)]
mod tests {
    use super::*;

    use TemperatureUnit::{Celsius, Fahrenheit, Kelvin, Unrecognized, Unspecified};

    #[test]
    fn freezing_point_to_fahrenheit() {
        assert_eq!(convert(0.0, Celsius, Fahrenheit).unwrap(), (32.0, Formula::ToFahrenheit));
    }

    #[test]
    fn boiling_point_to_celsius() {
        assert_eq!(convert(212.0, Fahrenheit, Celsius).unwrap(), (100.0, Formula::ToCelsius));
    }

    #[test]
    fn freezing_point_to_kelvin() {
        assert_eq!(convert(0.0, Celsius, Kelvin).unwrap(), (273.15, Formula::ToKelvin));
    }

    #[test]
    fn kelvin_to_fahrenheit_pivots_through_celsius() {
        let (value, formula) = convert(373.15, Kelvin, Fahrenheit).unwrap();
        let expected = (373.15 - 273.15) * 9.0 / 5.0 + 32.0;
        assert_eq!(value, expected);
        assert_eq!(formula, Formula::ToFahrenheit);
    }

    #[test]
    fn unrounded_result_is_preserved() {
        let (value, _) = convert(100.0, Fahrenheit, Celsius).unwrap();
        assert_eq!(value, 37.77777777777778);
    }

    #[test]
    fn same_unit_short_circuits_even_for_nonsense_values() {
        assert_eq!(convert(-40.0, Kelvin, Kelvin).unwrap(), (-40.0, Formula::SameUnit));
        assert_eq!(convert(1.5, Unspecified, Unspecified).unwrap(), (1.5, Formula::SameUnit));
        let (nan, formula) = convert(f64::NAN, Celsius, Celsius).unwrap();
        assert!(nan.is_nan());
        assert_eq!(formula, Formula::SameUnit);
    }

    #[test]
    fn same_unrecognized_number_short_circuits() {
        assert_eq!(convert(5.0, Unrecognized(9), Unrecognized(9)).unwrap(), (5.0, Formula::SameUnit));
        // A stray number equal to a schema value is the same unit.
        assert_eq!(convert(5.0, Unrecognized(1), Celsius).unwrap(), (5.0, Formula::SameUnit));
    }

    #[test]
    fn source_is_checked_before_destination() {
        let err = convert(1.0, Unspecified, Unrecognized(9)).unwrap_err();
        assert!(matches!(err, TempconvError::UnsupportedUnit(UnitRole::Source)));
        let err = convert(1.0, Unrecognized(9), Unspecified).unwrap_err();
        assert!(matches!(err, TempconvError::UnsupportedUnit(UnitRole::Source)));
        let err = convert(1.0, Celsius, Unrecognized(-1)).unwrap_err();
        assert!(matches!(err, TempconvError::UnsupportedUnit(UnitRole::Destination)));
    }

    #[test]
    fn unspecified_source_is_rejected() {
        for x in [0.0, -273.15, 100.0, f64::MAX, f64::INFINITY, f64::NAN] {
            for to in TemperatureUnit::CONVERTIBLE {
                let err = convert(x, Unspecified, to).unwrap_err();
                assert!(matches!(err, TempconvError::UnsupportedUnit(UnitRole::Source)));
                assert_eq!(err.to_string(), "unsupported source unit");
            }
        }
    }

    #[test]
    fn unspecified_destination_is_rejected() {
        for from in TemperatureUnit::CONVERTIBLE {
            let err = convert(10.0, from, Unspecified).unwrap_err();
            assert!(matches!(err, TempconvError::UnsupportedUnit(UnitRole::Destination)));
            assert_eq!(err.to_string(), "unsupported destination unit");
        }
    }

    #[test]
    fn convert_request_builds_conversion() {
        let request = ConvertRequest::new(0.0, Celsius, Kelvin);
        let conversion = convert_request(&request).unwrap();
        assert_eq!(conversion.converted_value, 273.15);
        assert_eq!(conversion.formula_used, "K = C + 273.15");
    }
}
