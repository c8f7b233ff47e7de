//! Conversions between tempconv native types and protobuf types.
//!
//! Server-side: proto → native for requests, native → proto for responses.
//! Client-side: the reverse directions, used by [`crate::client::ServiceClient`].

use crate::types::{Conversion, ConvertRequest, TemperatureUnit};

use super::proto;

// =============================================================================
// Units
// =============================================================================

impl From<proto::TemperatureUnit> for TemperatureUnit {
    fn from(p: proto::TemperatureUnit) -> Self {
        match p {
            proto::TemperatureUnit::Unspecified => TemperatureUnit::Unspecified,
            proto::TemperatureUnit::Celsius => TemperatureUnit::Celsius,
            proto::TemperatureUnit::Fahrenheit => TemperatureUnit::Fahrenheit,
            proto::TemperatureUnit::Kelvin => TemperatureUnit::Kelvin,
        }
    }
}

// =============================================================================
// From Proto → Native (incoming requests, incoming responses)
// =============================================================================

/// Enum numbers outside the schema decode to [`TemperatureUnit::Unrecognized`];
/// whether they are usable is the conversion's call.
impl From<proto::ConvertRequest> for ConvertRequest {
    fn from(p: proto::ConvertRequest) -> Self {
        ConvertRequest {
            value: p.value,
            from_unit: TemperatureUnit::from_number(p.from_unit),
            to_unit: TemperatureUnit::from_number(p.to_unit),
        }
    }
}

impl From<proto::ConvertResponse> for Conversion {
    fn from(p: proto::ConvertResponse) -> Self {
        Conversion {
            converted_value: p.converted_value,
            formula_used: p.formula_used,
        }
    }
}

// =============================================================================
// From Native → Proto (outgoing requests, outgoing responses)
// =============================================================================

impl From<ConvertRequest> for proto::ConvertRequest {
    fn from(request: ConvertRequest) -> Self {
        proto::ConvertRequest {
            value: request.value,
            from_unit: request.from_unit.number(),
            to_unit: request.to_unit.number(),
        }
    }
}

impl From<Conversion> for proto::ConvertResponse {
    fn from(conversion: Conversion) -> Self {
        proto::ConvertResponse {
            converted_value: conversion.converted_value,
            formula_used: conversion.formula_used,
        }
    }
}
