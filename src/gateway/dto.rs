//! JSON shapes for the HTTP gateway.
//!
//! Field names follow the protobuf JSON mapping of `tempconv.v1`:
//! lowerCamelCase on output, and either lowerCamelCase or the original
//! snake_case on input. Units are written by enum value name (`"CELSIUS"`)
//! or number (`1`); numbers outside the schema are forwarded as they are.
//! Doubles that are not finite travel as `"NaN"`, `"Infinity"` and
//! `"-Infinity"`.

use std::fmt;

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};

use crate::server::proto;
use crate::types::{Conversion, ConvertRequest, TemperatureUnit};

use super::ApiError;

/// Request body (POST) or query string (GET).
///
/// Absent fields take their zero value, like an unset proto3 field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct ConvertBody {
    #[serde(deserialize_with = "deserialize_double")]
    pub value: f64,
    #[serde(alias = "from_unit", deserialize_with = "deserialize_unit")]
    pub from_unit: TemperatureUnit,
    #[serde(alias = "to_unit", deserialize_with = "deserialize_unit")]
    pub to_unit: TemperatureUnit,
}

impl ConvertBody {
    /// Decode a POST body. An empty body is an all-defaults request.
    pub fn from_json(body: &[u8]) -> Result<Self, ApiError> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }
        serde_json::from_slice(body)
            .map_err(|e| ApiError::BadRequest(format!("invalid request body: {e}")))
    }
}

impl From<ConvertBody> for ConvertRequest {
    fn from(body: ConvertBody) -> Self {
        ConvertRequest::new(body.value, body.from_unit, body.to_unit)
    }
}

/// Successful response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConvertReply {
    #[serde(serialize_with = "serialize_double", deserialize_with = "deserialize_double")]
    pub converted_value: f64,
    pub formula_used: String,
}

impl From<Conversion> for ConvertReply {
    fn from(conversion: Conversion) -> Self {
        Self {
            converted_value: conversion.converted_value,
            formula_used: conversion.formula_used,
        }
    }
}

/// Error response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    /// gRPC status code number.
    pub code: i32,
}

fn deserialize_unit<'de, D>(deserializer: D) -> Result<TemperatureUnit, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(UnitVisitor)
}

struct UnitVisitor;

impl<'de> Visitor<'de> for UnitVisitor {
    type Value = TemperatureUnit;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a TemperatureUnit name or number")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        if let Some(unit) = proto::TemperatureUnit::from_str_name(v) {
            return Ok(unit.into());
        }
        // Query strings carry numbers as text.
        match v.parse::<i64>() {
            Ok(n) => self.visit_i64(n),
            Err(_) => Err(E::custom(format!(
                "invalid value for enum TemperatureUnit: {v:?}"
            ))),
        }
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        i32::try_from(v)
            .map(TemperatureUnit::from_number)
            .map_err(|_| E::custom(format!("invalid value for enum TemperatureUnit: {v}")))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        i32::try_from(v)
            .map(TemperatureUnit::from_number)
            .map_err(|_| E::custom(format!("invalid value for enum TemperatureUnit: {v}")))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(TemperatureUnit::Unspecified)
    }
}

fn serialize_double<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if value.is_nan() {
        serializer.serialize_str("NaN")
    } else if value.is_infinite() {
        serializer.serialize_str(if *value > 0.0 { "Infinity" } else { "-Infinity" })
    } else {
        serializer.serialize_f64(*value)
    }
}

fn deserialize_double<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(DoubleVisitor)
}

struct DoubleVisitor;

impl<'de> Visitor<'de> for DoubleVisitor {
    type Value = f64;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a number, a numeric string, \"NaN\", \"Infinity\" or \"-Infinity\"")
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        Ok(v)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(v as f64)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(v as f64)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        match v {
            "NaN" => Ok(f64::NAN),
            "Infinity" => Ok(f64::INFINITY),
            "-Infinity" => Ok(f64::NEG_INFINITY),
            // Other spellings of the non-finite values ("inf", "nan") are not accepted.
            _ => v
                .parse::<f64>()
                .ok()
                .filter(|n| n.is_finite())
                .ok_or_else(|| E::custom(format!("invalid value for double: {v:?}"))),
        }
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(0.0)
    }
}
