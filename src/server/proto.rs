//! Protobuf types for the `tempconv.v1` package.
//!
//! Messages are declared with `prost` derives, field for field with
//! `proto/tempconv/v1/tempconv.proto`; tags and enum numbers must match
//! that file. The `TempConverter` client and server stubs are generated
//! by `build.rs`, as is the descriptor set behind server reflection.

/// `tempconv.v1.ConvertRequest`
#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct ConvertRequest {
    #[prost(double, tag = "1")]
    pub value: f64,
    #[prost(enumeration = "TemperatureUnit", tag = "2")]
    pub from_unit: i32,
    #[prost(enumeration = "TemperatureUnit", tag = "3")]
    pub to_unit: i32,
}

/// `tempconv.v1.ConvertResponse`
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ConvertResponse {
    #[prost(double, tag = "1")]
    pub converted_value: f64,
    #[prost(string, tag = "2")]
    pub formula_used: String,
}

/// `tempconv.v1.TemperatureUnit`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum TemperatureUnit {
    Unspecified = 0,
    Celsius = 1,
    Fahrenheit = 2,
    Kelvin = 3,
}

impl TemperatureUnit {
    /// Enum value name as it appears in the .proto file.
    pub fn as_str_name(&self) -> &'static str {
        match self {
            Self::Unspecified => "TEMPERATURE_UNIT_UNSPECIFIED",
            Self::Celsius => "CELSIUS",
            Self::Fahrenheit => "FAHRENHEIT",
            Self::Kelvin => "KELVIN",
        }
    }

    /// Enum value from its .proto name.
    pub fn from_str_name(value: &str) -> Option<Self> {
        match value {
            "TEMPERATURE_UNIT_UNSPECIFIED" => Some(Self::Unspecified),
            "CELSIUS" => Some(Self::Celsius),
            "FAHRENHEIT" => Some(Self::Fahrenheit),
            "KELVIN" => Some(Self::Kelvin),
            _ => None,
        }
    }
}

include!(concat!(env!("OUT_DIR"), "/tempconv.v1.TempConverter.rs"));

/// Encoded `FileDescriptorSet` for `tempconv/v1/tempconv.proto`, served by
/// gRPC reflection.
#[cfg(feature = "server")]
pub const FILE_DESCRIPTOR_SET: &[u8] = tonic::include_file_descriptor_set!("tempconv_descriptor");
