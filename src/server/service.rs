//! gRPC service implementation.

use async_trait::async_trait;
use tonic::{Request, Response, Status};
use tracing::debug;

use crate::conversion;
use crate::telemetry;
use crate::traits::TemperatureConverter;
use crate::types::{Conversion, ConvertRequest, TemperatureUnit};
use crate::{Result, TempconvError};

use super::proto;
use super::proto::temp_converter_server::{TempConverter, TempConverterServer};

/// The `tempconv.v1.TempConverter` service.
///
/// Stateless: every call runs the conversion on the request alone, so one
/// value can back the RPC listener and the in-process gateway at once.
#[derive(Debug, Clone, Copy, Default)]
pub struct TempConverterService;

impl TempConverterService {
    pub fn new() -> Self {
        Self
    }

    /// Wrap the service for registration with a tonic router.
    pub fn into_server(self) -> TempConverterServer<Self> {
        TempConverterServer::new(self)
    }

    /// Handle a request as it arrived on the wire.
    pub fn handle(&self, request: proto::ConvertRequest) -> Result<proto::ConvertResponse> {
        let result = conversion::convert_request(&ConvertRequest::from(request));
        record(
            TemperatureUnit::from_number(request.from_unit).name(),
            TemperatureUnit::from_number(request.to_unit).name(),
            &result,
        );
        result.map(Into::into)
    }
}

fn record(from: &'static str, to: &'static str, result: &Result<Conversion>) {
    let status = if result.is_ok() { "ok" } else { "error" };
    metrics::counter!(telemetry::CONVERSIONS_TOTAL, "from" => from, "to" => to, "status" => status)
        .increment(1);
}

/// Map a conversion failure to a gRPC status.
///
/// Rejected input is always the caller's fault, so it is reported as
/// `INVALID_ARGUMENT` with the original message, never as `INTERNAL`.
pub fn to_status(err: TempconvError) -> Status {
    if err.is_client_error() {
        Status::invalid_argument(err.to_string())
    } else {
        Status::internal(err.to_string())
    }
}

#[tonic::async_trait]
impl TempConverter for TempConverterService {
    async fn convert_temperature(
        &self,
        request: Request<proto::ConvertRequest>,
    ) -> std::result::Result<Response<proto::ConvertResponse>, Status> {
        let request = request.into_inner();
        match self.handle(request) {
            Ok(response) => {
                debug!(
                    from = request.from_unit,
                    to = request.to_unit,
                    formula = %response.formula_used,
                    "conversion served"
                );
                Ok(Response::new(response))
            }
            Err(err) => {
                debug!(error = %err, "conversion rejected");
                Err(to_status(err))
            }
        }
    }
}

/// In-process use of the handler, without a network hop.
#[async_trait]
impl TemperatureConverter for TempConverterService {
    async fn convert(&self, request: ConvertRequest) -> Result<Conversion> {
        self.handle(request.into()).map(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{TemperatureUnit, UnitRole};

    #[tokio::test]
    async fn grpc_call_converts() {
        let service = TempConverterService::new();
        let response = service
            .convert_temperature(Request::new(proto::ConvertRequest {
                value: 0.0,
                from_unit: proto::TemperatureUnit::Celsius as i32,
                to_unit: proto::TemperatureUnit::Fahrenheit as i32,
            }))
            .await
            .unwrap()
            .into_inner();
        assert_eq!(response.converted_value, 32.0);
        assert_eq!(response.formula_used, "F = (C × 9/5) + 32");
    }

    #[tokio::test]
    async fn grpc_call_rejects_unspecified_as_invalid_argument() {
        let service = TempConverterService::new();
        let status = service
            .convert_temperature(Request::new(proto::ConvertRequest {
                value: 10.0,
                from_unit: proto::TemperatureUnit::Unspecified as i32,
                to_unit: proto::TemperatureUnit::Celsius as i32,
            }))
            .await
            .unwrap_err();
        assert_eq!(status.code(), tonic::Code::InvalidArgument);
        assert_eq!(status.message(), "unsupported source unit");
    }

    #[tokio::test]
    async fn grpc_call_rejects_out_of_range_destination() {
        let service = TempConverterService::new();
        let status = service
            .convert_temperature(Request::new(proto::ConvertRequest {
                value: 10.0,
                from_unit: proto::TemperatureUnit::Kelvin as i32,
                to_unit: 17,
            }))
            .await
            .unwrap_err();
        assert_eq!(status.code(), tonic::Code::InvalidArgument);
        assert_eq!(status.message(), "unsupported destination unit");
    }

    #[test]
    fn equal_unrecognized_units_pass_through() {
        let response = TempConverterService::new()
            .handle(proto::ConvertRequest {
                value: 5.0,
                from_unit: 9,
                to_unit: 9,
            })
            .unwrap();
        assert_eq!(response.converted_value, 5.0);
        assert_eq!(response.formula_used, "same unit, no conversion");
    }

    #[test]
    fn unspecified_source_wins_over_unrecognized_destination() {
        let err = TempConverterService::new()
            .handle(proto::ConvertRequest {
                value: 5.0,
                from_unit: 0,
                to_unit: 9,
            })
            .unwrap_err();
        assert_eq!(err.to_string(), "unsupported source unit");
    }

    #[tokio::test]
    async fn in_process_conversion_matches_wire_path() {
        let service = TempConverterService::new();
        let conversion = TemperatureConverter::convert(
            &service,
            ConvertRequest::new(100.0, TemperatureUnit::Fahrenheit, TemperatureUnit::Celsius),
        )
        .await
        .unwrap();
        assert_eq!(conversion.converted_value, 37.77777777777778);
        assert_eq!(conversion.formula_used, "C = source converted to celsius");
    }

    #[test]
    fn non_client_errors_are_internal() {
        assert_eq!(to_status(TempconvError::Timeout).code(), tonic::Code::Internal);
        assert_eq!(
            to_status(TempconvError::UnsupportedUnit(UnitRole::Destination)).code(),
            tonic::Code::InvalidArgument
        );
    }
}
