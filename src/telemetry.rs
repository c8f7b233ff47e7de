//! Telemetry metric name constants.
//!
//! Consumers install their own `metrics` recorder (e.g. prometheus, statsd);
//! without a recorder installed, all metric calls are no-ops.
//!
//! All metrics are prefixed with `tempconv_`. Counters end in `_total`.

/// Conversions attempted by the service handler.
///
/// Labels: `from`, `to` (unit names), `status` ("ok" | "error").
pub const CONVERSIONS_TOTAL: &str = "tempconv_conversions_total";

/// Requests answered by the HTTP gateway.
///
/// Labels: `method`, `status` (HTTP status code).
pub const GATEWAY_REQUESTS_TOTAL: &str = "tempconv_gateway_requests_total";
