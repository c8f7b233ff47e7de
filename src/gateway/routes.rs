//! Route registration for the HTTP gateway.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use tracing::debug;

use crate::telemetry;
use crate::traits::TemperatureConverter;

use super::{ApiError, ConvertBody, ConvertReply};

/// The one route the gateway serves: `POST` with a JSON body, or `GET`
/// with the same fields as query parameters.
pub const CONVERT_PATH: &str = "/v1/convert";

#[derive(Clone)]
struct GatewayState {
    upstream: Arc<dyn TemperatureConverter>,
}

/// Build the gateway router over `upstream`.
pub fn router(upstream: Arc<dyn TemperatureConverter>) -> Router {
    Router::new()
        .route(CONVERT_PATH, post(convert_json).get(convert_query))
        .with_state(GatewayState { upstream })
}

async fn convert_json(State(state): State<GatewayState>, body: Bytes) -> Response {
    transcode(&state, "POST", ConvertBody::from_json(&body)).await
}

async fn convert_query(
    State(state): State<GatewayState>,
    query: Result<Query<ConvertBody>, QueryRejection>,
) -> Response {
    let body = query
        .map(|Query(body)| body)
        .map_err(|rejection| ApiError::BadRequest(rejection.body_text()));
    transcode(&state, "GET", body).await
}

/// Forward a decoded request upstream and encode whatever comes back.
async fn transcode(
    state: &GatewayState,
    method: &'static str,
    body: Result<ConvertBody, ApiError>,
) -> Response {
    let result = match body {
        Ok(body) => state
            .upstream
            .convert(body.into())
            .await
            .map(ConvertReply::from)
            .map_err(ApiError::from),
        Err(err) => Err(err),
    };

    let response = match result {
        Ok(reply) => (StatusCode::OK, Json(reply)).into_response(),
        Err(err) => {
            debug!(method, error = ?err, "gateway request rejected");
            err.into_response()
        }
    };

    metrics::counter!(
        telemetry::GATEWAY_REQUESTS_TOTAL,
        "method" => method,
        "status" => response.status().as_u16().to_string()
    )
    .increment(1);

    response
}
