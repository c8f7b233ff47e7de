//! Gateway error responses.
//!
//! Errors are classified by gRPC status code first, then given the HTTP
//! status the protobuf HTTP mapping assigns to that code.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tonic::Code;
use tracing::warn;

use crate::TempconvError;

use super::ErrorBody;

/// A failed gateway request.
#[derive(Debug)]
pub enum ApiError {
    /// The HTTP request could not be decoded into a conversion request.
    BadRequest(String),
    /// The upstream converter failed.
    Upstream(TempconvError),
}

impl From<TempconvError> for ApiError {
    fn from(err: TempconvError) -> Self {
        ApiError::Upstream(err)
    }
}

impl ApiError {
    /// gRPC status code this error corresponds to.
    pub fn code(&self) -> Code {
        match self {
            ApiError::BadRequest(_) => Code::InvalidArgument,
            ApiError::Upstream(err) if err.is_client_error() => Code::InvalidArgument,
            ApiError::Upstream(TempconvError::Transport(_)) => Code::Unavailable,
            ApiError::Upstream(TempconvError::Timeout) => Code::DeadlineExceeded,
            ApiError::Upstream(TempconvError::Rpc { code, .. }) => Code::from_i32(*code),
            ApiError::Upstream(_) => Code::Internal,
        }
    }

    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        http_status(self.code())
    }

    fn message(&self) -> String {
        match self {
            ApiError::BadRequest(message) => message.clone(),
            ApiError::Upstream(err) => err.to_string(),
        }
    }
}

fn http_status(code: Code) -> StatusCode {
    match code {
        Code::Ok => StatusCode::OK,
        Code::Cancelled => StatusCode::from_u16(499).unwrap_or(StatusCode::BAD_REQUEST),
        Code::InvalidArgument | Code::FailedPrecondition | Code::OutOfRange => {
            StatusCode::BAD_REQUEST
        }
        Code::DeadlineExceeded => StatusCode::GATEWAY_TIMEOUT,
        Code::NotFound => StatusCode::NOT_FOUND,
        Code::AlreadyExists | Code::Aborted => StatusCode::CONFLICT,
        Code::PermissionDenied => StatusCode::FORBIDDEN,
        Code::Unauthenticated => StatusCode::UNAUTHORIZED,
        Code::ResourceExhausted => StatusCode::TOO_MANY_REQUESTS,
        Code::Unimplemented => StatusCode::NOT_IMPLEMENTED,
        Code::Unavailable => StatusCode::SERVICE_UNAVAILABLE,
        Code::Unknown | Code::Internal | Code::DataLoss => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorBody {
            error: self.message(),
            code: self.code() as i32,
        };
        if status.is_server_error() {
            warn!(%status, error = %body.error, "gateway upstream failed");
        }
        (status, Json(body)).into_response()
    }
}
