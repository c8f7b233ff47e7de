//! tempconv error types

use crate::types::UnitRole;

/// tempconv error types
#[derive(Debug, thiserror::Error)]
pub enum TempconvError {
    // Client input errors
    #[error("invalid unit: {0}")]
    InvalidUnit(String),

    /// A conversion endpoint is `UNSPECIFIED` or outside the known unit set.
    #[error("unsupported {0} unit")]
    UnsupportedUnit(UnitRole),

    /// The remote service rejected the request as an invalid argument.
    #[error("{0}")]
    InvalidInput(String),

    // Transport errors
    #[error("transport error: {0}")]
    Transport(String),

    #[error("request timed out")]
    Timeout,

    /// Any other non-OK status returned by the remote service.
    #[error("rpc error (code {code}): {message}")]
    Rpc { code: i32, message: String },

    // Configuration errors
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl TempconvError {
    /// Whether the error was caused by the caller's input rather than the
    /// service or the network. Client errors are reported, never retried.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidUnit(_) | Self::UnsupportedUnit(_) | Self::InvalidInput(_)
        )
    }
}

/// Result type alias for tempconv operations
pub type Result<T> = std::result::Result<T, TempconvError>;
