//! [`ServiceClient`]: a [`TemperatureConverter`] that talks to tempconvd over gRPC.
//!
//! All proto ↔ native type conversions are centralized in [`crate::server::convert`].

use std::time::Duration;

use async_trait::async_trait;
use tonic::transport::{Channel, Endpoint};
use tracing::debug;

use crate::server::proto;
use crate::server::proto::temp_converter_client::TempConverterClient;
use crate::types::{Conversion, ConvertRequest};
use crate::{Result, TempconvError, TemperatureConverter};

/// Default per-call deadline.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// A [`TemperatureConverter`] that calls a remote tempconvd.
#[derive(Debug, Clone)]
pub struct ServiceClient {
    inner: TempConverterClient<Channel>,
}

impl ServiceClient {
    /// Connect to a tempconvd server at the given address.
    ///
    /// `host:port` without a scheme is dialled as `http://host:port`.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let client = ServiceClient::connect("http://127.0.0.1:50051", DEFAULT_TIMEOUT).await?;
    /// ```
    pub async fn connect(addr: &str, timeout: Duration) -> Result<Self> {
        let endpoint = endpoint(addr, timeout)?;
        let channel = endpoint
            .connect()
            .await
            .map_err(|e| TempconvError::Transport(format!("failed to connect to {addr}: {e}")))?;
        Ok(Self::from_channel(channel))
    }

    /// Build a client whose connection is established on first use.
    ///
    /// Used for the gateway's loopback channel, which is created while the
    /// gRPC listener is still starting up.
    pub fn connect_lazy(addr: &str, timeout: Duration) -> Result<Self> {
        Ok(Self::from_channel(endpoint(addr, timeout)?.connect_lazy()))
    }

    pub fn from_channel(channel: Channel) -> Self {
        Self {
            inner: TempConverterClient::new(channel),
        }
    }
}

fn endpoint(addr: &str, timeout: Duration) -> Result<Endpoint> {
    let uri = if addr.contains("://") {
        addr.to_string()
    } else {
        format!("http://{addr}")
    };
    Endpoint::from_shared(uri)
        .map(|e| e.timeout(timeout).connect_timeout(timeout))
        .map_err(|e| TempconvError::Configuration(format!("invalid server address {addr:?}: {e}")))
}

/// Convert [`tonic::Status`] to [`TempconvError`].
fn from_status(status: tonic::Status) -> TempconvError {
    match status.code() {
        tonic::Code::InvalidArgument => TempconvError::InvalidInput(status.message().to_string()),
        tonic::Code::Unavailable => TempconvError::Transport(status.message().to_string()),
        tonic::Code::DeadlineExceeded => TempconvError::Timeout,
        // tonic 0.13 reports an expired `Endpoint::timeout` as `Cancelled`
        // with the `TimeoutExpired` display text; the status carries no
        // typed marker of its own.
        tonic::Code::Cancelled if status.message().contains("Timeout expired") => {
            TempconvError::Timeout
        }
        code => TempconvError::Rpc {
            code: code as i32,
            message: status.message().to_string(),
        },
    }
}

#[async_trait]
impl TemperatureConverter for ServiceClient {
    async fn convert(&self, request: ConvertRequest) -> Result<Conversion> {
        let request: proto::ConvertRequest = request.into();
        let response = self
            .inner
            .clone()
            .convert_temperature(request)
            .await
            .map_err(from_status)?;
        let conversion: Conversion = response.into_inner().into();
        debug!(formula = %conversion.formula_used, "conversion received");
        Ok(conversion)
    }
}
