//! JSON/HTTP gateway for the `TempConverter` service.
//!
//! The gateway only translates: it decodes JSON or query parameters into a
//! [`ConvertRequest`](crate::ConvertRequest), hands it to a
//! [`TemperatureConverter`](crate::TemperatureConverter) and encodes the
//! result. Which converter sits behind it (the loopback gRPC client or the
//! service handler itself) is decided by the caller of [`router`].

mod dto;
mod error;
mod routes;

use std::net::SocketAddr;

use axum::Router;
use tokio::net::TcpListener;
use tracing::info;

use crate::{Result, TempconvError};

pub use dto::{ConvertBody, ConvertReply, ErrorBody};
pub use error::ApiError;
pub use routes::{CONVERT_PATH, router};

/// A bound, not yet serving, HTTP listener.
#[derive(Debug)]
pub struct HttpListener {
    listener: TcpListener,
    local_addr: SocketAddr,
}

impl HttpListener {
    pub async fn bind(addr: SocketAddr) -> Result<Self> {
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            TempconvError::Transport(format!("failed to bind HTTP listener on {addr}: {e}"))
        })?;
        let local_addr = listener.local_addr().map_err(|e| {
            TempconvError::Transport(format!("failed to read HTTP listener address: {e}"))
        })?;
        info!(addr = %local_addr, "HTTP gateway bound");
        Ok(Self {
            listener,
            local_addr,
        })
    }

    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Serve `router` until the server fails.
    pub async fn serve(self, router: Router) -> Result<()> {
        axum::serve(self.listener, router)
            .await
            .map_err(|e| TempconvError::Transport(format!("HTTP gateway failed: {e}")))
    }
}
