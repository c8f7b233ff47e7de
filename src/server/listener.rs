//! The gRPC listener.

use std::net::SocketAddr;
use std::time::Duration;

use tokio::net::TcpListener;
use tokio_stream::wrappers::TcpListenerStream;
use tonic::transport::Server;
use tracing::info;

use crate::{Result, TempconvError};

use super::{TempConverterService, proto};

/// A bound, not yet serving, gRPC listener.
///
/// Binding and serving are split so a caller learns about an unusable
/// port before anything else starts.
#[derive(Debug)]
pub struct RpcListener {
    listener: TcpListener,
    local_addr: SocketAddr,
}

impl RpcListener {
    /// Bind the gRPC port. Failure is not retried.
    pub async fn bind(addr: SocketAddr) -> Result<Self> {
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            TempconvError::Transport(format!("failed to bind gRPC listener on {addr}: {e}"))
        })?;
        let local_addr = listener.local_addr().map_err(|e| {
            TempconvError::Transport(format!("failed to read gRPC listener address: {e}"))
        })?;
        info!(addr = %local_addr, transport = "tcp", "gRPC listener bound");
        Ok(Self {
            listener,
            local_addr,
        })
    }

    /// Address actually bound, with any port 0 resolved.
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Address a process on this host should dial to reach the listener.
    /// Wildcard binds are reached through the loopback interface.
    pub fn loopback_uri(&self) -> String {
        let mut addr = self.local_addr;
        if addr.ip().is_unspecified() {
            let loopback = match addr {
                SocketAddr::V4(_) => std::net::Ipv4Addr::LOCALHOST.into(),
                SocketAddr::V6(_) => std::net::Ipv6Addr::LOCALHOST.into(),
            };
            addr.set_ip(loopback);
        }
        format!("http://{addr}")
    }

    /// Serve `service`, plus server reflection, until the server fails.
    /// Each RPC is bounded by `request_timeout`.
    pub async fn serve(self, service: TempConverterService, request_timeout: Duration) -> Result<()> {
        let reflection_v1 = reflection().build_v1().map_err(reflection_error)?;
        let reflection_v1alpha = reflection().build_v1alpha().map_err(reflection_error)?;
        let incoming = TcpListenerStream::new(self.listener);
        Server::builder()
            .timeout(request_timeout)
            .add_service(reflection_v1)
            .add_service(reflection_v1alpha)
            .add_service(service.into_server())
            .serve_with_incoming(incoming)
            .await
            .map_err(|e| TempconvError::Transport(format!("gRPC server failed: {e}")))
    }
}

fn reflection() -> tonic_reflection::server::Builder<'static> {
    tonic_reflection::server::Builder::configure()
        .register_encoded_file_descriptor_set(proto::FILE_DESCRIPTOR_SET)
}

fn reflection_error(err: tonic_reflection::server::Error) -> TempconvError {
    TempconvError::Configuration(format!("invalid reflection descriptor: {err}"))
}
