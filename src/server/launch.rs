//! Process composition: the gRPC listener plus, optionally, the HTTP gateway.
//!
//! Startup is all-or-nothing. The gRPC port is bound first; if that fails
//! nothing else is attempted. The gRPC listener then serves from a
//! background task while the gateway's upstream is set up and the HTTP port
//! is bound. A failure to bind HTTP stops the gRPC task and is returned.
//!
//! Once serving, the first listener to fail ends [`Listeners::serve`] with
//! its error. There is no graceful shutdown: dropping the process drops
//! in-flight requests.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use tokio::task::JoinHandle;
use tracing::info;

use crate::client::ServiceClient;
use crate::gateway::{self, HttpListener};
use crate::traits::TemperatureConverter;
use crate::{Result, TempconvError};

use super::config::{Config, GatewayUpstream};
use super::{RpcListener, TempConverterService};

/// Both listeners, bound and ready to serve.
#[derive(Debug)]
pub struct Listeners {
    rpc_addr: SocketAddr,
    rpc_task: JoinHandle<Result<()>>,
    gateway: Option<(HttpListener, Router)>,
}

impl Listeners {
    /// Bind every configured listener and start the gRPC one.
    pub async fn start(config: &Config) -> Result<Self> {
        let grpc_addr = config.server.grpc_addr()?;
        let http_addr = if config.gateway.enabled {
            Some(config.server.http_addr()?)
        } else {
            None
        };
        let timeout = config.server.limits.request_timeout();
        let service = TempConverterService::new();

        let rpc = RpcListener::bind(grpc_addr).await?;
        let rpc_addr = rpc.local_addr();
        let upstream = match http_addr {
            Some(_) => Some(upstream(config.gateway.upstream, &rpc, service, timeout)?),
            None => None,
        };
        let rpc_task = tokio::spawn(rpc.serve(service, timeout));

        let gateway = match (http_addr, upstream) {
            (Some(addr), Some(upstream)) => match HttpListener::bind(addr).await {
                Ok(http) => {
                    info!(upstream = ?config.gateway.upstream, "gateway upstream ready");
                    Some((http, gateway::router(upstream)))
                }
                Err(err) => {
                    rpc_task.abort();
                    return Err(err);
                }
            },
            _ => {
                info!("gateway disabled, serving gRPC only");
                None
            }
        };

        Ok(Self {
            rpc_addr,
            rpc_task,
            gateway,
        })
    }

    /// Bound gRPC address.
    pub fn rpc_addr(&self) -> SocketAddr {
        self.rpc_addr
    }

    /// Bound HTTP address, if the gateway is enabled.
    pub fn http_addr(&self) -> Option<SocketAddr> {
        self.gateway.as_ref().map(|(http, _)| http.local_addr())
    }

    /// Serve until a listener fails.
    ///
    /// The HTTP gateway is served on the calling task; without one, the
    /// caller waits on the gRPC task.
    pub async fn serve(self) -> Result<()> {
        let rpc_task = self.rpc_task;
        let Some((http, router)) = self.gateway else {
            return joined(rpc_task.await);
        };

        tokio::select! {
            result = rpc_task => joined(result),
            result = http.serve(router) => result,
        }
    }
}

fn joined(result: std::result::Result<Result<()>, tokio::task::JoinError>) -> Result<()> {
    result.map_err(|e| TempconvError::Transport(format!("gRPC listener task failed: {e}")))?
}

fn upstream(
    mode: GatewayUpstream,
    rpc: &RpcListener,
    service: TempConverterService,
    timeout: Duration,
) -> Result<Arc<dyn TemperatureConverter>> {
    Ok(match mode {
        GatewayUpstream::Loopback => {
            Arc::new(ServiceClient::connect_lazy(&rpc.loopback_uri(), timeout)?)
        }
        GatewayUpstream::InProcess => Arc::new(service),
    })
}

/// Start and serve everything `config` describes.
pub async fn run(config: &Config) -> Result<()> {
    let listeners = Listeners::start(config).await?;
    info!(
        grpc = %listeners.rpc_addr(),
        http = ?listeners.http_addr(),
        "tempconvd serving"
    );
    listeners.serve().await
}
