//! tempconvd: the tempconv daemon.
//!
//! Serves the `tempconv.v1.TempConverter` gRPC service and, unless disabled,
//! the JSON/HTTP gateway in front of it.

use clap::Parser;
use tracing::{error, info};

use tempconv::server::config::Config;
use tempconv::server::launch;

/// tempconv daemon, temperature conversion service.
#[derive(Parser)]
#[command(name = "tempconvd")]
#[command(version = tempconv::PKG_VERSION)]
#[command(about = "Temperature conversion gRPC service with a JSON/HTTP gateway")]
struct Args {
    /// Path to configuration file.
    #[arg(short, long)]
    config: Option<std::path::PathBuf>,

    /// gRPC listener port (overrides config and GRPC_PORT).
    #[arg(long)]
    grpc_port: Option<u16>,

    /// HTTP gateway port (overrides config and PORT).
    #[arg(long)]
    http_port: Option<u16>,

    /// Serve gRPC only.
    #[arg(long)]
    no_gateway: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialise tracing (default: info; override with RUST_LOG).
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let mut config = Config::load(args.config.as_deref())?;
    config.apply_env()?;
    if let Some(port) = args.grpc_port {
        config.server.set_grpc_port(port)?;
    }
    if let Some(port) = args.http_port {
        config.server.set_http_port(port)?;
    }
    if args.no_gateway {
        config.gateway.enabled = false;
    }

    info!(
        version = %tempconv::version_string(),
        grpc = %config.server.grpc_address,
        http = %config.server.http_address,
        gateway = config.gateway.enabled,
        "tempconvd starting"
    );

    if let Err(err) = launch::run(&config).await {
        error!(error = %err, "tempconvd stopped");
        return Err(err.into());
    }

    Ok(())
}
