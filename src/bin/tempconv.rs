//! tempconv: command-line client for tempconvd.
//!
//! Sends one conversion request and prints the result.

use std::time::Duration;

use clap::Parser;
use tempconv::client::ServiceClient;
use tempconv::{ConvertRequest, TemperatureConverter, TemperatureUnit};

/// tempconv CLI client
#[derive(Parser)]
#[command(name = "tempconv")]
#[command(version = tempconv::PKG_VERSION)]
#[command(about = "Convert a temperature using a tempconvd server")]
struct Args {
    /// Server address (`host:port` or a full URI)
    #[arg(
        short,
        long,
        env = "TEMPCONV_ADDRESS",
        default_value = "http://localhost:50051"
    )]
    address: String,

    /// Input temperature value
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    value: f64,

    /// Source unit: C, F or K
    #[arg(long, default_value = "C")]
    from: String,

    /// Destination unit: C, F or K
    #[arg(long, default_value = "F")]
    to: String,

    /// Request deadline in seconds
    #[arg(long, default_value_t = 5)]
    timeout_secs: u64,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialise tracing (default: warn for CLI; override with RUST_LOG).
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();

    // Bad unit codes fail before any connection is made.
    let from_unit: TemperatureUnit = args.from.parse()?;
    let to_unit: TemperatureUnit = args.to.parse()?;

    let timeout = Duration::from_secs(args.timeout_secs);
    let client = ServiceClient::connect(&args.address, timeout).await?;
    let conversion = client
        .convert(ConvertRequest::new(args.value, from_unit, to_unit))
        .await?;

    println!("Converted value: {:.4}", conversion.converted_value);
    println!("Formula: {}", conversion.formula_used);

    Ok(())
}
