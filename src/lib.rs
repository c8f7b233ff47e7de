//! tempconv - temperature conversion over gRPC, with a JSON/HTTP gateway
//!
//! The conversion itself is a pure function ([`conversion::convert`]). The
//! `server` feature serves it as the `tempconv.v1.TempConverter` gRPC
//! service and, on a second port, as a JSON/HTTP gateway that transcodes
//! into the same handler. The `client` feature provides [`client::ServiceClient`]
//! and the `tempconv` command-line tool.
//!
//! # Example
//!
//! ```rust
//! use tempconv::{TemperatureUnit, conversion};
//!
//! let (value, formula) =
//!     conversion::convert(212.0, TemperatureUnit::Fahrenheit, TemperatureUnit::Celsius)?;
//! assert_eq!(value, 100.0);
//! assert_eq!(formula.as_str(), "C = source converted to celsius");
//! # Ok::<(), tempconv::TempconvError>(())
//! ```
//!
//! # Client Example (requires `client` feature)
//!
//! ```rust,no_run
//! # #[cfg(feature = "client")]
//! # async fn demo() -> tempconv::Result<()> {
//! use tempconv::client::{DEFAULT_TIMEOUT, ServiceClient};
//! use tempconv::{ConvertRequest, TemperatureConverter, TemperatureUnit};
//!
//! let client = ServiceClient::connect("http://127.0.0.1:50051", DEFAULT_TIMEOUT).await?;
//! let conversion = client
//!     .convert(ConvertRequest::new(0.0, TemperatureUnit::Celsius, TemperatureUnit::Kelvin))
//!     .await?;
//! println!("{} ({})", conversion.converted_value, conversion.formula_used);
//! # Ok(())
//! # }
//! ```

#[cfg(feature = "client")]
pub mod client;
pub mod conversion;
pub mod error;
#[cfg(feature = "server")]
pub mod gateway;
#[cfg(any(feature = "server", feature = "client"))]
pub mod server;
pub mod telemetry;
pub mod traits;
pub mod types;
mod version;

// Re-export main types at crate root
pub use error::{Result, TempconvError};
pub use traits::TemperatureConverter;
pub use types::{Conversion, ConvertRequest, Formula, TemperatureUnit, UnitRole};
pub use version::{BuildInfo, PKG_VERSION, version_string};
