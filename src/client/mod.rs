//! Client library for connecting to tempconvd.
//!
//! Provides [`ServiceClient`], which implements
//! [`TemperatureConverter`](crate::TemperatureConverter) by forwarding calls
//! to a remote tempconvd instance over gRPC.

mod service_client;

pub use service_client::{DEFAULT_TIMEOUT, ServiceClient};
