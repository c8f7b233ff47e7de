//! gRPC server and shared proto types.
//!
//! This module provides:
//! - Protobuf types and generated service stubs (`proto`) used by both server and client
//! - Type conversions between native and proto types (`convert`)
//! - The gRPC service implementation (`service`, server-only)
//! - The RPC listener (`listener`, server-only)
//! - Configuration types (`config`, server-only)
//! - Process composition of the RPC and HTTP listeners (`launch`, server-only)

#[cfg(feature = "server")]
pub mod config;
pub mod convert;
#[cfg(feature = "server")]
pub mod launch;
#[cfg(feature = "server")]
pub mod listener;
pub mod proto;
#[cfg(feature = "server")]
pub mod service;

#[cfg(feature = "server")]
pub use listener::RpcListener;
#[cfg(feature = "server")]
pub use service::TempConverterService;
