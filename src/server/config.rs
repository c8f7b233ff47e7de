//! Configuration loading for tempconvd.
//!
//! Configuration is loaded from TOML files with the following resolution order:
//! 1. `--config <path>` (CLI flag)
//! 2. `~/.tempconv/config.toml` (user)
//! 3. `/etc/tempconv/config.toml` (system)
//! 4. Built-in defaults
//!
//! `GRPC_PORT` and `PORT` in the environment then replace the RPC and HTTP
//! ports of whatever was loaded.

use serde::Deserialize;
use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::{Result, TempconvError};

/// Environment variable overriding the RPC listener port.
pub const GRPC_PORT_ENV: &str = "GRPC_PORT";
/// Environment variable overriding the HTTP listener port.
pub const HTTP_PORT_ENV: &str = "PORT";

/// Server configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub gateway: GatewayConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// gRPC listener address (default: 0.0.0.0:50051).
    #[serde(default = "default_grpc_address")]
    pub grpc_address: String,
    /// HTTP gateway listener address (default: 0.0.0.0:8080).
    #[serde(default = "default_http_address")]
    pub http_address: String,
    #[serde(default)]
    pub limits: LimitsConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            grpc_address: default_grpc_address(),
            http_address: default_http_address(),
            limits: LimitsConfig::default(),
        }
    }
}

fn default_grpc_address() -> String {
    "0.0.0.0:50051".to_string()
}

fn default_http_address() -> String {
    "0.0.0.0:8080".to_string()
}

impl ServerConfig {
    /// Parsed gRPC listener address.
    pub fn grpc_addr(&self) -> Result<SocketAddr> {
        parse_addr("grpc_address", &self.grpc_address)
    }

    /// Parsed HTTP listener address.
    pub fn http_addr(&self) -> Result<SocketAddr> {
        parse_addr("http_address", &self.http_address)
    }

    pub fn set_grpc_port(&mut self, port: u16) -> Result<()> {
        let mut addr = self.grpc_addr()?;
        addr.set_port(port);
        self.grpc_address = addr.to_string();
        Ok(())
    }

    pub fn set_http_port(&mut self, port: u16) -> Result<()> {
        let mut addr = self.http_addr()?;
        addr.set_port(port);
        self.http_address = addr.to_string();
        Ok(())
    }
}

fn parse_addr(field: &str, value: &str) -> Result<SocketAddr> {
    value
        .parse()
        .map_err(|e| TempconvError::Configuration(format!("Invalid {field} {value:?}: {e}")))
}

/// Resource limits.
#[derive(Debug, Clone, Deserialize)]
pub struct LimitsConfig {
    /// Per-request timeout in seconds for RPCs and loopback calls (default: 30).
    #[serde(default = "default_timeout")]
    pub request_timeout_secs: u64,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            request_timeout_secs: default_timeout(),
        }
    }
}

fn default_timeout() -> u64 {
    30
}

impl LimitsConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// HTTP/JSON gateway configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct GatewayConfig {
    /// Serve the HTTP gateway next to the gRPC listener (default: true).
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// How the gateway reaches the service (default: loopback).
    #[serde(default)]
    pub upstream: GatewayUpstream,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            upstream: GatewayUpstream::default(),
        }
    }
}

fn default_enabled() -> bool {
    true
}

/// Where gateway requests are sent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GatewayUpstream {
    /// A gRPC call to this process's own RPC listener.
    #[default]
    Loopback,
    /// A direct call into the service handler.
    InProcess,
}

impl Config {
    /// Load configuration from the standard locations.
    ///
    /// An explicit path must exist. Without one, the first file found in the
    /// user and system locations is used, or the defaults if there is none.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        match Self::resolve_config_path(explicit_path)? {
            Some(path) => Self::from_file(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            TempconvError::Configuration(format!("Failed to read config file {path:?}: {e}"))
        })?;
        toml::from_str(&content).map_err(|e| {
            TempconvError::Configuration(format!("Failed to parse config file {path:?}: {e}"))
        })
    }

    /// Resolve the config file path.
    fn resolve_config_path(explicit: Option<&Path>) -> Result<Option<PathBuf>> {
        if let Some(path) = explicit {
            if path.exists() {
                return Ok(Some(path.to_path_buf()));
            }
            return Err(TempconvError::Configuration(format!(
                "Config file not found: {path:?}"
            )));
        }

        // User config
        if let Some(home) = dirs::home_dir() {
            let user_config = home.join(".tempconv").join("config.toml");
            if user_config.exists() {
                return Ok(Some(user_config));
            }
        }

        // System config
        let system_config = PathBuf::from("/etc/tempconv/config.toml");
        if system_config.exists() {
            return Ok(Some(system_config));
        }

        Ok(None)
    }

    /// Apply `GRPC_PORT` / `PORT` from the process environment.
    pub fn apply_env(&mut self) -> Result<()> {
        self.apply_overrides(|name| std::env::var(name).ok())
    }

    /// Apply port overrides from `lookup`, keyed by environment variable name.
    /// Empty values are ignored.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(port) = port_override(&lookup, GRPC_PORT_ENV)? {
            self.server.set_grpc_port(port)?;
        }
        if let Some(port) = port_override(&lookup, HTTP_PORT_ENV)? {
            self.server.set_http_port(port)?;
        }
        Ok(())
    }
}

fn port_override(lookup: &impl Fn(&str) -> Option<String>, name: &str) -> Result<Option<u16>> {
    match lookup(name) {
        Some(value) if !value.is_empty() => value.parse().map(Some).map_err(|e| {
            TempconvError::Configuration(format!("Invalid {name} value {value:?}: {e}"))
        }),
        _ => Ok(None),
    }
}
