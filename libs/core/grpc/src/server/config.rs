//! Server configuration loaded from environment variables.

use core_config::{ConfigError, FromEnv, env_or_default, env_required_parse};
use std::net::SocketAddr;

use crate::error::GrpcError;

/// Configuration for the gRPC listener.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Host to bind to (default: 0.0.0.0)
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Accept and send zstd-compressed messages (default: true)
    pub enable_compression: bool,
    /// Maximum message size for decoding and encoding (default: 4MB)
    pub max_message_size: usize,
}

impl ServerConfig {
    pub fn new(port: u16) -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port,
            enable_compression: true,
            max_message_size: 4 * 1024 * 1024,
        }
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    pub fn with_compression(mut self, enable: bool) -> Self {
        self.enable_compression = enable;
        self
    }

    /// Get the socket address to bind to.
    pub fn socket_addr(&self) -> Result<SocketAddr, GrpcError> {
        self.addr_string()
            .parse()
            .map_err(|source| GrpcError::InvalidAddress {
                addr: self.addr_string(),
                source,
            })
    }

    /// Get the address string (for logging).
    pub fn addr_string(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl FromEnv for ServerConfig {
    /// Reads:
    /// - `GRPC_PORT` (required)
    /// - `GRPC_HOST` (default: 0.0.0.0)
    /// - `GRPC_COMPRESSION` (default: true)
    fn from_env() -> Result<Self, ConfigError> {
        let port = env_required_parse("GRPC_PORT")?;
        let host = env_or_default("GRPC_HOST", "0.0.0.0");
        let enable_compression = !matches!(
            env_or_default("GRPC_COMPRESSION", "true").as_str(),
            "false" | "0"
        );

        Ok(Self::new(port)
            .with_host(host)
            .with_compression(enable_compression))
    }
}
