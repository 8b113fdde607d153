use crate::{env_or_default, env_required_parse, ConfigError, FromEnv};
use std::net::Ipv4Addr;

/// Listener configuration shared by the HTTP and gRPC servers
#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn new(host: String, port: u16) -> Self {
        Self { host, port }
    }

    /// Reads `HOST` (default 0.0.0.0) and a required port from `port_key`.
    pub fn from_port_var(port_key: &str) -> Result<Self, ConfigError> {
        let host = env_or_default("HOST", &Ipv4Addr::UNSPECIFIED.to_string());
        let port = env_required_parse(port_key)?;

        Ok(Self { host, port })
    }

    /// Get the server address as "host:port"
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl FromEnv for ServerConfig {
    /// HTTP listener: `HOST` and the required `HTTP_PORT`
    fn from_env() -> Result<Self, ConfigError> {
        Self::from_port_var("HTTP_PORT")
    }
}
