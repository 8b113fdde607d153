use crate::{env_required, ConfigError, FromEnv};

/// Event broker configuration
#[derive(Clone, Debug)]
pub struct NatsConfig {
    pub url: String,
}

impl NatsConfig {
    pub fn new(url: String) -> Self {
        Self { url }
    }
}

impl FromEnv for NatsConfig {
    /// Requires NATS_URL to be set (no default)
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            url: env_required("NATS_URL")?,
        })
    }
}
