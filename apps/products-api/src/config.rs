//! Configuration for Products API
//!
//! Everything is read from the environment once at startup. A missing or
//! unparsable required variable aborts the process before any connection
//! is attempted.

use core_config::nats::NatsConfig;
use core_config::server::ServerConfig;
use core_config::{app_info, AppInfo, ConfigError, Environment, FromEnv};
use database::mongodb::MongoConfig;
use database::redis::RedisConfig;

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub environment: Environment,
    /// HTTP listener (`HOST`, `HTTP_PORT`)
    pub server: ServerConfig,
    /// gRPC listener (`GRPC_HOST`, `GRPC_PORT`, `GRPC_COMPRESSION`)
    pub grpc: grpc_helpers::ServerConfig,
    pub mongodb: MongoConfig,
    pub redis: RedisConfig,
    pub nats: NatsConfig,
}

impl FromEnv for Config {
    fn from_env() -> Result<Self, ConfigError> {
        let app = app_info!();

        let mut mongodb = MongoConfig::from_env()?;
        if mongodb.app_name.is_none() {
            mongodb = mongodb.with_app_name(app.name);
        }

        Ok(Self {
            app,
            environment: Environment::from_env(),
            server: ServerConfig::from_env()?,
            grpc: grpc_helpers::ServerConfig::from_env()?,
            mongodb,
            redis: RedisConfig::from_env()?,
            nats: NatsConfig::from_env()?,
        })
    }
}
