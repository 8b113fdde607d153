//! Connectors and health checks for the backing stores
//!
//! # Features
//!
//! - `mongodb` (default) - MongoDB client with a startup ping
//! - `redis` (default) - Redis `ConnectionManager` with database selection
//! - `config` - `core_config::FromEnv` implementations for the configs
//!
//! Connections are attempted once. A failed ping is returned to the caller,
//! which is expected to abort startup.
//!
//! ## MongoDB
//!
//! ```ignore
//! use database::mongodb::{MongoConfig, connect_from_config};
//!
//! let config = MongoConfig::with_database("mongodb://localhost:27017", "shop");
//! let client = connect_from_config(&config).await?;
//! let db = client.database(config.database());
//! ```
//!
//! ## Redis
//!
//! ```ignore
//! use database::redis::{RedisConfig, connect_from_config};
//!
//! let conn = connect_from_config(&RedisConfig::with_database("redis://127.0.0.1:6379", 2)).await?;
//! ```

mod health;

pub use health::HealthStatus;

#[cfg(feature = "mongodb")]
pub mod mongodb;

#[cfg(feature = "redis")]
pub mod redis;
