//! gRPC server utilities.
//!
//! ```ignore
//! use grpc_helpers::server::{GrpcServer, ServerConfig};
//!
//! let config = ServerConfig::from_env()?;
//! let (health_reporter, health_service) = tonic_health::server::health_reporter();
//!
//! GrpcServer::setup_health(&health_reporter, SERVICE_NAME).await;
//! GrpcServer::log_startup(&config, SERVICE_NAME);
//! ```

mod builder;
mod config;

pub use builder::GrpcServer;
pub use config::ServerConfig;
