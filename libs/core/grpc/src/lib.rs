//! # gRPC Helpers
//!
//! Server-side building blocks shared by the tonic services.
//!
//! - **[`server`]**: listener config, startup logging, health reporting
//! - **[`recovery`]**: tower layer turning handler panics into `INTERNAL`
//! - **[`error`]**: conversions from options to `tonic::Status`
//!
//! ## Quick Start
//!
//! ```ignore
//! use grpc_helpers::{GrpcRecoveryLayer, GrpcServer, ServerConfig};
//! use tower_http::trace::TraceLayer;
//!
//! let config = ServerConfig::from_env()?;
//! let (health_reporter, health_service) = tonic_health::server::health_reporter();
//! GrpcServer::setup_health(&health_reporter, SERVICE_NAME).await;
//! GrpcServer::log_startup(&config, SERVICE_NAME);
//!
//! Server::builder()
//!     .layer(
//!         tower::ServiceBuilder::new()
//!             .layer(TraceLayer::new_for_grpc())
//!             .layer(GrpcRecoveryLayer),
//!     )
//!     .add_service(health_service)
//!     .add_service(my_service)
//!     .serve(config.socket_addr()?)
//!     .await?;
//! ```

pub mod error;
pub mod recovery;
pub mod server;

pub use error::{GrpcError, ToTonicOption};
pub use recovery::{GrpcRecovery, GrpcRecoveryLayer};
pub use server::{GrpcServer, ServerConfig};
