//! # Axum Helpers
//!
//! Shared building blocks for the HTTP surface of the services.
//!
//! ## Modules
//!
//! - **[`server`]**: Router assembly, health checks, graceful shutdown
//! - **[`http`]**: Middleware (CORS, security headers, panic recovery)
//! - **[`errors`]**: Structured error responses with error codes
//! - **[`extractors`]**: Validated JSON extractor
//!
//! ## Quick Start
//!
//! ```ignore
//! use axum_helpers::server::{ShutdownCoordinator, create_production_app, create_router};
//!
//! let router = create_router::<ApiDoc>(api_routes)?;
//! let coordinator = ShutdownCoordinator::new();
//! create_production_app(router, &config, coordinator, Duration::from_secs(30), async {}).await?;
//! ```

pub mod errors;
pub mod extractors;
pub mod http;
pub mod server;

// Re-export server types
pub use server::{
    HealthCheckFuture, HealthResponse, ShutdownCoordinator, create_production_app, create_router,
    health_router, run_health_checks,
};

// Re-export HTTP middleware
pub use http::{create_cors_layer, panic_recovery_layer, security_headers};

// Re-export error types
pub use errors::{AppError, ErrorCode, ErrorResponse};

// Re-export extractors
pub use extractors::ValidatedJson;
