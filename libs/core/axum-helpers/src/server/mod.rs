//! Server infrastructure module.
//!
//! - Router assembly with OpenAPI documentation and middleware
//! - Health and readiness endpoints
//! - Graceful shutdown coordination
//!
//! ```ignore
//! use axum_helpers::server::{create_router, health_router};
//! use core_config::app_info;
//!
//! let router = create_router::<ApiDoc>(api_routes)?.merge(health_router(app_info!()));
//! ```

pub mod app;
pub mod health;
pub mod shutdown;

pub use app::{REQUEST_TIMEOUT, create_production_app, create_router};
pub use health::{HealthCheckFuture, HealthResponse, health_router, run_health_checks};
pub use shutdown::ShutdownCoordinator;
