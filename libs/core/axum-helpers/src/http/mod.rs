//! HTTP middleware module.
//!
//! - CORS configuration
//! - Security headers
//! - Panic recovery
//!
//! ```ignore
//! use axum_helpers::http::{create_cors_layer, panic_recovery_layer, security_headers};
//!
//! let app = Router::new()
//!     .layer(axum::middleware::from_fn(security_headers))
//!     .layer(panic_recovery_layer());
//! ```

pub mod cors;
pub mod panic;
pub mod security;

pub use cors::{cors_layer_from_env, create_cors_layer};
pub use panic::{handle_panic, panic_recovery_layer};
pub use security::security_headers;
