//! Shared test utilities for domain testing
//!
//! This crate provides reusable test infrastructure for the domain crates:
//! - `TestMongo`: MongoDB container with automatic cleanup (feature: "mongo")
//! - `TestRedis`: Redis container with automatic cleanup (feature: "redis")
//! - `TestNats`: NATS container with automatic cleanup (feature: "nats")
//! - `TestDataBuilder`: Deterministic test data generation (always available)
//! - `assertions`: Custom assertion helpers (always available)
//!
//! All containers need a local Docker daemon, so tests using them are
//! usually marked `#[ignore]` and run with `cargo test -- --ignored`.
//!
//! # Usage
//!
//! ```toml
//! [dev-dependencies]
//! test-utils = { workspace = true, features = ["mongo", "redis"] }
//! ```
//!
//! ```rust,ignore
//! use test_utils::{TestMongo, TestRedis};
//!
//! #[tokio::test]
//! #[ignore] // Requires Docker
//! async fn my_test() {
//!     let mongo = TestMongo::new().await;
//!     let redis = TestRedis::new().await;
//!
//!     let db = mongo.database("products_test");
//!     let conn = redis.connection_manager().await;
//! }
//! ```

#[cfg(feature = "mongo")]
mod mongo;

#[cfg(feature = "nats")]
mod nats;

#[cfg(feature = "redis")]
mod redis;

#[cfg(feature = "mongo")]
pub use mongo::TestMongo;

#[cfg(feature = "nats")]
pub use nats::{RECEIVE_TIMEOUT, StreamExt, TestNats};

#[cfg(feature = "redis")]
pub use self::redis::TestRedis;

/// Builder for test data with deterministic randomization
///
/// Keeps names unique per test so tests sharing a container do not collide.
pub struct TestDataBuilder {
    seed: u64,
}

impl TestDataBuilder {
    /// Create a new builder with a seed (for deterministic tests)
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Create from test name (generates seed from test name hash)
    ///
    /// # Example
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::from_test_name("test_create_product");
    /// ```
    pub fn from_test_name(name: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        name.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// Generate a unique name for testing
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::new(7);
    /// assert_eq!(builder.name("product", "main"), "test-product-7-main");
    /// ```
    pub fn name(&self, prefix: &str, suffix: &str) -> String {
        format!("test-{}-{}-{}", prefix, self.seed, suffix)
    }

    /// Database or collection name safe for MongoDB (no dots, short)
    pub fn database_name(&self) -> String {
        format!("test_{:x}", self.seed)
    }

    /// Positive price derived from the seed, in the range 1.00..=100.99
    pub fn price(&self) -> f64 {
        let cents = self.seed % 10_000;
        1.0 + cents as f64 / 100.0
    }
}

/// Test assertion helpers
pub mod assertions {
    /// Assert that an optional value is Some
    pub fn assert_some<T>(value: Option<T>, context: &str) -> T {
        value.unwrap_or_else(|| panic!("{}: expected Some, got None", context))
    }

    /// Assert two floats are equal within `1e-9`
    pub fn assert_price_eq(actual: f64, expected: f64, context: &str) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "{}: expected price {}, got {}",
            context,
            expected,
            actual
        );
    }
}
