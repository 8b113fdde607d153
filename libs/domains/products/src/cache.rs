use async_trait::async_trait;
use std::time::Duration;

use crate::error::ProductResult;
use crate::models::Product;

/// TTL meaning "keep until overwritten or deleted".
pub const NO_EXPIRATION: Duration = Duration::ZERO;

/// Cache key for a single product.
pub fn cache_key(id: &str) -> String {
    format!("product:{}", id)
}

/// Look-aside key/value cache for products
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductCache: Send + Sync {
    async fn get(&self, key: &str) -> ProductResult<Option<Product>>;

    /// A zero `ttl` stores the entry without expiration.
    async fn set(&self, key: &str, product: &Product, ttl: Duration) -> ProductResult<()>;

    async fn delete(&self, key: &str) -> ProductResult<()>;

    async fn exists(&self, key: &str) -> ProductResult<bool>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_key_format() {
        assert_eq!(cache_key("abc123"), "product:abc123");
    }
}
