//! Redis implementation of ProductCache

use async_trait::async_trait;
use database::redis::{AsyncCommands, ConnectionManager};
use std::time::Duration;
use tracing::instrument;

use crate::cache::ProductCache;
use crate::error::{ProductError, ProductResult};
use crate::models::Product;

/// Stores products as JSON strings.
#[derive(Clone)]
pub struct RedisProductCache {
    conn: ConnectionManager,
}

impl RedisProductCache {
    pub fn new(conn: ConnectionManager) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl ProductCache for RedisProductCache {
    #[instrument(skip(self))]
    async fn get(&self, key: &str) -> ProductResult<Option<Product>> {
        let mut conn = self.conn.clone();
        let value: Option<String> = conn.get(key).await?;

        value
            .map(|json| {
                serde_json::from_str(&json)
                    .map_err(|e| ProductError::Cache(format!("corrupt entry {}: {}", key, e)))
            })
            .transpose()
    }

    #[instrument(skip(self, product))]
    async fn set(&self, key: &str, product: &Product, ttl: Duration) -> ProductResult<()> {
        let json =
            serde_json::to_string(product).map_err(|e| ProductError::Internal(e.to_string()))?;
        let mut conn = self.conn.clone();

        if ttl.is_zero() {
            conn.set::<_, _, ()>(key, json).await?;
        } else {
            conn.set_ex::<_, _, ()>(key, json, ttl.as_secs().max(1)).await?;
        }
        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, key: &str) -> ProductResult<()> {
        let mut conn = self.conn.clone();
        conn.del::<_, ()>(key).await?;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn exists(&self, key: &str) -> ProductResult<bool> {
        let mut conn = self.conn.clone();
        let exists: bool = conn.exists(key).await?;
        Ok(exists)
    }
}
