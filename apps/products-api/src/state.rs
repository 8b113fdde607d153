//! Shared handles built once in `main`

use database::mongodb::Client;
use database::redis::ConnectionManager;
use domain_products::{MongoProductRepository, NatsEventPublisher, ProductService, RedisProductCache};

/// The product service wired to the production adapters
pub type AppService = ProductService<MongoProductRepository, RedisProductCache, NatsEventPublisher>;

/// Connections probed by the readiness endpoint
#[derive(Clone)]
pub struct ReadyState {
    pub mongo: Client,
    pub redis: ConnectionManager,
}
