//! Products Domain
//!
//! CRUD over a single `Product` record with a look-aside cache and
//! fire-and-forget change events.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐  ┌──────────────┐
//! │   Handlers   │  │     gRPC     │  ← HTTP endpoints / ProductService RPCs
//! └──────┬───────┘  └──────┬───────┘
//!        └────────┬────────┘
//!          ┌──────▼──────┐
//!          │   Service   │  ← Validation, caching and event policy
//!          └──────┬──────┘
//!    ┌────────────┼─────────────┐
//! ┌──▼─────────┐ ┌▼──────────┐ ┌▼───────────────┐
//! │ Repository │ │   Cache   │ │ EventPublisher │
//! │ (MongoDB)  │ │  (Redis)  │ │     (NATS)     │
//! └────────────┘ └───────────┘ └────────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_products::{
//!     handlers, MongoProductRepository, NatsEventPublisher, ProductService,
//!     RedisProductCache,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = mongodb::Client::with_uri_str("mongodb://localhost:27017").await?;
//! let redis = database::redis::connect("redis://localhost:6379").await?;
//! let nats = async_nats::connect("nats://localhost:4222").await?;
//!
//! let service = ProductService::new(
//!     MongoProductRepository::new(&client.database("mydb")),
//!     RedisProductCache::new(redis),
//!     NatsEventPublisher::new(nats),
//! );
//!
//! let router = handlers::router(service);
//! # Ok(())
//! # }
//! ```

pub mod cache;
pub mod error;
pub mod events;
pub mod grpc;
pub mod handlers;
pub mod models;
pub mod mongodb;
pub mod nats;
pub mod redis;
pub mod repository;
pub mod service;

pub use cache::{cache_key, ProductCache, NO_EXPIRATION};
pub use error::{ProductError, ProductResult};
pub use events::{EventPublisher, ProductEvent};
pub use grpc::ProductGrpcService;
pub use handlers::ApiDoc;
pub use models::{CreateProduct, Product, UpdateProduct};
pub use crate::mongodb::MongoProductRepository;
pub use crate::nats::NatsEventPublisher;
pub use crate::redis::RedisProductCache;
pub use repository::ProductRepository;
pub use service::ProductService;
