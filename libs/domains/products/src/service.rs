//! Product Service - orchestration core
//!
//! Store failures abort an operation. Cache and publish failures are logged
//! and swallowed: the store is the source of truth, the cache and the event
//! stream are best-effort companions.

use std::sync::Arc;
use tracing::instrument;

use crate::cache::{cache_key, ProductCache, NO_EXPIRATION};
use crate::error::{ProductError, ProductResult};
use crate::events::{EventPublisher, ProductEvent};
use crate::models::{validate_fields, CreateProduct, Product, UpdateProduct};
use crate::repository::ProductRepository;

/// Product service shared by the HTTP and gRPC adapters
pub struct ProductService<R, C, P> {
    repository: Arc<R>,
    cache: Arc<C>,
    publisher: Arc<P>,
}

impl<R, C, P> ProductService<R, C, P>
where
    R: ProductRepository,
    C: ProductCache,
    P: EventPublisher,
{
    pub fn new(repository: R, cache: C, publisher: P) -> Self {
        Self {
            repository: Arc::new(repository),
            cache: Arc::new(cache),
            publisher: Arc::new(publisher),
        }
    }

    /// Create a new product, cache it and emit `product.created`
    #[instrument(skip(self, input), fields(product_name = %input.name))]
    pub async fn create_product(&self, input: CreateProduct) -> ProductResult<Product> {
        let name = validate_fields(&input.name, input.price)?;

        let product = self
            .repository
            .create(CreateProduct {
                name,
                price: input.price,
            })
            .await?;

        self.cache_product(&product).await;
        self.publish_product(ProductEvent::Created, &product).await;

        Ok(product)
    }

    /// Look-aside read: cache first, store on a miss or a cache failure
    #[instrument(skip(self))]
    pub async fn get_product(&self, id: &str) -> ProductResult<Product> {
        match self.cache.get(&cache_key(id)).await {
            Ok(Some(product)) => {
                tracing::debug!(product_id = %id, "Cache hit");
                return Ok(product);
            }
            Ok(None) => tracing::debug!(product_id = %id, "Cache miss"),
            Err(e) => {
                tracing::warn!(product_id = %id, error = %e, "Cache read failed, using store")
            }
        }

        let product = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| ProductError::NotFound(id.to_string()))?;

        self.cache_product(&product).await;
        Ok(product)
    }

    /// Replace name and price, refresh the cache entry and emit `product.updated`
    #[instrument(skip(self, input))]
    pub async fn update_product(&self, id: &str, input: UpdateProduct) -> ProductResult<Product> {
        let name = validate_fields(&input.name, input.price)?;

        let mut product = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| ProductError::NotFound(id.to_string()))?;

        product.apply_update(UpdateProduct {
            name,
            price: input.price,
        });
        let product = self.repository.update(&product).await?;

        self.cache_product(&product).await;
        self.publish_product(ProductEvent::Updated, &product).await;

        Ok(product)
    }

    /// Delete a product, drop its cache entry and emit `product.deleted`
    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: &str) -> ProductResult<()> {
        self.repository.delete(id).await?;

        if let Err(e) = self.cache.delete(&cache_key(id)).await {
            tracing::warn!(product_id = %id, error = %e, "Failed to evict product from cache");
        }

        match serde_json::to_vec(id) {
            Ok(payload) => self.publish(ProductEvent::Deleted, payload).await,
            Err(e) => tracing::error!(product_id = %id, error = %e, "Failed to encode event"),
        }

        Ok(())
    }

    /// List all products straight from the store
    #[instrument(skip(self))]
    pub async fn list_products(&self) -> ProductResult<Vec<Product>> {
        self.repository.find_all().await
    }

    async fn cache_product(&self, product: &Product) {
        if let Err(e) = self
            .cache
            .set(&cache_key(&product.id), product, NO_EXPIRATION)
            .await
        {
            tracing::warn!(product_id = %product.id, error = %e, "Failed to cache product");
        }
    }

    async fn publish_product(&self, event: ProductEvent, product: &Product) {
        match serde_json::to_vec(product) {
            Ok(payload) => self.publish(event, payload).await,
            Err(e) => {
                tracing::error!(product_id = %product.id, error = %e, "Failed to encode event")
            }
        }
    }

    async fn publish(&self, event: ProductEvent, payload: Vec<u8>) {
        if let Err(e) = self.publisher.publish(event.topic(), payload).await {
            tracing::error!(topic = event.topic(), error = %e, "Failed to publish event");
        }
    }
}

impl<R, C, P> Clone for ProductService<R, C, P> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            cache: Arc::clone(&self.cache),
            publisher: Arc::clone(&self.publisher),
        }
    }
}
