use async_trait::async_trait;

use crate::error::ProductResult;
use crate::models::{CreateProduct, Product};

/// Repository trait for Product persistence
///
/// The implementation owns identifier assignment. Identifiers it cannot
/// parse are reported as missing rather than as errors.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Insert a new product, assigning its id and timestamps
    async fn create(&self, input: CreateProduct) -> ProductResult<Product>;

    /// Get a product by ID
    async fn find_by_id(&self, id: &str) -> ProductResult<Option<Product>>;

    /// Persist name and price of an existing product, refreshing `updated_at`
    ///
    /// Returns `NotFound` when no document matched.
    async fn update(&self, product: &Product) -> ProductResult<Product>;

    /// Delete a product by ID, `NotFound` when nothing was deleted
    async fn delete(&self, id: &str) -> ProductResult<()>;

    /// All products in insertion order
    async fn find_all(&self) -> ProductResult<Vec<Product>>;
}
