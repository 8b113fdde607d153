//! MongoDB implementation of ProductRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId, DateTime as BsonDateTime},
    Collection, Database,
};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::error::{ProductError, ProductResult};
use crate::models::{CreateProduct, Product};
use crate::repository::ProductRepository;

/// Default collection name
pub const COLLECTION_NAME: &str = "products";

/// Stored shape: `{_id: ObjectId, name, price, created_at, updated_at}`
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ProductDocument {
    #[serde(rename = "_id")]
    id: ObjectId,
    name: String,
    price: f64,
    created_at: BsonDateTime,
    updated_at: BsonDateTime,
}

impl ProductDocument {
    fn into_product(self) -> Product {
        Product {
            id: self.id.to_hex(),
            name: self.name,
            price: self.price,
            created_at: DateTime::<Utc>::from(self.created_at.to_system_time()),
            updated_at: DateTime::<Utc>::from(self.updated_at.to_system_time()),
        }
    }
}

/// MongoDB implementation of the ProductRepository
pub struct MongoProductRepository {
    collection: Collection<ProductDocument>,
}

impl MongoProductRepository {
    /// Create a new MongoProductRepository
    pub fn new(db: &Database) -> Self {
        Self::with_collection(db, COLLECTION_NAME)
    }

    /// Create a new MongoProductRepository with a custom collection name
    pub fn with_collection(db: &Database, collection_name: &str) -> Self {
        let collection = db.collection::<ProductDocument>(collection_name);
        Self { collection }
    }
}

/// Ids that are not 24-char ObjectId hex can never match a document.
fn parse_object_id(id: &str) -> Option<ObjectId> {
    ObjectId::parse_str(id).ok()
}

#[async_trait]
impl ProductRepository for MongoProductRepository {
    #[instrument(skip(self, input), fields(product_name = %input.name))]
    async fn create(&self, input: CreateProduct) -> ProductResult<Product> {
        let now = BsonDateTime::now();
        let document = ProductDocument {
            id: ObjectId::new(),
            name: input.name,
            price: input.price,
            created_at: now,
            updated_at: now,
        };

        self.collection.insert_one(&document).await?;

        let product = document.into_product();
        tracing::info!(product_id = %product.id, "Product created successfully");
        Ok(product)
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: &str) -> ProductResult<Option<Product>> {
        let Some(oid) = parse_object_id(id) else {
            return Ok(None);
        };

        let document = self.collection.find_one(doc! { "_id": oid }).await?;
        Ok(document.map(ProductDocument::into_product))
    }

    #[instrument(skip(self, product), fields(product_id = %product.id))]
    async fn update(&self, product: &Product) -> ProductResult<Product> {
        let oid = parse_object_id(&product.id)
            .ok_or_else(|| ProductError::NotFound(product.id.clone()))?;
        let now = BsonDateTime::now();

        let result = self
            .collection
            .update_one(
                doc! { "_id": oid },
                doc! {
                    "$set": {
                        "name": product.name.clone(),
                        "price": product.price,
                        "updated_at": now,
                    }
                },
            )
            .await?;

        if result.matched_count == 0 {
            return Err(ProductError::NotFound(product.id.clone()));
        }

        tracing::info!(product_id = %product.id, "Product updated successfully");
        Ok(Product {
            updated_at: DateTime::<Utc>::from(now.to_system_time()),
            ..product.clone()
        })
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: &str) -> ProductResult<()> {
        let oid = parse_object_id(id).ok_or_else(|| ProductError::NotFound(id.to_string()))?;
        let result = self.collection.delete_one(doc! { "_id": oid }).await?;

        if result.deleted_count == 0 {
            return Err(ProductError::NotFound(id.to_string()));
        }

        tracing::info!(product_id = %id, "Product deleted successfully");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn find_all(&self) -> ProductResult<Vec<Product>> {
        // ObjectIds grow with insertion time
        let cursor = self.collection.find(doc! {}).sort(doc! { "_id": 1 }).await?;
        let documents: Vec<ProductDocument> = cursor.try_collect().await?;

        Ok(documents
            .into_iter()
            .map(ProductDocument::into_product)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_object_id() {
        let oid = ObjectId::new();
        assert_eq!(parse_object_id(&oid.to_hex()), Some(oid));
        assert_eq!(parse_object_id("abc123"), None);
        assert_eq!(parse_object_id(""), None);
    }

    #[test]
    fn test_document_to_product() {
        let oid = ObjectId::new();
        let created = BsonDateTime::from_millis(1_700_000_000_000);
        let updated = BsonDateTime::from_millis(1_700_000_060_000);
        let document = ProductDocument {
            id: oid,
            name: "Widget".to_string(),
            price: 9.99,
            created_at: created,
            updated_at: updated,
        };

        let product = document.into_product();
        assert_eq!(product.id, oid.to_hex());
        assert_eq!(product.name, "Widget");
        assert_eq!(product.created_at.timestamp(), 1_700_000_000);
        assert_eq!(product.updated_at.timestamp(), 1_700_000_060);
    }

    #[test]
    fn test_document_uses_underscore_id() {
        let document = ProductDocument {
            id: ObjectId::new(),
            name: "Widget".to_string(),
            price: 9.99,
            created_at: BsonDateTime::now(),
            updated_at: BsonDateTime::now(),
        };
        let bson = mongodb::bson::to_document(&document).unwrap();
        assert!(bson.get_object_id("_id").is_ok());
        assert!(bson.get_datetime("created_at").is_ok());
    }
}
