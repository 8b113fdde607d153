//! Integration tests for the Products adapters
//!
//! These use real MongoDB, Redis and NATS via testcontainers to ensure:
//! - Documents round-trip through the `products` collection
//! - Unknown and malformed ids are reported as not found
//! - Cache entries are JSON strings under `product:<id>`, and a corrupt one
//!   falls back to the store
//! - Events arrive on the expected subjects
//!
//! Run with `cargo test -p domain_products -- --ignored` (requires Docker).

use domain_products::*;
use std::time::Duration;
use test_utils::{assertions::*, TestDataBuilder, TestMongo, TestNats, TestRedis};

// ============================================================================
// Repository Tests
// ============================================================================

#[tokio::test]
#[ignore] // Requires Docker
async fn test_create_and_find_product() {
    let mongo = TestMongo::new().await;
    let builder = TestDataBuilder::from_test_name("create_and_find");
    let repo = MongoProductRepository::new(&mongo.database(&builder.database_name()));

    let created = repo
        .create(CreateProduct {
            name: builder.name("product", "main"),
            price: builder.price(),
        })
        .await
        .unwrap();

    assert_eq!(created.id.len(), 24);
    assert_eq!(created.created_at, created.updated_at);

    let found = assert_some(repo.find_by_id(&created.id).await.unwrap(), "product");
    assert_eq!(found, created);
    assert_price_eq(found.price, builder.price(), "stored price");
}

#[tokio::test]
#[ignore] // Requires Docker
async fn test_find_unknown_and_malformed_ids() {
    let mongo = TestMongo::new().await;
    let repo = MongoProductRepository::new(&mongo.database("ids"));

    assert!(repo
        .find_by_id("65f1c2a9e4b0a1b2c3d4e5f6")
        .await
        .unwrap()
        .is_none());
    assert!(repo.find_by_id("abc123").await.unwrap().is_none());
    assert!(matches!(
        repo.delete("abc123").await,
        Err(ProductError::NotFound(_))
    ));
}

#[tokio::test]
#[ignore] // Requires Docker
async fn test_update_preserves_created_at() {
    let mongo = TestMongo::new().await;
    let repo = MongoProductRepository::new(&mongo.database("update"));

    let created = repo
        .create(CreateProduct {
            name: "Widget".to_string(),
            price: 9.99,
        })
        .await
        .unwrap();

    tokio::time::sleep(Duration::from_millis(5)).await;

    let mut changed = created.clone();
    changed.name = "Widget-2".to_string();
    changed.price = 12.5;
    let updated = repo.update(&changed).await.unwrap();

    let stored = assert_some(repo.find_by_id(&created.id).await.unwrap(), "product");
    assert_eq!(stored, updated);
    assert_eq!(stored.created_at, created.created_at);
    assert!(stored.updated_at > created.updated_at);
    assert_eq!(stored.name, "Widget-2");
}

#[tokio::test]
#[ignore] // Requires Docker
async fn test_update_and_delete_missing_are_not_found() {
    let mongo = TestMongo::new().await;
    let repo = MongoProductRepository::new(&mongo.database("missing"));

    let created = repo
        .create(CreateProduct {
            name: "Widget".to_string(),
            price: 9.99,
        })
        .await
        .unwrap();
    repo.delete(&created.id).await.unwrap();

    assert!(matches!(
        repo.update(&created).await,
        Err(ProductError::NotFound(_))
    ));
    assert!(matches!(
        repo.delete(&created.id).await,
        Err(ProductError::NotFound(_))
    ));
}

#[tokio::test]
#[ignore] // Requires Docker
async fn test_find_all_in_insertion_order() {
    let mongo = TestMongo::new().await;
    let repo = MongoProductRepository::new(&mongo.database("list"));

    for name in ["first", "second", "third"] {
        repo.create(CreateProduct {
            name: name.to_string(),
            price: 1.0,
        })
        .await
        .unwrap();
    }

    let names: Vec<_> = repo
        .find_all()
        .await
        .unwrap()
        .into_iter()
        .map(|p| p.name)
        .collect();
    assert_eq!(names, ["first", "second", "third"]);
}

// ============================================================================
// Cache Tests
// ============================================================================

#[tokio::test]
#[ignore] // Requires Docker
async fn test_redis_cache_set_get_delete() {
    let redis = TestRedis::new().await;
    let cache = RedisProductCache::new(redis.connection_manager().await);
    let product = Product {
        id: "abc123".to_string(),
        name: "Widget".to_string(),
        price: 9.99,
        created_at: chrono::Utc::now(),
        updated_at: chrono::Utc::now(),
    };
    let key = cache_key(&product.id);

    assert!(cache.get(&key).await.unwrap().is_none());

    cache.set(&key, &product, NO_EXPIRATION).await.unwrap();
    assert!(cache.exists(&key).await.unwrap());
    assert_eq!(cache.get(&key).await.unwrap(), Some(product));

    cache.delete(&key).await.unwrap();
    assert!(!cache.exists(&key).await.unwrap());
}

#[tokio::test]
#[ignore] // Requires Docker
async fn test_redis_cache_ttl_expires() {
    let redis = TestRedis::new().await;
    let cache = RedisProductCache::new(redis.connection_manager().await);
    let product = Product {
        id: "ttl".to_string(),
        name: "Widget".to_string(),
        price: 1.0,
        created_at: chrono::Utc::now(),
        updated_at: chrono::Utc::now(),
    };

    cache
        .set("product:ttl", &product, Duration::from_secs(1))
        .await
        .unwrap();
    tokio::time::sleep(Duration::from_secs(2)).await;

    assert!(!cache.exists("product:ttl").await.unwrap());
}

// ============================================================================
// Publisher Tests
// ============================================================================

#[tokio::test]
#[ignore] // Requires Docker
async fn test_nats_publisher_uses_topic_as_subject() {
    let nats = TestNats::new().await;
    let mut subscriber = nats.subscribe("product.deleted").await;

    let publisher = NatsEventPublisher::new(nats.client());
    publisher
        .publish(ProductEvent::Deleted.topic(), b"\"abc123\"".to_vec())
        .await
        .unwrap();

    let message = TestNats::next_message(&mut subscriber).await;
    assert_eq!(message.payload.as_ref(), b"\"abc123\"");
}

// ============================================================================
// Full stack
// ============================================================================

#[tokio::test]
#[ignore] // Requires Docker
async fn test_service_against_real_backends() {
    let mongo = TestMongo::new().await;
    let redis = TestRedis::new().await;
    let nats = TestNats::new().await;

    let mut created_events = nats.subscribe("product.created").await;

    let cache_conn = redis.connection_manager_for_db(2).await;
    let service = ProductService::new(
        MongoProductRepository::new(&mongo.database("full_stack")),
        RedisProductCache::new(cache_conn.clone()),
        NatsEventPublisher::new(nats.client()),
    );

    let created = service
        .create_product(CreateProduct {
            name: "Widget".to_string(),
            price: 9.99,
        })
        .await
        .unwrap();

    let event = TestNats::next_message(&mut created_events).await;
    let payload: Product = serde_json::from_slice(&event.payload).unwrap();
    assert_eq!(payload.id, created.id);

    let cache = RedisProductCache::new(cache_conn);
    assert!(cache.exists(&cache_key(&created.id)).await.unwrap());

    service.delete_product(&created.id).await.unwrap();
    assert!(!cache.exists(&cache_key(&created.id)).await.unwrap());
    assert!(matches!(
        service.get_product(&created.id).await,
        Err(ProductError::NotFound(_))
    ));
}

#[tokio::test]
#[ignore] // Requires Docker
async fn test_corrupt_cache_entry_falls_back_to_store() {
    use database::redis::AsyncCommands;

    let mongo = TestMongo::new().await;
    let redis = TestRedis::new().await;
    let nats = TestNats::new().await;

    let mut cache_conn = redis.connection_manager().await;
    let service = ProductService::new(
        MongoProductRepository::new(&mongo.database("corrupt_cache")),
        RedisProductCache::new(cache_conn.clone()),
        NatsEventPublisher::new(nats.client()),
    );

    let created = service
        .create_product(CreateProduct {
            name: "Widget".to_string(),
            price: 9.99,
        })
        .await
        .unwrap();
    let key = cache_key(&created.id);

    cache_conn
        .set::<_, _, ()>(&key, "{not json")
        .await
        .unwrap();

    let cache = RedisProductCache::new(cache_conn);
    assert!(matches!(cache.get(&key).await, Err(ProductError::Cache(_))));

    let fetched = service.get_product(&created.id).await.unwrap();
    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.name, "Widget");
    assert_eq!(fetched.price, 9.99);

    // The read repairs the entry
    let repaired = cache.get(&key).await.unwrap().unwrap();
    assert_eq!(repaired.id, created.id);
}
