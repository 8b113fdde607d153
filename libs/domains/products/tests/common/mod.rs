//! In-memory adapters for exercising the service and both transports
//! without MongoDB, Redis or NATS.
//!
//! Each fake is `Clone` and shares its state, so a test can keep a handle
//! and inspect what the service did after handing a clone over.

#![allow(dead_code)]

use async_trait::async_trait;
use chrono::Utc;
use domain_products::*;
use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

#[derive(Clone, Default)]
pub struct InMemoryRepository {
    products: Arc<Mutex<Vec<Product>>>,
    ids: Arc<Mutex<VecDeque<String>>>,
    next_id: Arc<AtomicU64>,
    failing: Arc<AtomicBool>,
}

impl InMemoryRepository {
    /// Hands out `ids` in order before falling back to generated ones.
    pub fn with_ids<I: IntoIterator<Item = &'static str>>(ids: I) -> Self {
        let repo = Self::default();
        repo.ids
            .lock()
            .unwrap()
            .extend(ids.into_iter().map(str::to_string));
        repo
    }

    pub fn fail(&self) {
        self.failing.store(true, Ordering::SeqCst);
    }

    pub fn stored(&self, id: &str) -> Option<Product> {
        self.products
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == id)
            .cloned()
    }

    fn check(&self) -> ProductResult<()> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(ProductError::Database("store unavailable".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl ProductRepository for InMemoryRepository {
    async fn create(&self, input: CreateProduct) -> ProductResult<Product> {
        self.check()?;
        let id = self.ids.lock().unwrap().pop_front().unwrap_or_else(|| {
            format!("{:024x}", self.next_id.fetch_add(1, Ordering::SeqCst) + 1)
        });
        let now = Utc::now();
        let product = Product {
            id,
            name: input.name,
            price: input.price,
            created_at: now,
            updated_at: now,
        };
        self.products.lock().unwrap().push(product.clone());
        Ok(product)
    }

    async fn find_by_id(&self, id: &str) -> ProductResult<Option<Product>> {
        self.check()?;
        Ok(self.stored(id))
    }

    async fn update(&self, product: &Product) -> ProductResult<Product> {
        self.check()?;
        let mut products = self.products.lock().unwrap();
        let existing = products
            .iter_mut()
            .find(|p| p.id == product.id)
            .ok_or_else(|| ProductError::NotFound(product.id.clone()))?;

        existing.name = product.name.clone();
        existing.price = product.price;
        existing.updated_at = Utc::now();
        Ok(existing.clone())
    }

    async fn delete(&self, id: &str) -> ProductResult<()> {
        self.check()?;
        let mut products = self.products.lock().unwrap();
        let before = products.len();
        products.retain(|p| p.id != id);
        if products.len() == before {
            return Err(ProductError::NotFound(id.to_string()));
        }
        Ok(())
    }

    async fn find_all(&self) -> ProductResult<Vec<Product>> {
        self.check()?;
        Ok(self.products.lock().unwrap().clone())
    }
}

#[derive(Clone, Default)]
pub struct InMemoryCache {
    entries: Arc<Mutex<HashMap<String, Product>>>,
    failing: Arc<AtomicBool>,
}

impl InMemoryCache {
    pub fn fail(&self) {
        self.failing.store(true, Ordering::SeqCst);
    }

    pub fn cached(&self, key: &str) -> Option<Product> {
        self.entries.lock().unwrap().get(key).cloned()
    }

    /// Put an entry behind the service's back
    pub fn seed(&self, product: Product) {
        self.entries
            .lock()
            .unwrap()
            .insert(cache_key(&product.id), product);
    }

    fn check(&self) -> ProductResult<()> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(ProductError::Cache("connection refused".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl ProductCache for InMemoryCache {
    async fn get(&self, key: &str) -> ProductResult<Option<Product>> {
        self.check()?;
        Ok(self.cached(key))
    }

    async fn set(&self, key: &str, product: &Product, _ttl: Duration) -> ProductResult<()> {
        self.check()?;
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), product.clone());
        Ok(())
    }

    async fn delete(&self, key: &str) -> ProductResult<()> {
        self.check()?;
        self.entries.lock().unwrap().remove(key);
        Ok(())
    }

    async fn exists(&self, key: &str) -> ProductResult<bool> {
        self.check()?;
        Ok(self.entries.lock().unwrap().contains_key(key))
    }
}

#[derive(Clone, Default)]
pub struct RecordingPublisher {
    events: Arc<Mutex<Vec<(String, Vec<u8>)>>>,
    failing: Arc<AtomicBool>,
}

impl RecordingPublisher {
    pub fn fail(&self) {
        self.failing.store(true, Ordering::SeqCst);
    }

    pub fn topics(&self) -> Vec<String> {
        self.events
            .lock()
            .unwrap()
            .iter()
            .map(|(topic, _)| topic.clone())
            .collect()
    }

    pub fn payloads(&self, topic: &str) -> Vec<serde_json::Value> {
        self.events
            .lock()
            .unwrap()
            .iter()
            .filter(|(t, _)| t == topic)
            .map(|(_, payload)| serde_json::from_slice(payload).unwrap())
            .collect()
    }
}

#[async_trait]
impl EventPublisher for RecordingPublisher {
    async fn publish(&self, topic: &str, payload: Vec<u8>) -> ProductResult<()> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(ProductError::Publish("no connection".to_string()));
        }
        self.events
            .lock()
            .unwrap()
            .push((topic.to_string(), payload));
        Ok(())
    }
}

pub type TestService = ProductService<InMemoryRepository, InMemoryCache, RecordingPublisher>;

pub struct Harness {
    pub repository: InMemoryRepository,
    pub cache: InMemoryCache,
    pub publisher: RecordingPublisher,
    pub service: TestService,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_repository(InMemoryRepository::default())
    }

    pub fn with_repository(repository: InMemoryRepository) -> Self {
        let cache = InMemoryCache::default();
        let publisher = RecordingPublisher::default();
        let service = ProductService::new(repository.clone(), cache.clone(), publisher.clone());
        Self {
            repository,
            cache,
            publisher,
            service,
        }
    }
}
