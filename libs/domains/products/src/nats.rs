//! NATS implementation of EventPublisher

use async_trait::async_trait;
use tracing::instrument;

use crate::error::{ProductError, ProductResult};
use crate::events::EventPublisher;

/// Publishes each event on the subject named by its topic. Core NATS only,
/// no JetStream acknowledgement.
#[derive(Clone)]
pub struct NatsEventPublisher {
    client: async_nats::Client,
}

impl NatsEventPublisher {
    pub fn new(client: async_nats::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl EventPublisher for NatsEventPublisher {
    #[instrument(skip(self, payload), fields(bytes = payload.len()))]
    async fn publish(&self, topic: &str, payload: Vec<u8>) -> ProductResult<()> {
        self.client
            .publish(topic.to_string(), payload.into())
            .await
            .map_err(|e| ProductError::Publish(e.to_string()))
    }
}
