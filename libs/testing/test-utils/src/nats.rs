//! NATS test infrastructure
//!
//! Core NATS only. Product events are fire-and-forget, so tests subscribe
//! before acting and then wait a bounded time for the message.

use async_nats::{Client, Message, Subscriber};
use std::time::Duration;
use testcontainers::runners::AsyncRunner;
use testcontainers::{ContainerAsync, ImageExt};
use testcontainers_modules::nats::Nats;

pub use futures::StreamExt;

/// How long [`TestNats::next_message`] waits before failing the test
pub const RECEIVE_TIMEOUT: Duration = Duration::from_secs(5);

/// NATS server in a throwaway container, removed on drop.
///
/// ```no_run
/// use test_utils::TestNats;
///
/// # async fn example() {
/// let nats = TestNats::new().await;
/// let mut deleted = nats.subscribe("product.deleted").await;
///
/// nats.client().publish("product.deleted", "\"abc123\"".into()).await.unwrap();
/// let message = TestNats::next_message(&mut deleted).await;
/// assert_eq!(message.payload.as_ref(), b"\"abc123\"");
/// # }
/// ```
pub struct TestNats {
    _container: ContainerAsync<Nats>,
    client: Client,
    pub connection_string: String,
}

impl TestNats {
    pub async fn new() -> Self {
        let container = Nats::default()
            .with_tag("2-alpine")
            .start()
            .await
            .expect("Failed to start NATS container");

        let host_port = container
            .get_host_port_ipv4(4222)
            .await
            .expect("Failed to get NATS port");

        let connection_string = format!("nats://127.0.0.1:{}", host_port);
        let client = async_nats::connect(&connection_string)
            .await
            .expect("Failed to connect to NATS");

        tracing::info!(port = host_port, "Test NATS ready");

        Self {
            _container: container,
            client,
            connection_string,
        }
    }

    /// Client handle for constructing publishers under test
    pub fn client(&self) -> Client {
        self.client.clone()
    }

    /// Subscribe and flush, so the server knows the interest before the
    /// test publishes anything.
    pub async fn subscribe(&self, subject: &str) -> Subscriber {
        let subscriber = self
            .client
            .subscribe(subject.to_string())
            .await
            .expect("Failed to subscribe");
        self.client.flush().await.expect("Failed to flush NATS");
        subscriber
    }

    /// Next message on `subscriber`, panicking after [`RECEIVE_TIMEOUT`]
    pub async fn next_message(subscriber: &mut Subscriber) -> Message {
        tokio::time::timeout(RECEIVE_TIMEOUT, subscriber.next())
            .await
            .expect("Timeout waiting for message")
            .expect("Subscription closed")
    }

    pub fn connection_string(&self) -> &str {
        &self.connection_string
    }
}
