//! Redis test infrastructure

use redis::Client;
use redis::aio::ConnectionManager;
use testcontainers::runners::AsyncRunner;
use testcontainers::{ContainerAsync, ImageExt};
use testcontainers_modules::redis::Redis;

/// Redis server in a throwaway container, removed on drop.
///
/// Services select a logical database from configuration, so connections
/// can be opened against any index.
///
/// ```no_run
/// use test_utils::TestRedis;
/// use redis::AsyncCommands;
///
/// # async fn example() {
/// let redis = TestRedis::new().await;
/// let mut conn = redis.connection_manager_for_db(2).await;
///
/// conn.set::<_, _, ()>("product:abc123", "{}").await.unwrap();
/// # }
/// ```
pub struct TestRedis {
    _container: ContainerAsync<Redis>,
    pub connection_string: String,
}

impl TestRedis {
    pub async fn new() -> Self {
        let container = Redis::default()
            .with_tag("8-alpine")
            .start()
            .await
            .expect("Failed to start Redis container");

        let host_port = container
            .get_host_port_ipv4(6379)
            .await
            .expect("Failed to get Redis port");

        tracing::info!(port = host_port, "Test Redis ready");

        Self {
            _container: container,
            connection_string: format!("redis://127.0.0.1:{}", host_port),
        }
    }

    /// Connection to database 0
    pub async fn connection_manager(&self) -> ConnectionManager {
        self.connection_manager_for_db(0).await
    }

    /// Reconnecting connection to logical database `db`, the same kind the
    /// services hold
    pub async fn connection_manager_for_db(&self, db: u8) -> ConnectionManager {
        let client = Client::open(self.url_for_db(db)).expect("Failed to create Redis client");
        ConnectionManager::new(client)
            .await
            .expect("Failed to connect to Redis")
    }

    pub fn url_for_db(&self, db: u8) -> String {
        format!("{}/{}", self.connection_string, db)
    }

    pub fn connection_string(&self) -> &str {
        &self.connection_string
    }
}
