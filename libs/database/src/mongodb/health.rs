use mongodb::Client;
use mongodb::bson::doc;
use std::time::Instant;
use tracing::debug;

use crate::HealthStatus;

async fn ping(client: &Client) -> mongodb::error::Result<()> {
    client
        .database("admin")
        .run_command(doc! { "ping": 1 })
        .await
        .map(|_| ())
}

/// Check MongoDB health with a `ping` command against `admin`
pub async fn check_health(client: &Client) -> bool {
    ping(client).await.is_ok()
}

/// Check MongoDB health, reporting latency and the error message on failure
pub async fn check_health_detailed(client: &Client) -> HealthStatus {
    let start = Instant::now();
    let status = HealthStatus::from_probe(start, ping(client).await);
    debug!(healthy = status.healthy, latency_ms = status.response_time_ms, "MongoDB health check");
    status
}
