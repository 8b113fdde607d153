use redis::aio::ConnectionManager;
use std::time::Instant;
use tracing::debug;

use crate::HealthStatus;

async fn ping(conn: &mut ConnectionManager) -> Result<(), String> {
    let response: String = redis::cmd("PING")
        .query_async(conn)
        .await
        .map_err(|e| format!("Redis health check failed: {}", e))?;

    if response != "PONG" {
        return Err(format!(
            "Redis PING returned unexpected response: {}",
            response
        ));
    }
    Ok(())
}

/// Check Redis health with a `PING`
pub async fn check_health(conn: &ConnectionManager) -> bool {
    ping(&mut conn.clone()).await.is_ok()
}

/// Check Redis health, reporting latency and the error message on failure
pub async fn check_health_detailed(conn: &ConnectionManager) -> HealthStatus {
    let start = Instant::now();
    let status = HealthStatus::from_probe(start, ping(&mut conn.clone()).await);
    debug!(healthy = status.healthy, latency_ms = status.response_time_ms, "Redis health check");
    status
}
