//! Readiness endpoint backed by real MongoDB and Redis probes.

use crate::state::ReadyState;
use axum::{extract::State, response::Response, routing::get, Router};
use axum_helpers::server::{run_health_checks, HealthCheckFuture};
use database::HealthStatus;

/// `/ready`: 200 when MongoDB and Redis both answer a ping, 503 otherwise.
pub fn ready_router(state: ReadyState) -> Router {
    Router::new()
        .route("/ready", get(ready_handler))
        .with_state(state)
}

async fn ready_handler(State(state): State<ReadyState>) -> Response {
    let checks: Vec<(&str, HealthCheckFuture<'_>)> = vec![
        (
            "mongodb",
            Box::pin(async {
                probe(database::mongodb::check_health_detailed(&state.mongo).await)
            }),
        ),
        (
            "redis",
            Box::pin(async {
                probe(database::redis::check_health_detailed(&state.redis).await)
            }),
        ),
    ];

    run_health_checks(checks).await
}

fn probe(status: HealthStatus) -> Result<(), String> {
    if status.healthy {
        return Ok(());
    }
    Err(status
        .message
        .unwrap_or_else(|| "health check failed".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_probe_keeps_failure_message() {
        let status = HealthStatus {
            healthy: false,
            message: Some("connection refused".to_string()),
            response_time_ms: 3,
        };
        assert_eq!(probe(status), Err("connection refused".to_string()));
    }

    #[test]
    fn test_probe_healthy() {
        let status = HealthStatus {
            healthy: true,
            message: None,
            response_time_ms: 1,
        };
        assert!(probe(status).is_ok());
    }
}
