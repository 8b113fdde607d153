use std::time::Instant;

/// Outcome of a single store health probe
#[derive(Debug, Clone)]
pub struct HealthStatus {
    /// Whether the store answered the probe
    pub healthy: bool,
    /// Error details when unhealthy
    pub message: Option<String>,
    /// Round-trip time of the probe in milliseconds
    pub response_time_ms: u64,
}

impl HealthStatus {
    pub(crate) fn from_probe<E: std::fmt::Display>(started: Instant, result: Result<(), E>) -> Self {
        let response_time_ms = started.elapsed().as_millis() as u64;
        match result {
            Ok(()) => Self {
                healthy: true,
                message: None,
                response_time_ms,
            },
            Err(e) => Self {
                healthy: false,
                message: Some(e.to_string()),
                response_time_ms,
            },
        }
    }
}
