use super::config::ServerConfig;
use tonic_health::ServingStatus;
use tonic_health::server::HealthReporter;
use tracing::info;

/// Startup and health helpers for tonic servers.
pub struct GrpcServer;

impl GrpcServer {
    /// Log server startup information for a single service.
    pub fn log_startup(config: &ServerConfig, service_name: &str) {
        info!(
            addr = %config.addr_string(),
            service = service_name,
            compression = config.enable_compression,
            "gRPC server starting"
        );
        info!("Health check service enabled (grpc.health.v1.Health)");
    }

    /// Mark `service_name` and the empty service name as serving.
    ///
    /// The empty name is what default Kubernetes gRPC probes query.
    pub async fn setup_health(health_reporter: &HealthReporter, service_name: &str) {
        Self::set_status(health_reporter, service_name, ServingStatus::Serving).await;
        info!(service = service_name, "Service marked as serving");
    }

    /// Mark `service_name` and the empty service name as not serving, so
    /// probes fail while in-flight calls drain.
    pub async fn mark_not_serving(health_reporter: &HealthReporter, service_name: &str) {
        Self::set_status(health_reporter, service_name, ServingStatus::NotServing).await;
        info!(service = service_name, "Service marked as not serving");
    }

    async fn set_status(health_reporter: &HealthReporter, service_name: &str, status: ServingStatus) {
        health_reporter
            .set_service_status(service_name, status)
            .await;
        health_reporter.set_service_status("", status).await;
    }
}
