//! gRPC server: product service plus `grpc.health.v1.Health`

use axum_helpers::ShutdownCoordinator;
use domain_products::ProductGrpcService;
use eyre::WrapErr;
use grpc_helpers::{GrpcRecoveryLayer, GrpcServer, ServerConfig};
use rpc::product::product_service_server::{ProductServiceServer, SERVICE_NAME};
use tonic::codec::CompressionEncoding;
use tonic::transport::Server;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::state::AppService;

/// Serves until `coordinator` fires, then flips the health status to
/// not serving and drains in-flight calls.
pub async fn serve(
    config: ServerConfig,
    service: AppService,
    coordinator: ShutdownCoordinator,
) -> eyre::Result<()> {
    let addr = config.socket_addr()?;

    let (health_reporter, health_service) = tonic_health::server::health_reporter();
    GrpcServer::setup_health(&health_reporter, SERVICE_NAME).await;

    let mut products = ProductServiceServer::new(ProductGrpcService::new(service))
        .max_decoding_message_size(config.max_message_size)
        .max_encoding_message_size(config.max_message_size);
    if config.enable_compression {
        products = products
            .accept_compressed(CompressionEncoding::Zstd)
            .send_compressed(CompressionEncoding::Zstd);
    }

    let shutdown = async move {
        coordinator.cancelled().await;
        GrpcServer::mark_not_serving(&health_reporter, SERVICE_NAME).await;
    };

    GrpcServer::log_startup(&config, SERVICE_NAME);

    Server::builder()
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_grpc())
                .layer(GrpcRecoveryLayer),
        )
        .add_service(health_service)
        .add_service(products)
        .serve_with_shutdown(addr, shutdown)
        .await
        .wrap_err_with(|| format!("gRPC server on {addr} failed"))?;

    info!("gRPC server stopped");
    Ok(())
}
