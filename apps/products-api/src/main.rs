//! Products API - REST and gRPC server

use axum_helpers::server::{create_production_app, create_router, health_router, ShutdownCoordinator};
use core_config::tracing::{init_tracing, install_color_eyre};
use core_config::FromEnv;
use domain_products::{
    handlers, MongoProductRepository, NatsEventPublisher, ProductService, RedisProductCache,
};
use eyre::WrapErr;
use std::time::Duration;
use tracing::{error, info};

mod config;
mod grpc;
mod health;
mod openapi;
mod state;

use config::Config;
use state::ReadyState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output (before any fallible operations)
    install_color_eyre();

    let config = Config::from_env().wrap_err("Invalid configuration")?;

    init_tracing(&config.environment);
    info!(
        name = config.app.name,
        version = config.app.version,
        "Starting Products API"
    );

    // Connect once to every backing service; any failure aborts startup
    let mongo_future = async {
        database::mongodb::connect_from_config(&config.mongodb)
            .await
            .wrap_err("MongoDB connection failed")
    };
    let redis_future = async {
        database::redis::connect_from_config(&config.redis)
            .await
            .wrap_err("Redis connection failed")
    };
    let nats_future = async {
        let client = async_nats::connect(&config.nats.url)
            .await
            .wrap_err("NATS connection failed")?;
        info!("Successfully connected to NATS");
        Ok::<_, eyre::Report>(client)
    };

    let (mongo, redis, nats) = tokio::try_join!(mongo_future, redis_future, nats_future)?;

    let db = mongo.database(config.mongodb.database());
    let service = ProductService::new(
        MongoProductRepository::new(&db),
        RedisProductCache::new(redis.clone()),
        NatsEventPublisher::new(nats.clone()),
    );

    let coordinator = ShutdownCoordinator::new();
    tokio::spawn({
        let coordinator = coordinator.clone();
        async move { coordinator.wait_for_signal().await }
    });

    let grpc_handle = tokio::spawn(grpc::serve(
        config.grpc.clone(),
        service.clone(),
        coordinator.clone(),
    ));

    // Product routes and readiness at the root; docs and middleware around them
    let api_routes = handlers::router(service).merge(health::ready_router(ReadyState {
        mongo: mongo.clone(),
        redis,
    }));
    let app = create_router::<openapi::ApiDoc>(api_routes)
        .wrap_err("Failed to build HTTP router")?
        .merge(health_router(config.app.clone()));

    info!(
        http = %config.server.address(),
        grpc = %config.grpc.addr_string(),
        "Starting Products API servers"
    );

    let http_result = create_production_app(
        app,
        &config.server,
        coordinator.clone(),
        Duration::from_secs(30),
        async move {
            info!("Shutting down: flushing NATS and closing MongoDB");

            tokio::join!(
                async {
                    match nats.flush().await {
                        Ok(_) => info!("NATS connection flushed"),
                        Err(e) => error!(error = %e, "Error flushing NATS"),
                    }
                },
                async {
                    mongo.shutdown().await;
                    info!("MongoDB connection closed");
                }
            );
        },
    )
    .await;

    // Stop the gRPC server too when HTTP exits on its own (e.g. bind failure)
    coordinator.shutdown();

    let grpc_result = grpc_handle.await.wrap_err("gRPC server task panicked")?;

    http_result.wrap_err("HTTP server error")?;
    grpc_result?;

    info!("Products API shutdown complete");
    Ok(())
}
