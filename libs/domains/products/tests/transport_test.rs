//! HTTP and gRPC share the core validation, so the same input gets the
//! same verdict on both transports.

mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::Harness;
use domain_products::{handlers, ProductGrpcService};
use rpc::product::product_service_server::ProductService as ProductRpc;
use rpc::product::{CreateProductRequest, Product as RpcProduct, UpdateProductRequest};
use serde_json::json;
use tower::ServiceExt; // For oneshot()

async fn http_status(h: &Harness, method: &str, uri: &str, name: &str, price: f64) -> StatusCode {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({"name": name, "price": price})).unwrap(),
        ))
        .unwrap();

    handlers::router(h.service.clone())
        .oneshot(request)
        .await
        .unwrap()
        .status()
}

async fn grpc_create_ok(h: &Harness, name: &str, price: f64) -> bool {
    ProductGrpcService::new(h.service.clone())
        .create_product(tonic::Request::new(CreateProductRequest {
            name: name.to_string(),
            price,
        }))
        .await
        .is_ok()
}

fn names() -> Vec<String> {
    let long = "x".repeat(200);
    vec![
        "Widget".to_string(),
        format!("  {long}  "),
        long.clone(),
        format!("{long}x"),
        format!(" {long}x "),
        String::new(),
        "   ".to_string(),
    ]
}

#[tokio::test]
async fn test_create_verdicts_match_across_transports() {
    for name in names() {
        let http_ok = http_status(&Harness::new(), "POST", "/products", &name, 1.0).await
            == StatusCode::CREATED;
        let grpc_ok = grpc_create_ok(&Harness::new(), &name, 1.0).await;

        assert_eq!(http_ok, grpc_ok, "create verdicts differ for {name:?}");
    }
}

#[tokio::test]
async fn test_update_verdicts_match_across_transports() {
    for name in names() {
        let h = Harness::new();
        let id = h
            .service
            .create_product(domain_products::CreateProduct {
                name: "Widget".to_string(),
                price: 1.0,
            })
            .await
            .unwrap()
            .id;

        let http_ok =
            http_status(&h, "PUT", &format!("/products/{id}"), &name, 2.0).await == StatusCode::OK;
        let grpc_ok = ProductGrpcService::new(h.service.clone())
            .update_product(tonic::Request::new(UpdateProductRequest {
                product: Some(RpcProduct {
                    id: id.clone(),
                    name: name.clone(),
                    price: 2.0,
                    ..Default::default()
                }),
            }))
            .await
            .is_ok();

        assert_eq!(http_ok, grpc_ok, "update verdicts differ for {name:?}");
    }
}
