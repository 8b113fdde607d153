//! gRPC adapter tests
//!
//! Most tests call the generated trait directly; the last one runs a real
//! tonic server on a loopback port and talks to it with the generated client.

mod common;

use common::{Harness, InMemoryCache, InMemoryRepository, RecordingPublisher};
use domain_products::ProductGrpcService;
use rpc::product::product_service_client::ProductServiceClient;
use rpc::product::product_service_server::{ProductService as ProductRpc, ProductServiceServer};
use rpc::product::*;
use tokio_stream::wrappers::TcpListenerStream;
use tonic::{Code, Request};

fn grpc(h: &Harness) -> ProductGrpcService<InMemoryRepository, InMemoryCache, RecordingPublisher> {
    ProductGrpcService::new(h.service.clone())
}

async fn create(svc: &impl ProductRpc, name: &str, price: f64) -> String {
    svc.create_product(Request::new(CreateProductRequest {
        name: name.to_string(),
        price,
    }))
    .await
    .unwrap()
    .into_inner()
    .id
}

#[tokio::test]
async fn test_widget_scenario() {
    let h = Harness::with_repository(InMemoryRepository::with_ids(["abc123"]));
    let svc = grpc(&h);

    let id = create(&svc, "Widget", 9.99).await;
    assert_eq!(id, "abc123");

    let product = svc
        .get_product_by_id(Request::new(GetProductByIdRequest { id: id.clone() }))
        .await
        .unwrap()
        .into_inner()
        .product
        .unwrap();
    assert_eq!(product.id, "abc123");
    assert_eq!(product.name, "Widget");
    assert_eq!(product.price, 9.99);
    assert!(product.created_at > 0);

    let updated = svc
        .update_product(Request::new(UpdateProductRequest {
            product: Some(Product {
                id: id.clone(),
                name: "Widget-2".to_string(),
                price: 12.5,
                ..Default::default()
            }),
        }))
        .await
        .unwrap()
        .into_inner();
    assert!(updated.success);

    let product = svc
        .get_product_by_id(Request::new(GetProductByIdRequest { id: id.clone() }))
        .await
        .unwrap()
        .into_inner()
        .product
        .unwrap();
    assert_eq!(product.price, 12.5);

    let deleted = svc
        .delete_product(Request::new(DeleteProductRequest { id: id.clone() }))
        .await
        .unwrap()
        .into_inner();
    assert!(deleted.success);

    let status = svc
        .get_product_by_id(Request::new(GetProductByIdRequest { id }))
        .await
        .unwrap_err();
    assert_eq!(status.code(), Code::NotFound);
}

#[tokio::test]
async fn test_create_invalid_price_is_invalid_argument() {
    let h = Harness::new();

    let status = grpc(&h)
        .create_product(Request::new(CreateProductRequest {
            name: "Widget".to_string(),
            price: 0.0,
        }))
        .await
        .unwrap_err();

    assert_eq!(status.code(), Code::InvalidArgument);
}

#[tokio::test]
async fn test_update_without_product_is_invalid_argument() {
    let h = Harness::new();

    let status = grpc(&h)
        .update_product(Request::new(UpdateProductRequest { product: None }))
        .await
        .unwrap_err();

    assert_eq!(status.code(), Code::InvalidArgument);
}

#[tokio::test]
async fn test_update_unknown_is_not_found() {
    let h = Harness::new();

    let status = grpc(&h)
        .update_product(Request::new(UpdateProductRequest {
            product: Some(Product {
                id: "missing".to_string(),
                name: "Widget".to_string(),
                price: 1.0,
                ..Default::default()
            }),
        }))
        .await
        .unwrap_err();

    assert_eq!(status.code(), Code::NotFound);
}

#[tokio::test]
async fn test_delete_unknown_is_not_found() {
    let h = Harness::new();

    let status = grpc(&h)
        .delete_product(Request::new(DeleteProductRequest {
            id: "missing".to_string(),
        }))
        .await
        .unwrap_err();

    assert_eq!(status.code(), Code::NotFound);
}

#[tokio::test]
async fn test_store_failure_is_internal() {
    let h = Harness::new();
    h.repository.fail();

    let status = grpc(&h)
        .list_products(Request::new(ListProductsRequest {}))
        .await
        .unwrap_err();

    assert_eq!(status.code(), Code::Internal);
    assert_eq!(status.message(), "internal error");
}

#[tokio::test]
async fn test_list_products() {
    let h = Harness::new();
    let svc = grpc(&h);
    create(&svc, "first", 1.0).await;
    create(&svc, "second", 2.0).await;

    let products = svc
        .list_products(Request::new(ListProductsRequest {}))
        .await
        .unwrap()
        .into_inner()
        .products;

    let names: Vec<_> = products.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["first", "second"]);
}

#[tokio::test]
async fn test_round_trip_over_transport() {
    let h = Harness::with_repository(InMemoryRepository::with_ids(["abc123"]));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let server = tonic::transport::Server::builder()
        .add_service(ProductServiceServer::new(grpc(&h)))
        .serve_with_incoming(TcpListenerStream::new(listener));
    tokio::spawn(server);

    let mut client = ProductServiceClient::connect(format!("http://{}", addr))
        .await
        .unwrap();

    let id = client
        .create_product(CreateProductRequest {
            name: "Widget".to_string(),
            price: 9.99,
        })
        .await
        .unwrap()
        .into_inner()
        .id;
    assert_eq!(id, "abc123");

    let status = client
        .get_product_by_id(GetProductByIdRequest {
            id: "missing".to_string(),
        })
        .await
        .unwrap_err();
    assert_eq!(status.code(), Code::NotFound);

    let products = client
        .list_products(ListProductsRequest {})
        .await
        .unwrap()
        .into_inner()
        .products;
    assert_eq!(products.len(), 1);
    assert_eq!(h.publisher.topics(), ["product.created"]);
}
