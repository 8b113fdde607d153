//! HTTP handlers for Products API

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use axum_helpers::{
    errors::responses::{
        BadRequestValidationResponse, InternalServerErrorResponse, NotFoundResponse,
    },
    ValidatedJson,
};
use utoipa::OpenApi;

use crate::cache::ProductCache;
use crate::error::ProductResult;
use crate::events::EventPublisher;
use crate::models::{CreateProduct, Product, UpdateProduct};
use crate::repository::ProductRepository;
use crate::service::ProductService;

/// OpenAPI documentation for Products API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_products,
        create_product,
        get_product,
        update_product,
        delete_product,
    ),
    components(
        schemas(Product, CreateProduct, UpdateProduct),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Products", description = "Product management endpoints")
    )
)]
pub struct ApiDoc;

/// Create the products router: `/products` and `/products/{id}`
pub fn router<R, C, P>(service: ProductService<R, C, P>) -> Router
where
    R: ProductRepository + 'static,
    C: ProductCache + 'static,
    P: EventPublisher + 'static,
{
    Router::new()
        .route("/products", get(list_products).post(create_product))
        .route(
            "/products/{id}",
            get(get_product).put(update_product).delete(delete_product),
        )
        .with_state(service)
}

/// List all products
#[utoipa::path(
    get,
    path = "/products",
    tag = "Products",
    responses(
        (status = 200, description = "List of products", body = Vec<Product>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_products<R, C, P>(
    State(service): State<ProductService<R, C, P>>,
) -> ProductResult<Json<Vec<Product>>>
where
    R: ProductRepository,
    C: ProductCache,
    P: EventPublisher,
{
    let products = service.list_products().await?;
    Ok(Json(products))
}

/// Create a new product
///
/// Responds 201 with the stored record. Its `id` field carries the new
/// identifier, so clients that only read `{"id"}` keep working.
#[utoipa::path(
    post,
    path = "/products",
    tag = "Products",
    request_body = CreateProduct,
    responses(
        (status = 201, description = "Product created successfully", body = Product),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_product<R, C, P>(
    State(service): State<ProductService<R, C, P>>,
    ValidatedJson(input): ValidatedJson<CreateProduct>,
) -> ProductResult<impl IntoResponse>
where
    R: ProductRepository,
    C: ProductCache,
    P: EventPublisher,
{
    let product = service.create_product(input).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// Get a product by ID
#[utoipa::path(
    get,
    path = "/products/{id}",
    tag = "Products",
    params(
        ("id" = String, Path, description = "Product ID (ObjectId hex)")
    ),
    responses(
        (status = 200, description = "Product found", body = Product),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_product<R, C, P>(
    State(service): State<ProductService<R, C, P>>,
    Path(id): Path<String>,
) -> ProductResult<Json<Product>>
where
    R: ProductRepository,
    C: ProductCache,
    P: EventPublisher,
{
    let product = service.get_product(&id).await?;
    Ok(Json(product))
}

/// Replace a product's name and price
///
/// Responds 200 with the updated record rather than an empty 204.
#[utoipa::path(
    put,
    path = "/products/{id}",
    tag = "Products",
    params(
        ("id" = String, Path, description = "Product ID (ObjectId hex)")
    ),
    request_body = UpdateProduct,
    responses(
        (status = 200, description = "Product updated successfully", body = Product),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_product<R, C, P>(
    State(service): State<ProductService<R, C, P>>,
    Path(id): Path<String>,
    ValidatedJson(input): ValidatedJson<UpdateProduct>,
) -> ProductResult<Json<Product>>
where
    R: ProductRepository,
    C: ProductCache,
    P: EventPublisher,
{
    let product = service.update_product(&id, input).await?;
    Ok(Json(product))
}

/// Delete a product
#[utoipa::path(
    delete,
    path = "/products/{id}",
    tag = "Products",
    params(
        ("id" = String, Path, description = "Product ID (ObjectId hex)")
    ),
    responses(
        (status = 204, description = "Product deleted successfully"),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_product<R, C, P>(
    State(service): State<ProductService<R, C, P>>,
    Path(id): Path<String>,
) -> ProductResult<impl IntoResponse>
where
    R: ProductRepository,
    C: ProductCache,
    P: EventPublisher,
{
    service.delete_product(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
