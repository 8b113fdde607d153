//! gRPC service implementation for Products

use async_trait::async_trait;
use grpc_helpers::ToTonicOption;
use rpc::product::product_service_server::ProductService as ProductRpc;
use rpc::product::{
    CreateProductRequest, CreateProductResponse, DeleteProductRequest, DeleteProductResponse,
    GetProductByIdRequest, GetProductByIdResponse, ListProductsRequest, ListProductsResponse,
    UpdateProductRequest, UpdateProductResponse,
};
use tonic::{Request, Response, Status};

use crate::cache::ProductCache;
use crate::events::EventPublisher;
use crate::models::{CreateProduct, Product, UpdateProduct};
use crate::repository::ProductRepository;
use crate::service::ProductService;

/// gRPC implementation of `product.ProductService`
pub struct ProductGrpcService<R, C, P> {
    service: ProductService<R, C, P>,
}

impl<R, C, P> ProductGrpcService<R, C, P> {
    pub fn new(service: ProductService<R, C, P>) -> Self {
        Self { service }
    }
}

impl From<Product> for rpc::product::Product {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            price: product.price,
            created_at: product.created_at.timestamp(),
            updated_at: product.updated_at.timestamp(),
        }
    }
}

#[async_trait]
impl<R, C, P> ProductRpc for ProductGrpcService<R, C, P>
where
    R: ProductRepository + 'static,
    C: ProductCache + 'static,
    P: EventPublisher + 'static,
{
    async fn create_product(
        &self,
        request: Request<CreateProductRequest>,
    ) -> Result<Response<CreateProductResponse>, Status> {
        let req = request.into_inner();

        let product = self
            .service
            .create_product(CreateProduct {
                name: req.name,
                price: req.price,
            })
            .await?;

        Ok(Response::new(CreateProductResponse { id: product.id }))
    }

    async fn get_product_by_id(
        &self,
        request: Request<GetProductByIdRequest>,
    ) -> Result<Response<GetProductByIdResponse>, Status> {
        let id = request.into_inner().id;
        let product = self.service.get_product(&id).await?;

        Ok(Response::new(GetProductByIdResponse {
            product: Some(product.into()),
        }))
    }

    async fn update_product(
        &self,
        request: Request<UpdateProductRequest>,
    ) -> Result<Response<UpdateProductResponse>, Status> {
        let product = request
            .into_inner()
            .product
            .ok_or_invalid("product is required")?;

        self.service
            .update_product(
                &product.id,
                UpdateProduct {
                    name: product.name,
                    price: product.price,
                },
            )
            .await?;

        Ok(Response::new(UpdateProductResponse { success: true }))
    }

    async fn delete_product(
        &self,
        request: Request<DeleteProductRequest>,
    ) -> Result<Response<DeleteProductResponse>, Status> {
        let id = request.into_inner().id;
        self.service.delete_product(&id).await?;

        Ok(Response::new(DeleteProductResponse { success: true }))
    }

    async fn list_products(
        &self,
        _request: Request<ListProductsRequest>,
    ) -> Result<Response<ListProductsResponse>, Status> {
        let products = self.service.list_products().await?;

        Ok(Response::new(ListProductsResponse {
            products: products.into_iter().map(Into::into).collect(),
        }))
    }
}
