// @generated
// This file is @generated by prost-build.
/// Product as exchanged over gRPC. Timestamps are Unix seconds (UTC).
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Product {
    #[prost(string, tag="1")]
    pub id: ::prost::alloc::string::String,
    #[prost(string, tag="2")]
    pub name: ::prost::alloc::string::String,
    #[prost(double, tag="3")]
    pub price: f64,
    #[prost(int64, tag="4")]
    pub created_at: i64,
    #[prost(int64, tag="5")]
    pub updated_at: i64,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreateProductRequest {
    #[prost(string, tag="1")]
    pub name: ::prost::alloc::string::String,
    #[prost(double, tag="2")]
    pub price: f64,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreateProductResponse {
    #[prost(string, tag="1")]
    pub id: ::prost::alloc::string::String,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetProductByIdRequest {
    #[prost(string, tag="1")]
    pub id: ::prost::alloc::string::String,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetProductByIdResponse {
    #[prost(message, optional, tag="1")]
    pub product: ::core::option::Option<Product>,
}
/// Only id, name and price of `product` are read.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct UpdateProductRequest {
    #[prost(message, optional, tag="1")]
    pub product: ::core::option::Option<Product>,
}
#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct UpdateProductResponse {
    #[prost(bool, tag="1")]
    pub success: bool,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DeleteProductRequest {
    #[prost(string, tag="1")]
    pub id: ::prost::alloc::string::String,
}
#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct DeleteProductResponse {
    #[prost(bool, tag="1")]
    pub success: bool,
}
#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct ListProductsRequest {
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ListProductsResponse {
    #[prost(message, repeated, tag="1")]
    pub products: ::prost::alloc::vec::Vec<Product>,
}
include!("product.tonic.rs");
// @@protoc_insertion_point(module)
