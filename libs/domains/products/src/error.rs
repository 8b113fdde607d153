use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProductError {
    #[error("Product not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Cache error: {0}")]
    Cache(String),

    #[error("Publish error: {0}")]
    Publish(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type ProductResult<T> = Result<T, ProductError>;

/// Convert ProductError to AppError for standardized error responses
impl From<ProductError> for AppError {
    fn from(err: ProductError) -> Self {
        match err {
            ProductError::NotFound(id) => AppError::NotFound(format!("Product {} not found", id)),
            ProductError::Validation(msg) => AppError::BadRequest(msg),
            ProductError::Database(msg) => AppError::Database(msg),
            ProductError::Cache(msg) => AppError::InternalServerError(msg),
            ProductError::Publish(msg) => AppError::InternalServerError(msg),
            ProductError::Internal(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for ProductError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

/// NotFound → NOT_FOUND, Validation → INVALID_ARGUMENT, anything else → INTERNAL.
/// Internal details stay in the logs.
impl From<ProductError> for tonic::Status {
    fn from(err: ProductError) -> Self {
        match err {
            ProductError::NotFound(id) => {
                tonic::Status::not_found(format!("Product {} not found", id))
            }
            ProductError::Validation(msg) => tonic::Status::invalid_argument(msg),
            other => {
                tracing::error!(error = %other, "Product operation failed");
                tonic::Status::internal("internal error")
            }
        }
    }
}

impl From<mongodb::error::Error> for ProductError {
    fn from(err: mongodb::error::Error) -> Self {
        ProductError::Database(err.to_string())
    }
}

impl From<redis::RedisError> for ProductError {
    fn from(err: redis::RedisError) -> Self {
        ProductError::Cache(err.to_string())
    }
}
