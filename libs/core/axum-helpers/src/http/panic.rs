use std::any::Any;

use axum::{http::StatusCode, response::Response};
use tower_http::catch_panic::CatchPanicLayer;

use crate::errors::{ErrorCode, ErrorResponse};

type PanicHandler = fn(Box<dyn Any + Send + 'static>) -> Response;

/// Extracts a printable message from a panic payload.
pub fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(s) = payload.downcast_ref::<&'static str>() {
        s
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.as_str()
    } else {
        "unknown panic payload"
    }
}

/// Converts a handler panic into a 500 with the standard error body.
/// The panic message is logged, never returned to the client.
pub fn handle_panic(payload: Box<dyn Any + Send + 'static>) -> Response {
    tracing::error!(
        error_code = ErrorCode::InternalError.code(),
        panic = %panic_message(payload.as_ref()),
        "Request handler panicked"
    );

    ErrorResponse::new(
        ErrorCode::InternalError,
        ErrorCode::InternalError.default_message(),
    )
    .into_response_with(StatusCode::INTERNAL_SERVER_ERROR)
}

/// `CatchPanicLayer` wired to [`handle_panic`].
pub fn panic_recovery_layer() -> CatchPanicLayer<PanicHandler> {
    CatchPanicLayer::custom(handle_panic as PanicHandler)
}
