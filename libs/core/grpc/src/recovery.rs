//! Panic recovery for tonic servers.
//!
//! A panic inside a generated service or handler would otherwise tear down
//! the HTTP/2 stream without a gRPC status. [`GrpcRecoveryLayer`] catches it
//! at the transport boundary, logs the payload and answers with
//! `grpc-status: 13` (INTERNAL).

use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::task::{Context, Poll};

use futures::FutureExt;
use futures::future::BoxFuture;
use http::HeaderValue;
use tower::{Layer, Service};

const GRPC_MESSAGE: &str = "grpc-message";

/// Layer producing [`GrpcRecovery`] services.
#[derive(Clone, Copy, Debug, Default)]
pub struct GrpcRecoveryLayer;

impl<S> Layer<S> for GrpcRecoveryLayer {
    type Service = GrpcRecovery<S>;

    fn layer(&self, inner: S) -> Self::Service {
        GrpcRecovery { inner }
    }
}

/// Service wrapper that converts panics into `INTERNAL` responses.
#[derive(Clone, Debug)]
pub struct GrpcRecovery<S> {
    inner: S,
}

impl<S, ReqBody, ResBody> Service<http::Request<ReqBody>> for GrpcRecovery<S>
where
    S: Service<http::Request<ReqBody>, Response = http::Response<ResBody>>,
    S::Future: Send + 'static,
    ResBody: Default + Send + 'static,
{
    type Response = http::Response<ResBody>;
    type Error = S::Error;
    type Future = BoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: http::Request<ReqBody>) -> Self::Future {
        let path = req.uri().path().to_owned();

        // Building the future can panic too, not only polling it.
        let future = match std::panic::catch_unwind(AssertUnwindSafe(|| self.inner.call(req))) {
            Ok(future) => future,
            Err(payload) => {
                let response = panic_response(&path, payload);
                return Box::pin(async move { Ok(response) });
            }
        };

        Box::pin(async move {
            match AssertUnwindSafe(future).catch_unwind().await {
                Ok(result) => result,
                Err(payload) => Ok(panic_response(&path, payload)),
            }
        })
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(s) = payload.downcast_ref::<&'static str>() {
        s
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.as_str()
    } else {
        "unknown panic payload"
    }
}

fn panic_response<B: Default>(path: &str, payload: Box<dyn Any + Send>) -> http::Response<B> {
    tracing::error!(
        method = %path,
        panic = %panic_message(payload.as_ref()),
        "gRPC handler panicked"
    );

    let mut response = http::Response::new(B::default());
    let headers = response.headers_mut();
    headers.insert(
        tonic::Status::GRPC_STATUS,
        (tonic::Code::Internal as i32).into(),
    );
    headers.insert(
        http::header::CONTENT_TYPE,
        tonic::metadata::GRPC_CONTENT_TYPE,
    );
    headers.insert(GRPC_MESSAGE, HeaderValue::from_static("internal%20error"));
    response
}
