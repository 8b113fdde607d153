use thiserror::Error;

/// Errors raised while configuring a gRPC server
#[derive(Error, Debug)]
pub enum GrpcError {
    /// Host/port do not form a socket address
    #[error("Invalid listen address '{addr}': {source}")]
    InvalidAddress {
        addr: String,
        #[source]
        source: std::net::AddrParseError,
    },
}

/// Extension trait for `Option<T>` to turn `None` into a `tonic::Status`
pub trait ToTonicOption<T> {
    /// Convert None to a tonic::Status with INVALID_ARGUMENT code
    fn ok_or_invalid(self, message: impl Into<String>) -> Result<T, tonic::Status>;
}

impl<T> ToTonicOption<T> for Option<T> {
    fn ok_or_invalid(self, message: impl Into<String>) -> Result<T, tonic::Status> {
        self.ok_or_else(|| tonic::Status::invalid_argument(message.into()))
    }
}
