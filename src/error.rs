//! Gateway error taxonomy and its HTTP status mapping.

use axum::http::StatusCode;

use crate::client::CallError;

/// Everything that can go wrong while proxying one request.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// The request body could not be read or decoded as JSON. Surfaced as 400;
    /// the RPC method is never invoked.
    #[error("malformed request body: {0}")]
    MalformedBody(String),

    /// The remote server reported a failure. Surfaced as 502 with the error
    /// payload as the body.
    #[error("remote call failed: {0}")]
    RemoteCall(#[from] CallError),

    /// A unary call outlived its configured deadline. Surfaced as 504 with an
    /// empty body; the call's eventual result is discarded.
    #[error("deadline exceeded after {0}ms")]
    DeadlineExceeded(u64),
}

impl GatewayError {
    pub fn http_status(&self) -> StatusCode {
        match self {
            GatewayError::MalformedBody(_) => StatusCode::BAD_REQUEST,
            GatewayError::RemoteCall(_) => StatusCode::BAD_GATEWAY,
            GatewayError::DeadlineExceeded(_) => StatusCode::GATEWAY_TIMEOUT,
        }
    }
}
