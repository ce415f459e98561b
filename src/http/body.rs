//! Request body accumulation and JSON decoding.

use axum::body::Body;
use serde_json::Value;

use crate::error::GatewayError;

/// Accumulate the full request body and parse it as a single JSON value.
///
/// No size limit is enforced here; the surrounding HTTP layer owns limits.
/// Any failure, including an empty body, is [`GatewayError::MalformedBody`].
pub async fn read_json_body(body: Body) -> Result<Value, GatewayError> {
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .map_err(|err| GatewayError::MalformedBody(err.to_string()))?;

    serde_json::from_slice(&bytes).map_err(|err| GatewayError::MalformedBody(err.to_string()))
}
