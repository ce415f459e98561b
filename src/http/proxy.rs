//! RPC-to-HTTP protocol translation.
//!
//! # Responsibilities
//! - Translate one unary completion into one HTTP response
//! - Relay a server stream as an incrementally written JSON array
//! - Map the error taxonomy onto 400/502/504
//!
//! # Design Decisions
//! - The unary deadline wraps body decoding and the call together, so exactly
//!   one of {504, 400, 502, 200} is produced per request
//! - The unary call runs as a detached task; a timeout abandons it and the
//!   eventual result is dropped, since the client has already received 504
//! - A mid-stream error closes the JSON array cleanly: headers are already on
//!   the wire, so the failure is logged and the body stays valid JSON

use std::convert::Infallible;
use std::sync::Arc;
use std::time::Duration;

use axum::body::{Body, Bytes};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::Json;
use futures_util::StreamExt;

use crate::client::{CallError, GrpcClient};
use crate::error::GatewayError;
use crate::http::body::read_json_body;

/// Proxy one unary call: decode, invoke once, answer with the single result.
pub(crate) async fn proxy_unary(
    client: Arc<dyn GrpcClient>,
    local_name: String,
    body: Body,
    timeout_ms: u64,
) -> Response {
    tracing::debug!(method = %local_name, "proxying unary call");

    let deadline = Duration::from_millis(timeout_ms);
    let call = {
        let client = Arc::clone(&client);
        let local_name = local_name.clone();
        async move {
            let message = read_json_body(body).await?;
            // Detached so a timeout leaves the call running to completion
            // with its result discarded.
            let handle =
                tokio::spawn(async move { client.call_unary(&local_name, message).await });
            match handle.await {
                Ok(result) => result.map_err(GatewayError::from),
                Err(join_err) => Err(GatewayError::RemoteCall(CallError::internal(format!(
                    "call task failed: {join_err}"
                )))),
            }
        }
    };

    match tokio::time::timeout(deadline, call).await {
        Ok(Ok(value)) => {
            tracing::debug!(method = %local_name, "unary call succeeded");
            Json(value).into_response()
        }
        Ok(Err(err)) => {
            tracing::debug!(method = %local_name, error = %err, "unary call failed");
            failure_response(&err)
        }
        Err(_elapsed) => {
            tracing::debug!(method = %local_name, timeout_ms, "unary call timed out");
            failure_response(&GatewayError::DeadlineExceeded(timeout_ms))
        }
    }
}

/// Proxy one server-streaming call: decode, invoke once, relay each item as
/// an element of a JSON array written as it arrives.
pub(crate) async fn proxy_server_stream(
    client: Arc<dyn GrpcClient>,
    local_name: String,
    body: Body,
) -> Response {
    tracing::debug!(method = %local_name, "proxying server stream call");

    let message = match read_json_body(body).await {
        Ok(value) => value,
        Err(err) => return failure_response(&err),
    };

    let mut items = client.call_server_stream(&local_name, message).await;

    let array = async_stream::stream! {
        yield Ok::<_, Infallible>(Bytes::from_static(b"["));
        let mut first = true;
        while let Some(item) = items.next().await {
            match item {
                Ok(value) => {
                    let mut chunk = Vec::new();
                    if !first {
                        chunk.push(b',');
                    }
                    match serde_json::to_writer(&mut chunk, &value) {
                        Ok(()) => {
                            first = false;
                            yield Ok(Bytes::from(chunk));
                        }
                        Err(err) => {
                            tracing::warn!(
                                method = %local_name,
                                error = %err,
                                "unserializable stream item, closing array"
                            );
                            break;
                        }
                    }
                }
                Err(err) => {
                    tracing::warn!(
                        method = %local_name,
                        error = %err,
                        "server stream failed mid-flight, closing array"
                    );
                    break;
                }
            }
        }
        tracing::debug!(method = %local_name, "server stream ended");
        yield Ok(Bytes::from_static(b"]"));
    };

    (
        [(header::CONTENT_TYPE, "application/json")],
        Body::from_stream(array),
    )
        .into_response()
}

/// One place owns the error-to-response table.
fn failure_response(err: &GatewayError) -> Response {
    let status = err.http_status();
    match err {
        GatewayError::MalformedBody(_) => (status, err.to_string()).into_response(),
        GatewayError::RemoteCall(call_err) => (status, Json(call_err.clone())).into_response(),
        // The HTTP client has already moved on; say nothing more.
        GatewayError::DeadlineExceeded(_) => status.into_response(),
    }
}
