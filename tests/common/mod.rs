//! Shared fixtures for the gateway integration tests.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::Router;
use futures_util::stream::{self, StreamExt};
use serde_json::{json, Value};
use tokio::net::TcpListener;

use grpc_gateway::{
    CallError, GatewayConfig, GrpcClient, GrpcProxyLayer, MethodDescriptor, ValueStream,
};

/// In-process stand-in for a connected gRPC client, with invocation counters
/// so tests can assert which methods were (not) reached.
#[derive(Default)]
pub struct MockGrpcClient {
    pub unary_invocations: AtomicU32,
    pub stream_invocations: AtomicU32,
    pub slow_completions: AtomicU32,
}

impl MockGrpcClient {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }
}

#[async_trait]
impl GrpcClient for MockGrpcClient {
    fn methods(&self) -> Vec<MethodDescriptor> {
        vec![
            MethodDescriptor::unary("/grpcgateway.TestService/unaryEcho"),
            MethodDescriptor::unary("/grpcgateway.TestService/unaryFails"),
            MethodDescriptor::unary("/grpcgateway.TestService/unarySlow"),
            MethodDescriptor::server_streaming("/grpcgateway.TestService/streamTwo"),
            MethodDescriptor::server_streaming("/grpcgateway.TestService/streamEmpty"),
            MethodDescriptor::server_streaming("/grpcgateway.TestService/streamFails"),
            // Request-streaming shapes: must never be routed.
            MethodDescriptor::new("/grpcgateway.TestService/pushLog", true, false),
            MethodDescriptor::new("/grpcgateway.TestService/chat", true, true),
        ]
    }

    async fn call_unary(&self, local_name: &str, request: Value) -> Result<Value, CallError> {
        self.unary_invocations.fetch_add(1, Ordering::SeqCst);
        match local_name {
            "unaryEcho" => {
                let data = request
                    .get("requestData")
                    .and_then(Value::as_str)
                    .unwrap_or_default();
                Ok(json!({ "responseData": format!("{data}-ok") }))
            }
            "unaryFails" => Err(CallError::new(14, "upstream unavailable")),
            "unarySlow" => {
                tokio::time::sleep(Duration::from_millis(500)).await;
                self.slow_completions.fetch_add(1, Ordering::SeqCst);
                Ok(json!({ "responseData": "late" }))
            }
            other => Err(CallError::unimplemented(format!("unknown method {other}"))),
        }
    }

    async fn call_server_stream(&self, local_name: &str, _request: Value) -> ValueStream {
        self.stream_invocations.fetch_add(1, Ordering::SeqCst);
        let items: Vec<Result<Value, CallError>> = match local_name {
            "streamTwo" => vec![
                Ok(json!({ "responseData": "streamTwoData-0" })),
                Ok(json!({ "responseData": "streamTwoData-1" })),
            ],
            "streamEmpty" => vec![],
            "streamFails" => vec![
                Ok(json!({ "responseData": "streamFailsData-0" })),
                Err(CallError::internal("stream broke")),
            ],
            other => vec![Err(CallError::unimplemented(format!(
                "unknown method {other}"
            )))],
        };
        stream::iter(items).boxed()
    }
}

/// Serve a router on an ephemeral port, returning its address.
pub async fn spawn_router(router: Router) -> SocketAddr {
    grpc_gateway::observability::logging::init("grpc_gateway=debug");
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    addr
}

/// Gateway mounted at the root of an otherwise empty router.
pub async fn spawn_gateway(client: Arc<MockGrpcClient>, config: GatewayConfig) -> SocketAddr {
    spawn_router(Router::new().layer(GrpcProxyLayer::new(client, config))).await
}

/// Gateway mounted under a path prefix, as an express-style sub-app.
#[allow(dead_code)]
pub async fn spawn_nested_gateway(
    client: Arc<MockGrpcClient>,
    config: GatewayConfig,
    prefix: &str,
) -> SocketAddr {
    let inner = Router::new().layer(GrpcProxyLayer::new(client, config));
    spawn_router(Router::new().nest_service(prefix, inner)).await
}

pub fn http_client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}
