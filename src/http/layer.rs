//! Request dispatcher, packaged as a `tower` middleware.
//!
//! # Responsibilities
//! - Build the route tables once, at construction
//! - Match each request path against the unary then streaming table
//! - Hand unmatched requests to the inner service untouched
//!
//! # Design Decisions
//! - Matching is exact-string and case-sensitive against the path as
//!   received: no trailing-slash normalization, no query handling
//! - The layer writes nothing for unmatched paths; a 404 (or whatever else)
//!   is the surrounding router's business
//! - Shared state lives behind one `Arc` so cloning the service is cheap

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use axum::body::Body;
use axum::http::Request;
use axum::response::Response;
use tower::{Layer, Service};

use crate::client::GrpcClient;
use crate::config::GatewayConfig;
use crate::http::proxy;
use crate::routing::RouteTable;

struct GatewayCore {
    client: Arc<dyn GrpcClient>,
    routes: RouteTable,
    config: GatewayConfig,
}

/// Mountable middleware proxying matched paths to the gRPC client.
///
/// Apply with [`axum::Router::layer`] at any base path; requests whose path
/// matches a discovered method are answered here, everything else reaches the
/// wrapped router unchanged.
#[derive(Clone)]
pub struct GrpcProxyLayer {
    core: Arc<GatewayCore>,
}

impl GrpcProxyLayer {
    /// Discover the client's methods and build the route tables. Runs once;
    /// the tables never change afterwards.
    pub fn new(client: Arc<dyn GrpcClient>, config: GatewayConfig) -> Self {
        let routes = RouteTable::build(&client.methods(), &config);
        tracing::debug!(options = ?config, "gRPC gateway constructed");
        if config.proxy_unary_calls {
            tracing::debug!(paths = routes.unary_len(), "unary routes registered");
        } else {
            tracing::debug!("unary calls are not proxied");
        }
        if config.proxy_server_stream_calls {
            tracing::debug!(paths = routes.stream_len(), "server stream routes registered");
        } else {
            tracing::debug!("server stream calls are not proxied");
        }

        Self {
            core: Arc::new(GatewayCore {
                client,
                routes,
                config,
            }),
        }
    }
}

impl<S> Layer<S> for GrpcProxyLayer {
    type Service = GrpcProxy<S>;

    fn layer(&self, inner: S) -> Self::Service {
        GrpcProxy {
            core: Arc::clone(&self.core),
            inner,
        }
    }
}

/// The dispatcher service produced by [`GrpcProxyLayer`].
#[derive(Clone)]
pub struct GrpcProxy<S> {
    core: Arc<GatewayCore>,
    inner: S,
}

impl<S> Service<Request<Body>> for GrpcProxy<S>
where
    S: Service<Request<Body>, Response = Response> + Clone + Send + 'static,
    S::Future: Send + 'static,
{
    type Response = Response;
    type Error = S::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Response, S::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), S::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, request: Request<Body>) -> Self::Future {
        let path = request.uri().path().to_string();

        if let Some(name) = self.core.routes.unary_route(&path) {
            let name = name.to_string();
            let core = Arc::clone(&self.core);
            let body = request.into_body();
            return Box::pin(async move {
                Ok(proxy::proxy_unary(
                    Arc::clone(&core.client),
                    name,
                    body,
                    core.config.unary_calls_timeout_ms,
                )
                .await)
            });
        }

        if let Some(name) = self.core.routes.stream_route(&path) {
            let name = name.to_string();
            let core = Arc::clone(&self.core);
            let body = request.into_body();
            return Box::pin(async move {
                Ok(proxy::proxy_server_stream(Arc::clone(&core.client), name, body).await)
            });
        }

        // Fallthrough: the standard readiness dance so the clone left in
        // `self` is the one that has not yet reported ready.
        let clone = self.inner.clone();
        let mut inner = std::mem::replace(&mut self.inner, clone);
        Box::pin(async move { inner.call(request).await })
    }
}
