//! Standalone gateway server.
//!
//! Thin wrapper for deployments where the gateway is the whole HTTP surface:
//! an axum router carrying only the proxy layer and request tracing, with a
//! framework 404 for unmatched paths. Integrators embedding the gateway in an
//! existing router should mount [`GrpcProxyLayer`] themselves instead.

use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::client::GrpcClient;
use crate::config::GatewayConfig;
use crate::http::layer::GrpcProxyLayer;

/// HTTP server exposing the gateway at the root path.
pub struct GatewayServer {
    router: Router,
}

impl GatewayServer {
    /// Build the router: proxy layer first, tracing outermost.
    pub fn new(client: Arc<dyn GrpcClient>, config: GatewayConfig) -> Self {
        let router = Router::new()
            .layer(GrpcProxyLayer::new(client, config))
            .layer(TraceLayer::new_for_http());
        Self { router }
    }

    /// The underlying router, for composing with other routes or serving
    /// through a custom stack.
    pub fn into_router(self) -> Router {
        self.router
    }

    /// Serve until ctrl-c.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "gateway server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("gateway server stopped");
        Ok(())
    }
}

/// Wait for shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received");
}
