//! HTTP/JSON gateway middleware for gRPC clients.
//!
//! Given a connected gRPC client, the gateway builds a read-only route table
//! from the client's method descriptors and proxies matching HTTP requests to
//! the corresponding RPC call:
//!
//! ```text
//! HTTP request
//!     → dispatcher (http/layer.rs: exact path lookup, fallthrough on miss)
//!     → body reader (http/body.rs: accumulate + JSON decode)
//!     → unary proxy or stream proxy (http/proxy.rs)
//!     → GrpcClient (client/mod.rs, implemented by the integrator)
//!     → HTTP response (single JSON value, or incrementally streamed array)
//! ```
//!
//! Unary methods answer with a single JSON body; server-streaming methods
//! answer with a JSON array written incrementally as items arrive. Methods
//! that stream their requests are never proxied. Unmatched paths are handed
//! back to the surrounding router untouched.

// Core subsystems
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod routing;

// Cross-cutting concerns
pub mod observability;

pub use client::{CallError, GrpcClient, MethodDescriptor, MethodKind, ValueStream};
pub use config::GatewayConfig;
pub use error::GatewayError;
pub use http::{GatewayServer, GrpcProxyLayer};
