//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! HTTP request
//!     → layer.rs (dispatcher: route lookup, fallthrough on miss)
//!     → body.rs (accumulate body, decode JSON)
//!     → proxy.rs (unary or server-stream translation)
//!     → client boundary
//!     → HTTP response
//! ```

pub mod body;
pub mod layer;
pub mod proxy;
pub mod server;

pub use layer::GrpcProxyLayer;
pub use server::GatewayServer;
