//! The gRPC client boundary.
//!
//! # Responsibilities
//! - Define the contract the gateway needs from a connected gRPC client
//! - Describe callable methods (`MethodDescriptor`) and classify them
//! - Carry RPC-level failures across the boundary (`CallError`)
//!
//! # Design Decisions
//! - Payloads cross the boundary as `serde_json::Value`, keeping the gateway
//!   independent of any generated message types
//! - Invocation is by local method name, mirroring how the route table is keyed
//! - Streaming calls yield items lazily; the stream is finite and not restartable

pub mod descriptor;

use async_trait::async_trait;
use futures_util::stream::BoxStream;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub use descriptor::{MethodDescriptor, MethodKind};

/// Lazy sequence of streamed response items, in arrival order.
pub type ValueStream = BoxStream<'static, Result<Value, CallError>>;

/// An RPC-level failure reported by the remote server.
///
/// `code` follows gRPC status code numbering.
#[derive(Debug, Clone, Serialize, Deserialize, thiserror::Error)]
#[error("{message} (code {code})")]
pub struct CallError {
    pub code: i32,
    pub message: String,
}

impl CallError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// gRPC `UNIMPLEMENTED`.
    pub fn unimplemented(message: impl Into<String>) -> Self {
        Self::new(12, message)
    }

    /// gRPC `INTERNAL`.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(13, message)
    }
}

/// A connected gRPC client the gateway can enumerate and invoke.
///
/// Rust has no runtime introspection of generated client stubs, so
/// implementors register their callable surface explicitly through
/// [`methods`](GrpcClient::methods). The gateway builds its route tables from
/// that list once, at construction, and thereafter invokes methods by their
/// [`local_name`](MethodDescriptor::local_name).
///
/// Calls for a name the implementor does not recognize should report
/// [`CallError::unimplemented`] rather than panic; the gateway only dispatches
/// names it discovered through `methods`, so this is a defensive contract for
/// hand-written implementations.
#[async_trait]
pub trait GrpcClient: Send + Sync {
    /// Every callable method on this client, one descriptor per local binding.
    ///
    /// Duplicate wire paths are tolerated; the gateway keeps the first.
    fn methods(&self) -> Vec<MethodDescriptor>;

    /// Invoke a unary method once. Exactly one response value or one error.
    async fn call_unary(&self, local_name: &str, request: Value) -> Result<Value, CallError>;

    /// Invoke a server-streaming method once, obtaining its item sequence.
    ///
    /// A failure to even start the call surfaces as the first stream item.
    async fn call_server_stream(&self, local_name: &str, request: Value) -> ValueStream;
}
