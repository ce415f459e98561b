//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Options recognized by the gateway.
///
/// Immutable after construction; the route tables are built from these flags
/// exactly once and never rebuilt.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct GatewayConfig {
    /// Register routes for unary methods.
    pub proxy_unary_calls: bool,

    /// Register routes for server-streaming methods.
    pub proxy_server_stream_calls: bool,

    /// Deadline in milliseconds after which an in-flight unary call is
    /// abandoned and 504 returned.
    pub unary_calls_timeout_ms: u64,

    /// Deadline in milliseconds reserved for streaming calls. Accepted and
    /// validated but not yet wired to an active timer.
    pub server_stream_calls_timeout_ms: u64,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            proxy_unary_calls: true,
            proxy_server_stream_calls: true,
            unary_calls_timeout_ms: 5000,
            server_stream_calls_timeout_ms: 10_000,
        }
    }
}
