//! Route table construction and lookup.
//!
//! # Responsibilities
//! - Enumerate and deduplicate the client's method descriptors
//! - Classify each method and register it in the matching table
//! - Answer exact-match path lookups for the dispatcher
//!
//! # Design Decisions
//! - Built once at gateway construction, immutable after (read concurrently
//!   without locks)
//! - Each method registers under two path variants, since HTTP conventions
//!   and gRPC naming disagree on the capitalization of the method segment
//! - Duplicate keys overwrite silently; first descriptor per wire path wins
//! - A disabled config flag leaves its table empty, so those paths fall
//!   through to the surrounding router

use std::collections::{HashMap, HashSet};

use crate::client::descriptor::{last_segment, lower_first, upper_first};
use crate::client::{MethodDescriptor, MethodKind};
use crate::config::GatewayConfig;

/// Read-only mapping from HTTP path to locally invocable method name, split
/// by proxy behavior.
#[derive(Debug, Default)]
pub struct RouteTable {
    unary: HashMap<String, String>,
    server_stream: HashMap<String, String>,
}

impl RouteTable {
    /// Build both tables from the client's callable surface. Runs exactly
    /// once per gateway instance.
    pub fn build(methods: &[MethodDescriptor], config: &GatewayConfig) -> Self {
        let mut table = Self::default();
        let mut seen = HashSet::new();

        for method in methods {
            if method.wire_path.is_empty() || !seen.insert(method.wire_path.as_str()) {
                continue;
            }
            match method.kind() {
                MethodKind::Unary if config.proxy_unary_calls => {
                    register(&mut table.unary, method);
                }
                MethodKind::ServerStreaming if config.proxy_server_stream_calls => {
                    register(&mut table.server_stream, method);
                }
                _ => {}
            }
        }

        table
    }

    /// Local name of the unary method registered at `path`, if any.
    pub fn unary_route(&self, path: &str) -> Option<&str> {
        self.unary.get(path).map(String::as_str)
    }

    /// Local name of the server-streaming method registered at `path`, if any.
    pub fn stream_route(&self, path: &str) -> Option<&str> {
        self.server_stream.get(path).map(String::as_str)
    }

    /// Number of registered unary paths (two per method).
    pub fn unary_len(&self) -> usize {
        self.unary.len()
    }

    /// Number of registered server-streaming paths (two per method).
    pub fn stream_len(&self) -> usize {
        self.server_stream.len()
    }
}

/// Register both case variants of the method's wire path.
fn register(routes: &mut HashMap<String, String>, method: &MethodDescriptor) {
    let (lower, upper) = path_variants(&method.wire_path);
    routes.insert(lower, method.local_name.clone());
    routes.insert(upper, method.local_name.clone());
}

/// The wire path with the first character of its final segment lowercased,
/// and the same with it uppercased.
fn path_variants(wire_path: &str) -> (String, String) {
    let name = last_segment(wire_path);
    let prefix = &wire_path[..wire_path.len() - name.len()];
    (
        format!("{prefix}{}", lower_first(name)),
        format!("{prefix}{}", upper_first(name)),
    )
}
