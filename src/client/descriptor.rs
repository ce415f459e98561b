//! Method descriptors and proxy-eligibility classification.

/// Metadata for one callable RPC method discovered on the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodDescriptor {
    /// Canonical transport identifier, e.g. `/pkg.Service/methodName`.
    pub wire_path: String,
    /// True for client-streaming and bidirectional methods.
    pub request_streaming: bool,
    /// True for server-streaming and bidirectional methods.
    pub response_streaming: bool,
    /// Identifier used to invoke the method on the client handle. Always the
    /// last segment of `wire_path` with its first character lowercased.
    pub local_name: String,
}

/// Which proxy behavior applies to a method, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MethodKind {
    Unary,
    ServerStreaming,
    /// Request-streaming methods are never proxied, regardless of
    /// configuration. They are omitted from both route tables without error.
    Unsupported,
}

impl MethodDescriptor {
    /// Build a descriptor, deriving `local_name` from the wire path so the
    /// pair cannot fall out of sync.
    pub fn new(
        wire_path: impl Into<String>,
        request_streaming: bool,
        response_streaming: bool,
    ) -> Self {
        let wire_path = wire_path.into();
        let local_name = lower_first(last_segment(&wire_path));
        Self {
            wire_path,
            request_streaming,
            response_streaming,
            local_name,
        }
    }

    /// Shorthand for a unary method.
    pub fn unary(wire_path: impl Into<String>) -> Self {
        Self::new(wire_path, false, false)
    }

    /// Shorthand for a server-streaming method.
    pub fn server_streaming(wire_path: impl Into<String>) -> Self {
        Self::new(wire_path, false, true)
    }

    /// Classify this method for proxying.
    pub fn kind(&self) -> MethodKind {
        if self.request_streaming {
            MethodKind::Unsupported
        } else if self.response_streaming {
            MethodKind::ServerStreaming
        } else {
            MethodKind::Unary
        }
    }
}

/// Last slash-delimited segment; the whole path when it has no slash.
pub(crate) fn last_segment(wire_path: &str) -> &str {
    wire_path.rsplit('/').next().unwrap_or(wire_path)
}

pub(crate) fn lower_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub(crate) fn upper_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
