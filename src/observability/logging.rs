//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the tracing subscriber once per process
//! - Respect `RUST_LOG` when set, falling back to the given default filter
//!
//! # Design Decisions
//! - Uses the tracing crate for structured logging
//! - Idempotent: repeated calls (e.g. from parallel tests) are no-ops

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global subscriber. `default_filter` is an `EnvFilter`
/// directive such as `"grpc_gateway=debug"`, used when `RUST_LOG` is unset.
pub fn init(default_filter: &str) {
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}
