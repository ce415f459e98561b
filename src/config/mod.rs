//! Gateway configuration.
//!
//! The schema defines the recognized options with their defaults; the loader
//! reads optional TOML overrides from disk and validates the result. Options
//! supplied programmatically by the integrator take the same shape and simply
//! bypass the loader.

pub mod loader;
pub mod schema;

pub use loader::{load_config, validate_config, ConfigError};
pub use schema::GatewayConfig;
