//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use crate::config::schema::GatewayConfig;

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("validation failed: {0}")]
    Validation(String),
}

/// Load and validate configuration from a TOML file.
///
/// Keys absent from the file keep their defaults, so an empty file yields
/// `GatewayConfig::default()`.
pub fn load_config(path: &Path) -> Result<GatewayConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: GatewayConfig = toml::from_str(&content)?;

    validate_config(&config)?;

    Ok(config)
}

/// Reject configurations the gateway cannot honor.
pub fn validate_config(config: &GatewayConfig) -> Result<(), ConfigError> {
    if config.unary_calls_timeout_ms == 0 {
        return Err(ConfigError::Validation(
            "unary_calls_timeout_ms must be non-zero".to_string(),
        ));
    }
    if config.server_stream_calls_timeout_ms == 0 {
        return Err(ConfigError::Validation(
            "server_stream_calls_timeout_ms must be non-zero".to_string(),
        ));
    }
    Ok(())
}
