//! Logging setup.

use tracing_subscriber::EnvFilter;

use crate::config::ClientConfig;
use crate::error::ClientError;

/// Installs a global fmt subscriber filtered by `config.log_level`.
/// Fails if the filter does not parse or a subscriber is already set.
pub fn init(config: &ClientConfig) -> Result<(), ClientError> {
    let filter = EnvFilter::try_new(&config.log_level).map_err(|e| ClientError::Config(e.to_string()))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .map_err(|e| ClientError::Config(e.to_string()))
}
