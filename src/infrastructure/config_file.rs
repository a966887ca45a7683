use std::path::{Path, PathBuf};
use tracing::{debug, error, info};
use crate::domain::{error::RelayError, models::RelayConfig};

pub const DEFAULT_CONFIG_PATH: &str = "config.json";
pub const CONFIG_PATH_ENV: &str = "RELAY_CONFIG_PATH";

/// `RELAY_CONFIG_PATH` if set, otherwise `config.json` in the working directory.
pub fn config_path() -> PathBuf {
    std::env::var(CONFIG_PATH_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH))
}

pub fn load_config(path: &Path) -> Result<RelayConfig, RelayError> {
    debug!("Reading configuration from {}", path.display());
    let raw = std::fs::read_to_string(path)
        .map_err(|e| {
            error!("Failed to read configuration file {}: {}", path.display(), e);
            RelayError::Config(format!("{}: {}", path.display(), e))
        })?;

    let config: RelayConfig = serde_json::from_str(&raw)
        .map_err(|e| {
            error!("Failed to parse configuration file {}: {}", path.display(), e);
            RelayError::Config(format!("{}: {}", path.display(), e))
        })?;

    info!("Loaded configuration - queue: {}, account: {}, region: {}", config.queue_name, config.account_id, config.region);
    Ok(config)
}
