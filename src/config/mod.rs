mod types;

pub use types::*;

use crate::Result;
use std::{env, path::Path};
use tracing::debug;

const DEFAULT_CONFIG_PATH: &str = "config.yaml";

/// Loads configuration from the optional YAML file, then the environment.
///
/// `CONFIG_PATH` must point at an existing file when set. Without it,
/// `config.yaml` is read only if present.
pub async fn load() -> Result<Config> {
    let config_path = match env::var("CONFIG_PATH") {
        Ok(path) => Some(path),
        Err(_) if Path::new(DEFAULT_CONFIG_PATH).is_file() => Some(DEFAULT_CONFIG_PATH.to_string()),
        Err(_) => None,
    };

    let mut config = match config_path {
        Some(path) => from_file(&path).await?,
        None => {
            debug!("No configuration file found, using defaults");
            Config::default()
        }
    };

    config.apply_env(|key| env::var(key).ok())?;

    Ok(config)
}

pub async fn from_file(config_path: &str) -> Result<Config> {
    debug!("Loading configuration from: {}", config_path);

    let config_str = tokio::fs::read_to_string(config_path).await?;
    let config: Config = serde_yaml::from_str(&config_str)?;

    Ok(config)
}
