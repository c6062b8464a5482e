mod types;

pub use types::*;

use crate::{Error, Result};
use std::env;
use std::path::Path;
use tracing::debug;

/// Environment variable selecting the prediction service base URL.
pub const BASE_URL_ENV: &str = "PREDICTION_API_BASE_URL";

pub const CONFIG_PATH_ENV: &str = "CONFIG_PATH";

const DEFAULT_CONFIG_PATH: &str = "stroke-risk.yaml";

/// Loads the configuration file named by `CONFIG_PATH` (falling back to
/// defaults when the default file is absent), then applies the base URL
/// override from the environment.
pub async fn load() -> Result<Config> {
    let explicit = env::var(CONFIG_PATH_ENV).ok();
    let config = match explicit.as_deref() {
        Some(path) => load_file(path).await?,
        None if Path::new(DEFAULT_CONFIG_PATH).exists() => load_file(DEFAULT_CONFIG_PATH).await?,
        None => {
            debug!("No configuration file found, using defaults");
            Config::default()
        }
    };

    let config = apply_env_override(config, env::var(BASE_URL_ENV).ok());
    validate(&config)?;

    Ok(config)
}

pub async fn load_file(path: &str) -> Result<Config> {
    debug!("Loading configuration from: {}", path);

    let config_str = tokio::fs::read_to_string(path).await?;
    let config: Config = serde_yaml::from_str(&config_str)?;
    validate(&config)?;

    Ok(config)
}

/// Replaces the configured base URL with `base_url` when it is set and non-empty.
pub fn apply_env_override(mut config: Config, base_url: Option<String>) -> Config {
    if let Some(url) = base_url.filter(|u| !u.trim().is_empty()) {
        debug!("Base URL overridden from {}", BASE_URL_ENV);
        config.api.base_url = url;
    }
    config
}

/// Rejects a base URL that is not http(s).
pub fn validate(config: &Config) -> Result<()> {
    let url = config.api.base_url.trim();
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        return Err(Error::config(format!(
            "api.base_url must be an http(s) URL, got '{}'",
            config.api.base_url
        )));
    }
    Ok(())
}
