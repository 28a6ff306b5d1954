use std::path::PathBuf;

use serde::Deserialize;
use thiserror::Error;

/// Config file looked up in the working directory.
const DEFAULT_CONFIG_PATH: &str = "gif-feed.toml";
/// Environment variable overriding the config file location.
const CONFIG_PATH_ENV: &str = "GIF_FEED_CONFIG";
/// Environment variable fallback for the API key.
const API_KEY_ENV: &str = "GIPHY_API_KEY";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("No API key configured: set api_key in gif-feed.toml or the GIPHY_API_KEY environment variable")]
    MissingApiKey,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub api_key: String,
}

impl Config {
    /// Load configuration from the TOML file, falling back to the
    /// environment when the file does not exist.
    pub async fn load() -> Result<Self, ConfigError> {
        let path = std::env::var(CONFIG_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH));

        match tokio::fs::read_to_string(&path).await {
            Ok(content) => {
                let config = Self::from_toml(&content)?;
                tracing::info!("Loaded config from {}", path.display());
                Ok(config)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Self::from_env(),
            Err(e) => Err(e.into()),
        }
    }

    fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        if config.api_key.is_empty() {
            return Err(ConfigError::MissingApiKey);
        }
        Ok(config)
    }

    fn from_env() -> Result<Self, ConfigError> {
        match std::env::var(API_KEY_ENV) {
            Ok(api_key) if !api_key.is_empty() => Ok(Self { api_key }),
            _ => Err(ConfigError::MissingApiKey),
        }
    }
}
