//! YAML configuration and its merge with command-line arguments.
//!
//! ```yaml
//! endpoint: https://newsapi.org/v1/articles
//! api_key: YOUR_KEY
//! default_source: bbc-news
//! sources:
//!   - bbc-news
//!   - reuters
//! ```
//!
//! Every field is optional. Command-line flags and environment variables win
//! over the file, and the file wins over built-in defaults.

use crate::api::DEFAULT_ENDPOINT;
use crate::cli::Cli;
use crate::sources::DEFAULT_SOURCE;
use serde::{Deserialize, Serialize};
use std::error::Error;
use tokio::fs;
use tracing::{info, instrument};

#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
pub struct HeadlinesConfig {
    pub endpoint: Option<String>,
    pub api_key: Option<String>,
    pub default_source: Option<String>,
    #[serde(default)]
    pub sources: Vec<String>,
}

impl HeadlinesConfig {
    pub fn from_yaml(yaml: &str) -> Result<Self, serde_yaml::Error> {
        // An empty file deserializes to unit, not a mapping.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml)
    }
}

/// Load a [`HeadlinesConfig`] from `path`.
#[instrument(level = "info", skip_all, fields(%path))]
pub async fn load_config(path: &str) -> Result<HeadlinesConfig, Box<dyn Error>> {
    let yaml = fs::read_to_string(path).await?;
    let config = HeadlinesConfig::from_yaml(&yaml)?;
    info!("Loaded configuration");
    Ok(config)
}

/// Effective settings for a run.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub endpoint: String,
    pub api_key: String,
    pub sources: Vec<String>,
}

/// Merge CLI arguments over the config file.
///
/// # Errors
///
/// Fails when no API key is available from any layer.
pub fn resolve(cli: &Cli, config: &HeadlinesConfig) -> Result<Settings, Box<dyn Error>> {
    let api_key = cli
        .api_key
        .clone()
        .or_else(|| config.api_key.clone())
        .filter(|k| !k.trim().is_empty())
        .ok_or("no API key: pass --api-key, set NEWS_API_KEY, or add api_key to the config file")?;

    let endpoint = cli
        .endpoint
        .clone()
        .or_else(|| config.endpoint.clone())
        .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

    let sources = if !cli.sources.is_empty() {
        cli.sources.clone()
    } else if !config.sources.is_empty() {
        config.sources.clone()
    } else {
        vec![
            config
                .default_source
                .clone()
                .unwrap_or_else(|| DEFAULT_SOURCE.to_string()),
        ]
    };

    Ok(Settings {
        endpoint,
        api_key,
        sources,
    })
}
