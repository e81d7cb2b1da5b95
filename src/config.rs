use std::path::PathBuf;

use eyre::Result;
use log::debug;
use serde::{Deserialize, Serialize};

/// Name of the environment variable holding the Groq API key
pub const API_KEY_VAR: &str = "GROQ_API";

#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub default_model: Option<String>,
    pub default_lang: Option<String>,
    pub user_agent: Option<String>,
}

impl Config {
    /// Load config from ~/.config/urlsum/config.toml if it exists
    pub fn load() -> Result<Self> {
        let path = config_path();
        if path.exists() {
            debug!("Loading config from {}", path.display());
            let content = std::fs::read_to_string(&path)?;
            let config: Config = toml::from_str(&content)?;
            Ok(config)
        } else {
            debug!("No config file found at {}", path.display());
            Ok(Config::default())
        }
    }
}

pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from(".config"))
        .join("urlsum")
        .join("config.toml")
}

/// Read the Groq API key from the environment. Called once at startup;
/// everything downstream receives the key as a constructor argument.
pub fn groq_api_key() -> Result<String> {
    std::env::var(API_KEY_VAR)
        .map_err(|_| eyre::eyre!("{API_KEY_VAR} environment variable not set (required for summarization)"))
}
