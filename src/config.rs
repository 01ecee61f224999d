use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::Error;

/// Environment variable naming the credential for the completion provider.
pub const API_KEY_VAR: &str = "OPENAI_API_KEY";

/// Environment variable overriding the env-file location.
pub const ENV_PATH_VAR: &str = "CODESCRIBE_ENV_PATH";

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub provider: ProviderConfig,
    pub journal: JournalConfig,
    /// Loaded from the environment, never from the config file.
    #[serde(skip)]
    pub api_key: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ProviderConfig {
    pub endpoint: String,
    pub model: String,
    pub temperature: f32,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://api.openai.com/v1".to_string(),
            model: "gpt-4.1-mini".to_string(),
            temperature: 0.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct JournalConfig {
    pub dir: String,
}

impl Default for JournalConfig {
    fn default() -> Self {
        Self {
            dir: ".journal".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from an optional TOML file, then apply environment
    /// overrides. A missing file yields the defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut config = if path.as_ref().exists() {
            let content = fs::read_to_string(&path).context("Failed to read config file")?;
            toml::from_str(&content).context("Failed to parse config file")?
        } else {
            Config::default()
        };

        config.api_key = std::env::var(API_KEY_VAR).ok();
        Ok(config)
    }

    /// The provider credential. Required by summarize/categorize; plain
    /// note-appending never asks for it.
    pub fn require_api_key(&self) -> std::result::Result<&str, Error> {
        self.api_key.as_deref().ok_or(Error::MissingApiKey)
    }
}

/// Load the env file holding the provider credential.
///
/// Resolution order: `CODESCRIBE_ENV_PATH` if set, then `.env` next to the
/// executable, then the working directory.
pub fn load_env_file() {
    if let Ok(path) = std::env::var(ENV_PATH_VAR) {
        if dotenv::from_path(&path).is_ok() {
            return;
        }
        log::warn!("Could not read env file at {}", path);
    }

    if let Ok(exe) = std::env::current_exe() {
        if let Some(dir) = exe.parent() {
            if dotenv::from_path(dir.join(".env")).is_ok() {
                return;
            }
        }
    }

    dotenv::dotenv().ok();
}
