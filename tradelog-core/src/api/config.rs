//! API client configuration — TOML file or built-in defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Connection settings for the journal API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL without a trailing slash, e.g. `http://127.0.0.1:5000`.
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:5000".into(),
            timeout_secs: 30,
        }
    }
}

impl ApiConfig {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let mut config: ApiConfig = toml::from_str(content)?;
        // Normalize so endpoint concatenation never doubles the slash.
        while config.base_url.ends_with('/') {
            config.base_url.pop();
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_for_empty_toml() {
        let config = ApiConfig::from_toml("").unwrap();
        assert_eq!(config.base_url, "http://127.0.0.1:5000");
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let config = ApiConfig::from_toml(r#"base_url = "https://journal.example.com/""#).unwrap();
        assert_eq!(config.base_url, "https://journal.example.com");
    }

    #[test]
    fn bad_toml_is_an_error() {
        assert!(ApiConfig::from_toml("base_url = [").is_err());
    }
}
