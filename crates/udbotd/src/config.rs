//! Configuration management for udbotd.
//!
//! Loads settings from /etc/udbot/config.toml or uses defaults.
//! Endpoints live here rather than in module constants so tests can
//! point the client at a local double.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// Config file path
pub const CONFIG_PATH: &str = "/etc/udbot/config.toml";

/// Dictionary service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Define endpoint (term lookup)
    #[serde(default = "default_define_url")]
    pub define_url: String,

    /// Random endpoint (no-argument lookup)
    #[serde(default = "default_random_url")]
    pub random_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_define_url() -> String {
    "http://api.urbandictionary.com/v0/define".to_string()
}

fn default_random_url() -> String {
    "http://api.urbandictionary.com/v0/random".to_string()
}

fn default_timeout() -> u64 {
    30
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            define_url: default_define_url(),
            random_url: default_random_url(),
            timeout_secs: default_timeout(),
        }
    }
}

/// Display configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Definition text cap in characters (marker included)
    #[serde(default = "default_max_chars")]
    pub max_definition_chars: usize,
}

fn default_max_chars() -> usize {
    udbot_common::MAX_DEFINITION_CHARS
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            max_definition_chars: default_max_chars(),
        }
    }
}

/// Top-level bot configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BotConfig {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub display: DisplayConfig,
}

impl BotConfig {
    /// Load configuration from the given path, falling back to
    /// defaults when the file is missing or unreadable.
    pub fn load(path: &Path) -> Self {
        if !path.exists() {
            info!("No config at {}, using defaults", path.display());
            return Self::default();
        }

        match fs::read_to_string(path) {
            Ok(raw) => match toml::from_str(&raw) {
                Ok(config) => {
                    info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    warn!("Invalid config at {}: {}, using defaults", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                warn!(
                    "Failed to read config at {}: {}, using defaults",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_urban_dictionary() {
        let config = BotConfig::default();
        assert_eq!(
            config.api.define_url,
            "http://api.urbandictionary.com/v0/define"
        );
        assert_eq!(
            config.api.random_url,
            "http://api.urbandictionary.com/v0/random"
        );
        assert_eq!(config.api.timeout_secs, 30);
        assert_eq!(config.display.max_definition_chars, 1000);
    }

    #[test]
    fn partial_toml_fills_in_defaults() {
        let config: BotConfig = toml::from_str(
            r#"
            [api]
            define_url = "http://127.0.0.1:9/define"
            "#,
        )
        .unwrap();
        assert_eq!(config.api.define_url, "http://127.0.0.1:9/define");
        assert_eq!(
            config.api.random_url,
            "http://api.urbandictionary.com/v0/random"
        );
        assert_eq!(config.display.max_definition_chars, 1000);
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config = BotConfig::load(Path::new("/nonexistent/udbot.toml"));
        assert_eq!(config.api.timeout_secs, 30);
    }
}
