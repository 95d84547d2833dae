//! Configuration management with layered hierarchy

use serde::Deserialize;
use std::path::PathBuf;

/// Default API base URL for local development
pub const DEFAULT_API_URL: &str = "http://localhost:8080/api/v1";

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Console configuration with layered hierarchy
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the NaradAI API
    pub api_url: Option<String>,

    /// Request timeout in seconds
    pub timeout_secs: Option<u64>,

    /// Default output format for list commands
    pub default_format: Option<String>,
}

impl Config {
    /// Load configuration from all sources, merging in priority order
    pub fn load() -> Self {
        let mut config = Config::default();

        // 1. Built-in defaults (already in Default impl)

        // 2. Global user config (~/.config/naradai/config.yaml)
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                if let Ok(contents) = std::fs::read_to_string(&global_path) {
                    if let Ok(global) = serde_yml::from_str::<Config>(&contents) {
                        config.merge(global);
                    }
                }
            }
        }

        // 3. Environment variables
        if let Ok(url) = std::env::var("NARADAI_API_URL") {
            config.api_url = Some(url);
        }
        if let Ok(timeout) = std::env::var("NARADAI_TIMEOUT_SECS") {
            if let Ok(secs) = timeout.parse() {
                config.timeout_secs = Some(secs);
            }
        }

        config
    }

    /// Get the path to the global config file
    fn global_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "naradai")
            .map(|dirs| dirs.config_dir().join("config.yaml"))
    }

    /// Merge another config into this one (other takes precedence)
    fn merge(&mut self, other: Config) {
        if other.api_url.is_some() {
            self.api_url = other.api_url;
        }
        if other.timeout_secs.is_some() {
            self.timeout_secs = other.timeout_secs;
        }
        if other.default_format.is_some() {
            self.default_format = other.default_format;
        }
    }

    /// Resolve the API base URL, with the CLI flag taking top priority
    pub fn api_url(&self, flag: Option<&str>) -> String {
        flag.map(String::from)
            .or_else(|| self.api_url.clone())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string())
    }

    /// Resolve the request timeout
    pub fn timeout_secs(&self) -> u64 {
        self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_url_flag_wins() {
        let config = Config {
            api_url: Some("http://configured:9000".into()),
            ..Config::default()
        };
        assert_eq!(config.api_url(Some("http://flag:1234")), "http://flag:1234");
    }

    #[test]
    fn test_api_url_defaults() {
        let config = Config::default();
        assert_eq!(config.api_url(None), DEFAULT_API_URL);
        assert_eq!(config.timeout_secs(), DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn test_merge_prefers_other() {
        let mut base = Config {
            api_url: Some("http://base".into()),
            timeout_secs: Some(5),
            default_format: None,
        };
        base.merge(Config {
            api_url: Some("http://override".into()),
            timeout_secs: None,
            default_format: Some("json".into()),
        });
        assert_eq!(base.api_url.as_deref(), Some("http://override"));
        assert_eq!(base.timeout_secs, Some(5));
        assert_eq!(base.default_format.as_deref(), Some("json"));
    }
}
