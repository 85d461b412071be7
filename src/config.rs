//! Configuration management for the tribunals frontend using the prefer crate.

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::api::DEFAULT_API_URL;

/// Default listen address.
pub const DEFAULT_BIND: &str = "127.0.0.1:3000";

/// Default upstream request timeout in seconds.
pub const DEFAULT_REQUEST_TIMEOUT: u64 = 30;

/// Environment variable overriding the API base URL.
pub const ENV_API_URL: &str = "TRIBUNALS_API_URL";
/// Environment variable overriding the listen address.
pub const ENV_BIND: &str = "TRIBUNALS_BIND";
/// Environment variable overriding the upstream timeout.
pub const ENV_REQUEST_TIMEOUT: &str = "TRIBUNALS_REQUEST_TIMEOUT";

/// Application settings.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Base URL of the external search API.
    pub api_url: String,
    /// Address to listen on: PORT, HOST, or HOST:PORT.
    pub bind: String,
    /// Upstream request timeout in seconds.
    pub request_timeout: u64,
    /// User agent sent to the search API.
    pub user_agent: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            bind: DEFAULT_BIND.to_string(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            user_agent: format!("tribunals/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl Settings {
    /// Apply overrides from an environment lookup.
    ///
    /// Empty values are ignored. An unparseable or zero timeout is logged and
    /// skipped.
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.is_empty());

        if let Some(url) = get(ENV_API_URL) {
            tracing::debug!("Using {} from environment: {}", ENV_API_URL, url);
            self.api_url = url;
        }
        if let Some(bind) = get(ENV_BIND) {
            tracing::debug!("Using {} from environment: {}", ENV_BIND, bind);
            self.bind = bind;
        }
        if let Some(timeout) = get(ENV_REQUEST_TIMEOUT) {
            match timeout.parse::<u64>() {
                Ok(secs) if secs > 0 => self.request_timeout = secs,
                _ => tracing::warn!(
                    "Ignoring invalid {} value: {}",
                    ENV_REQUEST_TIMEOUT,
                    timeout
                ),
            }
        }
    }
}

/// Configuration file structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Search API base URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,
    /// Listen address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bind: Option<String>,
    /// Request timeout in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_timeout: Option<u64>,
    /// User agent string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
    /// Path to the config file this was loaded from (not serialized).
    #[serde(skip)]
    pub source_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration using prefer crate for discovery.
    /// Automatically discovers tribunals config files in standard locations.
    pub async fn load() -> Self {
        match prefer::load("tribunals").await {
            Ok(pref_config) => {
                if let Some(path) = pref_config.source_path() {
                    match Self::load_from_path(path).await {
                        Ok(config) => config,
                        Err(e) => {
                            tracing::warn!("Ignoring discovered config: {:#}", e);
                            Self::default()
                        }
                    }
                } else {
                    Self::default()
                }
            }
            // No config file found
            Err(_) => Self::default(),
        }
    }

    /// Load configuration from a specific file path.
    /// Supports JSON, TOML and YAML based on file extension.
    pub async fn load_from_path(path: &Path) -> anyhow::Result<Self> {
        let contents = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read config file {}", path.display()))?;

        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

        let mut config: Config = match ext {
            "toml" => toml::from_str(&contents).context("Failed to parse TOML config")?,
            "yaml" | "yml" => {
                serde_yaml::from_str(&contents).context("Failed to parse YAML config")?
            }
            _ => serde_json::from_str(&contents).context("Failed to parse JSON config")?,
        };

        config.source_path = Some(path.to_path_buf());
        Ok(config)
    }

    /// Apply configuration to settings.
    pub fn apply_to_settings(&self, settings: &mut Settings) {
        if let Some(ref api_url) = self.api_url {
            settings.api_url = api_url.clone();
        }
        if let Some(ref bind) = self.bind {
            settings.bind = bind.clone();
        }
        match self.request_timeout {
            Some(0) => tracing::warn!("Ignoring request_timeout = 0 in config"),
            Some(timeout) => settings.request_timeout = timeout,
            None => {}
        }
        if let Some(ref user_agent) = self.user_agent {
            settings.user_agent = user_agent.clone();
        }
    }
}

/// Options for loading settings.
#[derive(Debug, Clone, Default)]
pub struct LoadOptions {
    /// Explicit config file path (overrides auto-discovery).
    pub config_path: Option<PathBuf>,
}

/// Load settings: defaults, then config file, then environment.
///
/// An explicit config path must load; a discovered one is best-effort.
pub async fn load_settings_with_options(options: LoadOptions) -> anyhow::Result<Settings> {
    let config = match options.config_path {
        Some(ref path) => {
            let expanded = shellexpand::tilde(&path.to_string_lossy()).into_owned();
            Config::load_from_path(Path::new(&expanded)).await?
        }
        None => Config::load().await,
    };

    if let Some(ref path) = config.source_path {
        tracing::debug!("Loaded config from {}", path.display());
    }

    let mut settings = Settings::default();
    config.apply_to_settings(&mut settings);
    settings.apply_env_overrides(|key| std::env::var(key).ok());

    Ok(settings)
}
