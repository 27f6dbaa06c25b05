/// Application configuration
use crate::error::{AppError, Result};
use marquee_client::ServerConfig;
use marquee_core::{Language, Translations};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Configuration file looked up in the working directory when none is given
pub const DEFAULT_CONFIG_FILE: &str = "marquee.toml";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default = "default_server")]
    pub server: ServerSettings,

    #[serde(default = "default_ui")]
    pub ui: UiSettings,

    #[serde(default = "default_polling")]
    pub polling: PollingSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerSettings {
    #[serde(default = "default_url")]
    pub url: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UiSettings {
    /// Language used until the backend settings are loaded
    #[serde(default)]
    pub language: Language,

    /// Replacement translation table (JSON)
    #[serde(default)]
    pub translations_path: Option<PathBuf>,

    #[serde(default = "default_example_interval_secs")]
    pub example_interval_secs: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PollingSettings {
    #[serde(default = "default_poll_interval_secs")]
    pub interval_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: default_server(),
            ui: default_ui(),
            polling: default_polling(),
        }
    }
}

impl AppConfig {
    /// Load configuration from file and environment.
    ///
    /// An explicit `path` must exist; otherwise `marquee.toml` is read when
    /// present. Variables such as `MARQUEE_SERVER__URL` override both.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_with_env(path, None)
    }

    /// Like [`AppConfig::load`], reading overrides from `env` instead of the
    /// process environment when given.
    pub fn load_with_env(path: Option<&Path>, env: Option<HashMap<String, String>>) -> Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                settings = settings.add_source(config::File::from(path).required(true));
            }
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    settings = settings.add_source(config::File::from(default_path));
                }
            }
        }

        // Override with environment variables (prefixed with MARQUEE_)
        settings = settings.add_source(
            config::Environment::with_prefix("MARQUEE")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true)
                .source(env),
        );

        let config = settings
            .build()
            .map_err(|e| AppError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::Config(e.to_string()))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        let url = self.server.url.trim();
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(AppError::Config(format!(
                "server.url must start with http:// or https:// (got {:?})",
                self.server.url
            )));
        }

        if self.server.timeout_secs == 0 {
            return Err(AppError::Config(
                "server.timeout_secs must be greater than zero".to_string(),
            ));
        }

        if self.polling.interval_secs == 0 {
            return Err(AppError::Config(
                "polling.interval_secs must be greater than zero".to_string(),
            ));
        }

        if self.ui.example_interval_secs == 0 {
            return Err(AppError::Config(
                "ui.example_interval_secs must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }

    pub fn server_config(&self) -> ServerConfig {
        ServerConfig::new(self.server.url.trim())
            .with_timeout(Duration::from_secs(self.server.timeout_secs))
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.polling.interval_secs)
    }

    pub fn example_interval(&self) -> Duration {
        Duration::from_secs(self.ui.example_interval_secs)
    }

    /// The configured translation table, or the bundled one.
    pub fn translations(&self) -> Result<Translations> {
        match &self.ui.translations_path {
            Some(path) => Ok(Translations::load(path)?),
            None => Ok(Translations::bundled()),
        }
    }
}

// Default values
fn default_server() -> ServerSettings {
    ServerSettings {
        url: default_url(),
        timeout_secs: default_timeout_secs(),
    }
}

fn default_url() -> String {
    "http://localhost:9999".to_string()
}

fn default_timeout_secs() -> u64 {
    120
}

fn default_ui() -> UiSettings {
    UiSettings {
        language: Language::default(),
        translations_path: None,
        example_interval_secs: default_example_interval_secs(),
    }
}

fn default_example_interval_secs() -> u64 {
    12
}

fn default_polling() -> PollingSettings {
    PollingSettings {
        interval_secs: default_poll_interval_secs(),
    }
}

fn default_poll_interval_secs() -> u64 {
    5
}
