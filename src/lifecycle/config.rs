//! Runtime configuration.
//!
//! Loaded from an optional `stockroom.yaml` in the working directory (or the file named by
//! `STOCKROOM_CONFIG`), then overridden by `STOCKROOM__*` environment variables, e.g.
//! `STOCKROOM__RETRY__MAX_ATTEMPTS=5`. Every field has a default, so an empty environment
//! yields a working configuration.

use serde::Deserialize;
use std::time::Duration;

/// Environment variable naming an explicit configuration file.
pub const CONFIG_ENV_VAR: &str = "STOCKROOM_CONFIG";

/// Prefix for environment overrides.
pub const CONFIG_ENV_PREFIX: &str = "STOCKROOM";

/// Base name of the optional configuration file.
pub const DEFAULT_CONFIG_FILE: &str = "stockroom";

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    pub actors: ActorConfig,
    pub retry: RetryConfig,
}

/// Channel capacities of the resource actors.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ActorConfig {
    pub product_buffer: usize,
    pub supplier_buffer: usize,
}

impl Default for ActorConfig {
    fn default() -> Self {
        Self {
            product_buffer: 32,
            supplier_buffer: 32,
        }
    }
}

/// Backoff used by [`retry_on_conflict`](crate::clients::retry_on_conflict).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RetryConfig {
    pub min_delay_ms: u64,
    pub max_delay_ms: u64,
    pub max_attempts: usize,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            min_delay_ms: 5,
            max_delay_ms: 500,
            max_attempts: 8,
        }
    }
}

impl RetryConfig {
    pub fn min_delay(&self) -> Duration {
        Duration::from_millis(self.min_delay_ms)
    }

    pub fn max_delay(&self) -> Duration {
        Duration::from_millis(self.max_delay_ms)
    }
}

impl StoreConfig {
    /// Loads configuration from files and the environment.
    ///
    /// `path`, when given, must exist.
    pub fn load(path: Option<&str>) -> Result<Self, config::ConfigError> {
        use config::{Config, Environment, File, FileFormat};

        let mut builder = Config::builder()
            .add_source(File::new(DEFAULT_CONFIG_FILE, FileFormat::Yaml).required(false));

        if let Some(config_path) = path {
            builder = builder.add_source(File::new(config_path, FileFormat::Yaml).required(true));
        }

        if let Ok(config_path) = std::env::var(CONFIG_ENV_VAR) {
            builder = builder.add_source(File::new(&config_path, FileFormat::Yaml).required(true));
        }

        builder
            .add_source(
                Environment::with_prefix(CONFIG_ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}
