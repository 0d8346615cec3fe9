use serde::{Deserialize, Serialize};

use super::errors::ConfigError;
use super::geolocation::GeolocationConfig;
use super::log_source::LogSourceConfig;
use super::logging::LoggingConfig;
use super::server::ServerConfig;
use crate::geo::MAX_BATCH_SIZE;

const LOCAL_CONFIG_PATH: &str = "query-atlas.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/query-atlas/config.toml";

pub const ENV_LOG_SOURCE_URL: &str = "ADGUARD_BASE_URL";
pub const ENV_LOG_SOURCE_USERNAME: &str = "ADGUARD_USERNAME";
pub const ENV_LOG_SOURCE_PASSWORD: &str = "ADGUARD_PASSWORD";

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Main configuration structure for Query Atlas
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// HTTP server (bind address, port)
    #[serde(default)]
    pub server: ServerConfig,

    /// Query log API of the DNS resolver
    #[serde(default)]
    pub log_source: LogSourceConfig,

    /// Batch geolocation provider
    #[serde(default)]
    pub geolocation: GeolocationConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order for the file:
    /// 1. Explicitly provided path
    /// 2. query-atlas.toml in current directory
    /// 3. /etc/query-atlas/config.toml
    /// 4. Default configuration
    ///
    /// Environment overrides are applied on top of the file, CLI overrides last.
    pub fn load(
        path: Option<&str>,
        env_overrides: EnvOverrides,
        cli_overrides: CliOverrides,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if let Some(path) = Self::get_config_path() {
            Self::from_file(&path)?
        } else {
            Self::default()
        };

        config.apply_overrides(env_overrides, cli_overrides);
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Apply environment overrides, then command-line overrides
    pub fn apply_overrides(&mut self, env_overrides: EnvOverrides, cli_overrides: CliOverrides) {
        self.apply_env_overrides(env_overrides);
        self.apply_cli_overrides(cli_overrides);
    }

    fn apply_env_overrides(&mut self, overrides: EnvOverrides) {
        if let Some(url) = overrides.log_source_url {
            self.log_source.base_url = url;
        }
        if let Some(username) = overrides.log_source_username {
            self.log_source.username = username;
        }
        if let Some(password) = overrides.log_source_password {
            self.log_source.password = password;
        }
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(port) = overrides.web_port {
            self.server.web_port = port;
        }
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
        if let Some(url) = overrides.log_source_url {
            self.log_source.base_url = url;
        }
    }

    /// Validate configuration
    ///
    /// Log source credentials are deliberately not checked: a missing URL or
    /// password shows up as a failed fetch and an empty report.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.web_port == 0 {
            return Err(ConfigError::Validation("Web port cannot be 0".to_string()));
        }

        if self.geolocation.batch_size == 0 || self.geolocation.batch_size > MAX_BATCH_SIZE {
            return Err(ConfigError::Validation(format!(
                "Geolocation batch size must be between 1 and {}, got {}",
                MAX_BATCH_SIZE, self.geolocation.batch_size
            )));
        }

        if self.geolocation.base_url.is_empty() {
            return Err(ConfigError::Validation(
                "Geolocation base URL is empty".to_string(),
            ));
        }

        let level = self.logging.level.to_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::UnsupportedLogLevel(self.logging.level.clone()));
        }

        Ok(())
    }

    /// Get the path to the configuration file being used
    pub fn get_config_path() -> Option<String> {
        if std::path::Path::new(LOCAL_CONFIG_PATH).exists() {
            Some(LOCAL_CONFIG_PATH.to_string())
        } else if std::path::Path::new(SYSTEM_CONFIG_PATH).exists() {
            Some(SYSTEM_CONFIG_PATH.to_string())
        } else {
            None
        }
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub web_port: Option<u16>,
    pub bind_address: Option<String>,
    pub log_level: Option<String>,
    pub log_source_url: Option<String>,
}

/// Log source settings taken from the process environment
#[derive(Default)]
pub struct EnvOverrides {
    pub log_source_url: Option<String>,
    pub log_source_username: Option<String>,
    pub log_source_password: Option<String>,
}

impl EnvOverrides {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            log_source_url: lookup(ENV_LOG_SOURCE_URL),
            log_source_username: lookup(ENV_LOG_SOURCE_USERNAME),
            log_source_password: lookup(ENV_LOG_SOURCE_PASSWORD),
        }
    }
}
