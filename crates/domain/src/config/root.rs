use serde::{Deserialize, Serialize};

use super::database::DatabaseConfig;
use super::errors::ConfigError;
use super::ingest::IngestConfig;
use super::logging::LoggingConfig;

const LOCAL_CONFIG_PATH: &str = "ferrous-pdns.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/ferrous-pdns/config.toml";

/// Main configuration structure for Ferrous pDNS
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Cell store configuration
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Bulk-load pipeline configuration
    #[serde(default)]
    pub ingest: IngestConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. ferrous-pdns.toml in current directory
    /// 3. /etc/ferrous-pdns/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if let Some(path) = Self::get_config_path() {
            Self::from_file(&path)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_string(),
            reason: e.to_string(),
        })?;
        Self::from_toml(&contents)
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(db) = overrides.database_path {
            self.database.path = db;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
        if let Some(workers) = overrides.workers {
            self.ingest.workers = workers;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ingest.column_family.trim().is_empty() {
            return Err(ConfigError::Validation(
                "Column family cannot be empty".to_string(),
            ));
        }

        if self.ingest.chunk_size == 0 {
            return Err(ConfigError::Validation(
                "Ingest chunk size must be at least 1".to_string(),
            ));
        }

        if self.database.cell_max_batch_size == 0 || self.database.cell_channel_capacity == 0 {
            return Err(ConfigError::Validation(
                "Cell batch size and channel capacity must be at least 1".to_string(),
            ));
        }

        if self.database.cell_flush_interval_ms == 0 {
            return Err(ConfigError::Validation(
                "Cell flush interval must be at least 1 ms".to_string(),
            ));
        }

        if self.database.max_connections == 0 {
            return Err(ConfigError::Validation(
                "Database pool needs at least one connection".to_string(),
            ));
        }

        Ok(())
    }

    pub fn save(&self, path: &str) -> Result<(), ConfigError> {
        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Parse(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, toml_string).map_err(|e| ConfigError::FileWrite {
            path: path.to_string(),
            reason: e.to_string(),
        })?;
        Ok(())
    }

    /// Get the path to the configuration file being used
    pub fn get_config_path() -> Option<String> {
        [LOCAL_CONFIG_PATH, SYSTEM_CONFIG_PATH]
            .into_iter()
            .find(|p| std::path::Path::new(p).exists())
            .map(str::to_string)
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub database_path: Option<String>,
    pub log_level: Option<String>,
    pub workers: Option<usize>,
}
