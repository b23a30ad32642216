mod file_creation;

use super::{Config, ConfigPaths};
use crate::{BridgeError, Result};
use file_creation::create_default_config_file;
use std::{fs, path::Path};
use tracing::{debug, instrument};

impl Config {
    /// Loads the configuration from its default location.
    ///
    /// # Errors
    ///
    /// Returns an error if the config directory cannot be determined or
    /// the file cannot be loaded.
    pub fn load() -> Result<Config> {
        let path = ConfigPaths::main_config()?;
        Self::load_from(&path)
    }

    /// Loads a configuration file, creating an empty one first if missing.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The configuration file cannot be created or read
    /// - The TOML content is invalid
    /// - A value fails validation
    #[instrument]
    pub fn load_from(path: &Path) -> Result<Config> {
        if !path.exists() {
            debug!("Creating default config file");
            create_default_config_file(path)?;
        }

        Self::read_from(path)
    }

    /// Reads an existing configuration file without touching the filesystem.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file does not exist or cannot be read
    /// - The TOML content is invalid
    /// - A value fails validation
    pub fn read_from(path: &Path) -> Result<Config> {
        let content = fs::read_to_string(path).map_err(|e| BridgeError::io_at(e, path))?;
        let config: Config =
            toml::from_str(&content).map_err(|e| BridgeError::toml_parse(e, Some(path)))?;

        config.validate()?;
        Ok(config)
    }

    /// Parses a configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid or a value fails validation.
    pub fn from_toml(content: &str) -> Result<Config> {
        let config: Config =
            toml::from_str(content).map_err(|e| BridgeError::toml_parse(e, None))?;

        config.validate()?;
        Ok(config)
    }

    /// Checks values that deserialize fine but cannot be used.
    ///
    /// # Errors
    ///
    /// Returns `BridgeError::ConfigValidation` naming the offending section.
    pub fn validate(&self) -> Result<()> {
        if self.reporting.interval_secs == 0 {
            return Err(BridgeError::ConfigValidation {
                component: "reporting".to_string(),
                details: "interval_secs must be at least 1".to_string(),
            });
        }

        if self.reporting.protocol.trim().is_empty() {
            return Err(BridgeError::ConfigValidation {
                component: "reporting".to_string(),
                details: "protocol must not be empty".to_string(),
            });
        }

        Ok(())
    }

    /// Renders the JSON schema of the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the schema cannot be serialized.
    pub fn schema_json() -> Result<String> {
        let schema = schemars::schema_for!(Config);
        serde_json::to_string_pretty(&schema).map_err(|e| BridgeError::ConfigValidation {
            component: "schema".to_string(),
            details: e.to_string(),
        })
    }
}
