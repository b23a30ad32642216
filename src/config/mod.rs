//! Configuration schema definitions and validation.
//!
//! Defines the configuration structure for the bridge: general settings
//! and playback reporting. All configurations are serializable to/from
//! TOML format.

mod general;
mod loading;
mod paths;
mod reporting;

#[cfg(test)]
mod tests;

pub use general::{GeneralConfig, LogLevel};
pub use paths::ConfigPaths;
pub use reporting::{DEFAULT_INTERVAL_SECS, DEFAULT_PROTOCOL, ReportingConfig};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Main configuration structure.
///
/// Represents the complete configuration schema that can be loaded
/// from TOML files. All fields have sensible defaults.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Playback reporting settings.
    #[serde(default)]
    pub reporting: ReportingConfig,
}
