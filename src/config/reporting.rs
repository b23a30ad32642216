use std::time::Duration;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Default protocol tag under which remote item ids are stored.
pub const DEFAULT_PROTOCOL: &str = "plex";

/// Default seconds between background position reports.
pub const DEFAULT_INTERVAL_SECS: u64 = 5;

/// Playback reporting configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ReportingConfig {
    /// Whether playback is reported to remote servers at all.
    pub enabled: bool,

    /// Seconds between background position reports while an item plays.
    pub interval_secs: u64,

    /// Unique-identifier protocol tag used to correlate local and imported items.
    pub protocol: String,
}

impl ReportingConfig {
    /// Background reporting interval as a `Duration`.
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }
}

impl Default for ReportingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            interval_secs: DEFAULT_INTERVAL_SECS,
            protocol: DEFAULT_PROTOCOL.to_string(),
        }
    }
}
