mod log_level;

pub use log_level::LogLevel;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// General settings that affect the whole bridge, such as logging.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct GeneralConfig {
    /// Logging level used when `RUST_LOG` is not set.
    pub log_level: LogLevel,
}
