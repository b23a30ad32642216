use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Logging level for the bridge.
///
/// Controls the verbosity of log output, from errors only
/// to detailed trace information.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Only errors, such as malformed item identifiers.
    Error,

    /// Warnings and errors, including ambiguous catalog matches and failed pushes.
    Warn,

    /// Session lifecycle messages (default level).
    #[default]
    Info,

    /// Matching decisions and every timeline push.
    Debug,

    /// Everything, including monitor wake-ups.
    Trace,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Error => write!(f, "error"),
            LogLevel::Warn => write!(f, "warn"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Trace => write!(f, "trace"),
        }
    }
}
