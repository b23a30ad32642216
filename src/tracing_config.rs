use std::env;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::{BridgeError, Result, config::LogLevel};

const LOG_FORMAT_VAR: &str = "PLAYBACK_BRIDGE_LOG_FORMAT";

fn env_filter(default_level: LogLevel) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level.to_string()))
}

fn log_format() -> String {
    env::var(LOG_FORMAT_VAR).unwrap_or_else(|_| "pretty".to_string())
}

/// Initialize tracing for the host process
///
/// Uses `RUST_LOG` if set, otherwise `default_level` (normally the
/// configured `general.log_level`). Output is pretty-printed unless
/// `PLAYBACK_BRIDGE_LOG_FORMAT=json`.
///
/// # Errors
/// Returns error if a global subscriber is already installed
pub fn init(default_level: LogLevel) -> Result<()> {
    let registry = tracing_subscriber::registry().with(env_filter(default_level));

    let result = match log_format().as_str() {
        "json" => registry
            .with(fmt::layer().json().with_target(true).with_level(true))
            .try_init(),
        _ => registry
            .with(
                fmt::layer()
                    .pretty()
                    .with_target(true)
                    .with_level(true)
                    .with_thread_names(true),
            )
            .try_init(),
    };

    result.map_err(|e| BridgeError::Logging(e.to_string()))
}

/// Initialize tracing with file output
///
/// Like [`init`] but also writes compact logs to a daily rolling file in
/// the bridge's log directory.
///
/// # Errors
/// Returns error if the log directory cannot be created or a global
/// subscriber is already installed
pub fn init_with_file(default_level: LogLevel) -> Result<()> {
    const DAYS_TO_KEEP: usize = 7;

    let log_dir = crate::config::ConfigPaths::log_dir()?;

    let file_appender = tracing_appender::rolling::Builder::new()
        .rotation(tracing_appender::rolling::Rotation::DAILY)
        .max_log_files(DAYS_TO_KEEP)
        .filename_prefix("playback-bridge")
        .filename_suffix("log")
        .build(&log_dir)
        .map_err(|e| BridgeError::io_at(e, &log_dir))?;
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let registry = tracing_subscriber::registry().with(env_filter(default_level));

    let result = match log_format().as_str() {
        "json" => registry
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_level(true)
                    .with_writer(std::io::stdout),
            )
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_level(true)
                    .with_writer(non_blocking)
                    .with_ansi(false),
            )
            .try_init(),
        _ => registry
            .with(
                fmt::layer()
                    .pretty()
                    .with_target(true)
                    .with_level(true)
                    .with_thread_names(true)
                    .with_writer(std::io::stdout),
            )
            .with(
                fmt::layer()
                    .compact()
                    .with_target(true)
                    .with_level(true)
                    .with_writer(non_blocking)
                    .with_ansi(false),
            )
            .try_init(),
    };

    result.map_err(|e| BridgeError::Logging(e.to_string()))?;

    // The writer must live as long as the process.
    std::mem::forget(guard);

    Ok(())
}
