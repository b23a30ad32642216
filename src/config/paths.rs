use std::{
    env,
    io::{Error, ErrorKind},
    path::{Path, PathBuf},
};

const APP_DIR: &str = "playback-bridge";

/// Utility struct for locating configuration and log paths
///
/// Follows the XDG Base Directory specification
pub struct ConfigPaths;

impl ConfigPaths {
    /// Returns the configuration directory path for the application
    ///
    /// - First checks `XDG_CONFIG_HOME`
    /// - Falls back to `$HOME/.config`
    /// - Appends "playback-bridge" to the base config directory
    ///
    /// # Errors
    /// Returns an error if neither `XDG_CONFIG_HOME` nor `HOME` environment variables are set
    pub fn config_dir() -> Result<PathBuf, Error> {
        let config_home = env::var("XDG_CONFIG_HOME")
            .or_else(|_| env::var("HOME").map(|home| format!("{home}/.config")))
            .map_err(|_| {
                Error::new(
                    ErrorKind::NotFound,
                    "Neither XDG_CONFIG_HOME nor HOME environment variable found",
                )
            })?;

        Ok(PathBuf::from(config_home).join(APP_DIR))
    }

    /// Get the application log directory, creating it if needed
    ///
    /// Uses `XDG_STATE_HOME` when set, otherwise `$HOME/.local/state`.
    ///
    /// # Errors
    /// Returns error if no base directory is known or it cannot be created
    pub fn log_dir() -> Result<PathBuf, Error> {
        let state_home = env::var("XDG_STATE_HOME")
            .or_else(|_| env::var("HOME").map(|home| format!("{home}/.local/state")))
            .map_err(|_| {
                Error::new(
                    ErrorKind::NotFound,
                    "Neither XDG_STATE_HOME nor HOME environment variable found",
                )
            })?;

        Self::log_dir_in(Path::new(&state_home))
    }

    pub(crate) fn log_dir_in(state_home: &Path) -> Result<PathBuf, Error> {
        let log_dir = state_home.join(APP_DIR).join("logs");
        if !log_dir.exists() {
            std::fs::create_dir_all(&log_dir)?;
        }

        Ok(log_dir)
    }

    /// Returns the path to the main configuration file
    ///
    /// # Errors
    /// Returns an error if the configuration directory cannot be determined
    pub fn main_config() -> Result<PathBuf, Error> {
        Ok(Self::config_dir()?.join("config.toml"))
    }
}
