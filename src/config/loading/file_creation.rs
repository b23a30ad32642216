use crate::{BridgeError, Result};
use std::{fs, path::Path};

const DEFAULT_CONFIG_HEADER: &str = "# playback-bridge configuration file\n";

/// Creates a default configuration file if it doesn't exist
pub fn create_default_config_file(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| BridgeError::io_at(e, parent))?;
    }

    fs::write(path, DEFAULT_CONFIG_HEADER).map_err(|e| BridgeError::io_at(e, path))?;

    Ok(())
}
