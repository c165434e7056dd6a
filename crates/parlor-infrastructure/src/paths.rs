//! Unified path management for parlor files.
//!
//! ```text
//! ~/.config/parlor/            # Config directory
//! └── settings.toml            # Chat settings
//!
//! ~/.local/share/parlor/       # Data directory
//! ├── exports/                 # Default export destination
//! └── logs/                    # Application logs
//!     └── parlor.log
//! ```

use parlor_core::{ParlorError, Result};
use std::path::PathBuf;

const APP_DIR: &str = "parlor";

/// Unified path management for parlor.
pub struct ParlorPaths;

impl ParlorPaths {
    /// Returns the parlor configuration directory (e.g., `~/.config/parlor/`).
    pub fn config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or_else(|| ParlorError::config("Cannot find config directory"))
    }

    /// Returns the parlor data directory (e.g., `~/.local/share/parlor/`).
    pub fn data_dir() -> Result<PathBuf> {
        dirs::data_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or_else(|| ParlorError::config("Cannot find data directory"))
    }

    /// Returns the path to the settings file.
    pub fn settings_file() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("settings.toml"))
    }

    /// Returns the default directory for exported transcripts.
    pub fn exports_dir() -> Result<PathBuf> {
        Ok(Self::data_dir()?.join("exports"))
    }

    /// Returns the log directory.
    pub fn logs_dir() -> Result<PathBuf> {
        Ok(Self::data_dir()?.join("logs"))
    }
}
