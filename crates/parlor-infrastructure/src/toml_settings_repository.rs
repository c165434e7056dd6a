//! TOML-based SettingsRepository implementation

use crate::paths::ParlorPaths;
use crate::storage::AtomicTomlFile;
use parlor_core::{ChatSettings, Result, SettingsRepository};
use std::path::{Path, PathBuf};

/// A repository that stores chat settings in a TOML file.
///
/// Responsibilities:
/// - Load settings, falling back to defaults when the file is missing or empty
/// - Validate settings on load and before save
///
/// Does NOT:
/// - Handle atomic writes (delegated to AtomicTomlFile)
pub struct TomlSettingsRepository {
    file: AtomicTomlFile<ChatSettings>,
}

impl TomlSettingsRepository {
    /// Creates a repository at the default path (~/.config/parlor/settings.toml)
    pub fn new() -> Result<Self> {
        Ok(Self::with_path(ParlorPaths::settings_file()?))
    }

    /// Creates a repository with a custom path (for testing or `--config`)
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            file: AtomicTomlFile::new(path),
        }
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }
}

impl SettingsRepository for TomlSettingsRepository {
    fn load(&self) -> Result<ChatSettings> {
        let settings = match self.file.load()? {
            Some(settings) => settings,
            None => {
                tracing::debug!("No settings at {:?}, using defaults", self.path());
                ChatSettings::default()
            }
        };
        settings.validate()?;
        Ok(settings)
    }

    fn save(&self, settings: &ChatSettings) -> Result<()> {
        settings.validate()?;
        self.file.save(settings)?;
        tracing::info!("Saved settings to {:?}", self.path());
        Ok(())
    }
}
