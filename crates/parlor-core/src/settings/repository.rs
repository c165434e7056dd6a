//! Settings repository trait.
//!
//! Defines the interface for settings persistence operations.

use super::model::ChatSettings;
use crate::error::Result;

/// An abstract repository for loading and saving chat settings.
///
/// This trait decouples the core from the storage mechanism
/// (e.g., TOML file, in-memory fixture).
///
/// # Implementation Notes
///
/// A missing backing store is not an error: `load` returns defaults.
pub trait SettingsRepository: Send + Sync {
    /// Loads the stored settings.
    ///
    /// # Returns
    ///
    /// - `Ok(ChatSettings)`: Stored settings, or defaults if nothing is stored
    /// - `Err(ParlorError)`: Error if the store exists but cannot be read or is invalid
    fn load(&self) -> Result<ChatSettings>;

    /// Saves settings, replacing what is stored.
    fn save(&self, settings: &ChatSettings) -> Result<()>;
}
