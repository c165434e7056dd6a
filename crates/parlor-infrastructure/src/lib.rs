//! Filesystem adapters for Parlor.
//!
//! - `paths`: platform config/data/log locations
//! - `storage`: atomic TOML file handle
//! - `toml_settings_repository`: `SettingsRepository` over a TOML file
//! - `export_writer`: saves rendered transcripts

pub mod export_writer;
pub mod paths;
pub mod storage;
pub mod toml_settings_repository;

pub use crate::export_writer::ExportWriter;
pub use crate::paths::ParlorPaths;
pub use crate::toml_settings_repository::TomlSettingsRepository;
