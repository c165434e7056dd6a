//! Writes rendered transcripts to disk.

use crate::paths::ParlorPaths;
use parlor_core::{Export, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Saves exports into a target directory.
pub struct ExportWriter {
    dir: PathBuf,
}

impl ExportWriter {
    /// Writer for the default exports directory.
    pub fn new() -> Result<Self> {
        Ok(Self::with_dir(ParlorPaths::exports_dir()?))
    }

    pub fn with_dir(dir: PathBuf) -> Self {
        Self { dir }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Writes `export` under its suggested file name, replacing any
    /// previous file of that name. Returns the written path.
    pub fn write(&self, export: &Export) -> Result<PathBuf> {
        self.write_to(export, &self.dir.join(&export.file_name))
    }

    /// Writes `export` to an explicit path.
    pub fn write_to(&self, export: &Export, path: &Path) -> Result<PathBuf> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(path, export.content.as_bytes())?;
        tracing::info!(
            "Wrote {} export ({} bytes) to {:?}",
            export.format,
            export.content.len(),
            path
        );
        Ok(path.to_path_buf())
    }
}
