//! Transcript export.
//!
//! Renders a turn sequence plus session metadata into one of three file
//! formats. Rendering is a pure function of its inputs: the same turns and
//! metadata always produce the same bytes.
//!
//! - `txt`: human-readable transcript
//! - `json`: `{ "metadata": {...}, "turns": [...] }`
//! - `csv`: header row, one row per turn, trailing metadata rows

mod csv;
mod json;
mod txt;

pub use self::csv::{CSV_HEADER, CSV_METADATA_ROWS};

use crate::error::{ParlorError, Result};
use crate::model_id::ModelId;
use crate::persona::PersonaId;
use crate::session::Turn;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::{AsRefStr, Display, EnumIter, IntoEnumIterator};

/// Base name used for downloaded transcripts.
pub const EXPORT_FILE_STEM: &str = "chat_history";

/// Supported export targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, AsRefStr, EnumIter)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ExportFormat {
    Txt,
    Json,
    Csv,
}

impl ExportFormat {
    /// File extension without the dot.
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Txt => "txt",
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            ExportFormat::Txt => "text/plain",
            ExportFormat::Json => "application/json",
            ExportFormat::Csv => "text/csv",
        }
    }

    /// Suggested file name, e.g. `chat_history.csv`.
    pub fn file_name(&self) -> String {
        format!("{}.{}", EXPORT_FILE_STEM, self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = ParlorError;

    /// Accepts the extension in any case, with or without a leading dot.
    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().trim_start_matches('.');
        Self::iter()
            .find(|format| format.extension().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ParlorError::InvalidFormat(s.to_string()))
    }
}

/// Session facts written alongside the turns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportMetadata {
    pub session_id: String,
    pub exported_at: DateTime<Utc>,
    pub turn_count: usize,
    pub persona: PersonaId,
    pub model: ModelId,
    pub custom_prompt: Option<String>,
}

/// A rendered transcript ready to be saved or offered for download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Export {
    pub format: ExportFormat,
    pub file_name: String,
    pub mime_type: &'static str,
    pub content: String,
}

/// Renders `turns` in `format`.
///
/// An empty turn list is valid and yields a file with metadata only.
pub fn render(turns: &[Turn], metadata: &ExportMetadata, format: ExportFormat) -> Result<Export> {
    let content = match format {
        ExportFormat::Txt => txt::render(turns, metadata),
        ExportFormat::Json => json::render(turns, metadata)?,
        ExportFormat::Csv => self::csv::render(turns, metadata)?,
    };

    Ok(Export {
        format,
        file_name: format.file_name(),
        mime_type: format.mime_type(),
        content,
    })
}

/// RFC 3339 at second precision, the form used in TXT and CSV output.
pub(crate) fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(chrono::SecondsFormat::Secs, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_parsing() {
        assert_eq!("txt".parse::<ExportFormat>().unwrap(), ExportFormat::Txt);
        assert_eq!("JSON".parse::<ExportFormat>().unwrap(), ExportFormat::Json);
        assert_eq!(".csv".parse::<ExportFormat>().unwrap(), ExportFormat::Csv);
    }

    #[test]
    fn test_unknown_format_is_invalid_format() {
        let err = "pdf".parse::<ExportFormat>().unwrap_err();
        assert_eq!(err, ParlorError::InvalidFormat("pdf".to_string()));
        assert!("".parse::<ExportFormat>().unwrap_err().is_invalid_format());
    }

    #[test]
    fn test_file_names() {
        assert_eq!(ExportFormat::Txt.file_name(), "chat_history.txt");
        assert_eq!(ExportFormat::Json.mime_type(), "application/json");
        assert_eq!(ExportFormat::Csv.to_string(), "csv");
    }
}
