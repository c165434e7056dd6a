use super::{ExportMetadata, format_timestamp};
use crate::error::{ParlorError, Result};
use crate::session::Turn;

/// Column names of the header row.
pub const CSV_HEADER: [&str; 5] = ["index", "role", "persona", "timestamp", "content"];

/// Number of key/value rows appended after the turn rows.
pub const CSV_METADATA_ROWS: usize = 6;

pub(super) fn render(turns: &[Turn], metadata: &ExportMetadata) -> Result<String> {
    // Metadata rows have two fields, turn rows five.
    let mut writer = ::csv::WriterBuilder::new()
        .flexible(true)
        .from_writer(Vec::new());

    writer.write_record(CSV_HEADER)?;
    for (index, turn) in turns.iter().enumerate() {
        let persona = turn.persona().map(|p| p.to_string()).unwrap_or_default();
        writer.write_record([
            (index + 1).to_string().as_str(),
            turn.role().as_ref(),
            persona.as_str(),
            format_timestamp(turn.timestamp()).as_str(),
            turn.content(),
        ])?;
    }

    let metadata_rows: [(&str, String); CSV_METADATA_ROWS] = [
        ("session_id", metadata.session_id.clone()),
        ("exported_at", format_timestamp(metadata.exported_at)),
        ("turn_count", metadata.turn_count.to_string()),
        ("persona", metadata.persona.to_string()),
        ("model", metadata.model.to_string()),
        ("custom_prompt", metadata.custom_prompt.clone().unwrap_or_default()),
    ];
    for (key, value) in &metadata_rows {
        writer.write_record([*key, value.as_str()])?;
    }

    let bytes = writer.into_inner().map_err(|e| ParlorError::Serialization {
        format: "CSV".to_string(),
        message: e.to_string(),
    })?;
    String::from_utf8(bytes).map_err(|e| ParlorError::internal(e.to_string()))
}
