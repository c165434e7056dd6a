use super::ExportMetadata;
use crate::error::Result;
use crate::session::Turn;
use serde::Serialize;

#[derive(Serialize)]
struct JsonTranscript<'a> {
    metadata: &'a ExportMetadata,
    turns: &'a [Turn],
}

pub(super) fn render(turns: &[Turn], metadata: &ExportMetadata) -> Result<String> {
    let transcript = JsonTranscript { metadata, turns };
    Ok(serde_json::to_string_pretty(&transcript)?)
}
