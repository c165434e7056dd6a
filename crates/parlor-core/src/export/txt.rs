use super::{ExportMetadata, format_timestamp};
use crate::session::{Role, Turn};

pub(super) fn render(turns: &[Turn], metadata: &ExportMetadata) -> String {
    let mut lines = vec![
        format!("Session Persona: {}", metadata.persona),
        format!("Model: {}", metadata.model),
        format!("Session: {}", metadata.session_id),
        format!("Exported At: {}", format_timestamp(metadata.exported_at)),
        format!("Turn Count: {}", metadata.turn_count),
    ];
    if let Some(prompt) = &metadata.custom_prompt {
        lines.push(format!("Custom Prompt: {}", prompt));
    }
    lines.push(String::new());

    for (index, turn) in turns.iter().enumerate() {
        let speaker = match (turn.role(), turn.persona()) {
            (Role::System, _) | (_, None) => turn.role().label().to_string(),
            (role, Some(persona)) => format!("{} ({})", role.label(), persona),
        };
        lines.push(format!(
            "[{}] {} @ {}: {}",
            index + 1,
            speaker,
            format_timestamp(turn.timestamp()),
            turn.content()
        ));
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}
