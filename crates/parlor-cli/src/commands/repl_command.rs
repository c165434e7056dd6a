//! Parsing of REPL input lines.

use anyhow::{bail, Result};
use parlor_core::{ExportFormat, ModelId, PersonaId};
use std::path::PathBuf;

/// Slash commands offered for completion, in help order.
pub const SLASH_COMMANDS: &[&str] = &[
    "/persona", "/model", "/prompt", "/export", "/history", "/stats", "/clear", "/personas",
    "/models", "/help", "/quit",
];

/// One line of REPL input.
#[derive(Debug, Clone, PartialEq)]
pub enum ReplCommand {
    /// Plain text to send to the assistant
    Send(String),
    Persona(PersonaId),
    Model(ModelId),
    /// Custom persona prompt; `None` clears it
    Prompt(Option<String>),
    Export {
        format: ExportFormat,
        path: Option<PathBuf>,
    },
    History,
    Stats,
    Clear,
    Personas,
    Models,
    Help,
    Quit,
    /// Blank line
    Empty,
}

impl ReplCommand {
    pub fn parse(line: &str) -> Result<Self> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(Self::Empty);
        }
        if !line.starts_with('/') {
            return Ok(Self::Send(line.to_string()));
        }

        let (command, rest) = match line.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (line, ""),
        };

        let parsed = match command {
            "/persona" => Self::Persona(required(command, rest)?.parse()?),
            "/model" => Self::Model(required(command, rest)?.parse()?),
            "/prompt" => Self::Prompt((!rest.is_empty()).then(|| rest.to_string())),
            "/export" => {
                let mut args = required(command, rest)?.split_whitespace();
                let format = args.next().unwrap_or_default().parse()?;
                let path = args.next().map(PathBuf::from);
                Self::Export { format, path }
            }
            "/history" => Self::History,
            "/stats" => Self::Stats,
            "/clear" => Self::Clear,
            "/personas" => Self::Personas,
            "/models" => Self::Models,
            "/help" => Self::Help,
            "/quit" | "/exit" => Self::Quit,
            other => bail!("Unknown command: {} (try /help)", other),
        };
        Ok(parsed)
    }
}

fn required<'a>(command: &str, rest: &'a str) -> Result<&'a str> {
    if rest.is_empty() {
        bail!("{} needs an argument", command);
    }
    Ok(rest)
}

pub fn help_text() -> String {
    [
        "/persona <name>          switch persona (Professional, Creative, Technical, Friendly, Custom)",
        "/model <id>              switch model (e.g. gpt-4o)",
        "/prompt [text]           set the Custom persona prompt; no text clears it",
        "/export <txt|json|csv> [path]  save the conversation",
        "/history                 show the conversation",
        "/stats                   show session statistics",
        "/clear                   clear the conversation",
        "/personas, /models       list choices",
        "/quit                    leave",
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_is_send() {
        assert_eq!(
            ReplCommand::parse("  hello there ").unwrap(),
            ReplCommand::Send("hello there".to_string())
        );
        assert_eq!(ReplCommand::parse("   ").unwrap(), ReplCommand::Empty);
    }

    #[test]
    fn test_persona_and_model() {
        assert_eq!(
            ReplCommand::parse("/persona technical").unwrap(),
            ReplCommand::Persona(PersonaId::Technical)
        );
        assert_eq!(
            ReplCommand::parse("/model gpt-4o").unwrap(),
            ReplCommand::Model(ModelId::Gpt4o)
        );
        assert!(ReplCommand::parse("/persona").is_err());
        assert!(ReplCommand::parse("/persona pirate").is_err());
    }

    #[test]
    fn test_export_with_and_without_path() {
        assert_eq!(
            ReplCommand::parse("/export csv").unwrap(),
            ReplCommand::Export {
                format: ExportFormat::Csv,
                path: None
            }
        );
        assert_eq!(
            ReplCommand::parse("/export json /tmp/out.json").unwrap(),
            ReplCommand::Export {
                format: ExportFormat::Json,
                path: Some(PathBuf::from("/tmp/out.json"))
            }
        );
    }

    #[test]
    fn test_export_invalid_format_surfaces_error() {
        let err = ReplCommand::parse("/export pdf").unwrap_err();
        let parlor = err.downcast_ref::<parlor_core::ParlorError>().unwrap();
        assert!(parlor.is_invalid_format());
    }

    #[test]
    fn test_prompt_clears_when_empty() {
        assert_eq!(ReplCommand::parse("/prompt").unwrap(), ReplCommand::Prompt(None));
        assert_eq!(
            ReplCommand::parse("/prompt Be terse.").unwrap(),
            ReplCommand::Prompt(Some("Be terse.".to_string()))
        );
    }

    #[test]
    fn test_unknown_command() {
        let err = ReplCommand::parse("/dance").unwrap_err();
        assert!(err.to_string().contains("Unknown command: /dance"));
    }

    #[test]
    fn test_every_listed_command_parses() {
        for command in SLASH_COMMANDS {
            let line = match *command {
                "/persona" => "/persona Friendly".to_string(),
                "/model" => "/model gpt-4".to_string(),
                "/export" => "/export txt".to_string(),
                other => other.to_string(),
            };
            assert!(ReplCommand::parse(&line).is_ok(), "{line}");
        }
    }
}
