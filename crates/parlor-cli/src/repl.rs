//! Interactive chat loop.

use std::borrow::Cow::{self, Borrowed, Owned};
use std::path::PathBuf;

use anyhow::{Context as _, Result};
use colored::Colorize;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{Context, Editor, Helper};

use parlor_core::{
    send, CannedResponder, ChatSettings, ConversationStore, ExportFormat, ModelId, PersonaId,
    Responder, Role, Turn,
};
use parlor_infrastructure::ExportWriter;

use crate::commands::listing;
use crate::commands::repl_command::{help_text, ReplCommand, SLASH_COMMANDS};

/// CLI helper for rustyline that provides completion, highlighting, and hints.
#[derive(Clone)]
struct CliHelper {
    commands: Vec<String>,
}

impl CliHelper {
    fn new() -> Self {
        Self {
            commands: SLASH_COMMANDS.iter().map(|c| c.to_string()).collect(),
        }
    }

    /// Candidates for the argument of `command`.
    fn argument_candidates(command: &str) -> Vec<String> {
        match command {
            "/persona" => PersonaId::all().iter().map(|p| p.to_string()).collect(),
            "/model" => ModelId::all().iter().map(|m| m.to_string()).collect(),
            "/export" => [ExportFormat::Txt, ExportFormat::Json, ExportFormat::Csv]
                .iter()
                .map(|f| f.to_string())
                .collect(),
            _ => Vec::new(),
        }
    }
}

impl Helper for CliHelper {}

impl Completer for CliHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line = &line[..pos];

        if !line.starts_with('/') {
            return Ok((0, vec![]));
        }

        let to_pairs = |candidates: Vec<String>, prefix: &str| -> Vec<Pair> {
            candidates
                .into_iter()
                .filter(|c| c.to_lowercase().starts_with(&prefix.to_lowercase()))
                .map(|c| Pair {
                    display: c.clone(),
                    replacement: c,
                })
                .collect()
        };

        match line.split_once(' ') {
            None => Ok((0, to_pairs(self.commands.clone(), line))),
            Some((command, arg)) => {
                let start = command.len() + 1;
                Ok((start, to_pairs(Self::argument_candidates(command), arg)))
            }
        }
    }
}

impl Highlighter for CliHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if line.starts_with('/') {
            Owned(line.bright_cyan().to_string())
        } else {
            Borrowed(line)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

impl Hinter for CliHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        let line = &line[..pos];

        if line.starts_with('/') && !line.contains(' ') {
            self.commands
                .iter()
                .find(|cmd| cmd.starts_with(line) && cmd.len() > line.len())
                .map(|cmd| cmd[line.len()..].to_string())
        } else {
            None
        }
    }
}

impl Validator for CliHelper {}

enum Flow {
    Continue,
    Quit,
}

/// Owns the session for one `parlor chat` run.
pub struct ChatRepl<R: Responder> {
    store: ConversationStore,
    responder: R,
    settings: ChatSettings,
    writer: ExportWriter,
}

impl ChatRepl<CannedResponder> {
    pub fn with_canned_responder(
        store: ConversationStore,
        settings: ChatSettings,
        writer: ExportWriter,
    ) -> Self {
        Self::new(store, CannedResponder::new(), settings, writer)
    }
}

impl<R: Responder> ChatRepl<R> {
    pub fn new(
        store: ConversationStore,
        responder: R,
        settings: ChatSettings,
        writer: ExportWriter,
    ) -> Self {
        Self {
            store,
            responder,
            settings,
            writer,
        }
    }

    pub fn store(&self) -> &ConversationStore {
        &self.store
    }

    /// Runs the read-eval-print loop until `/quit`, Ctrl-C or Ctrl-D.
    pub fn run(&mut self) -> Result<()> {
        let mut editor: Editor<CliHelper, DefaultHistory> =
            Editor::new().context("Failed to initialise line editor")?;
        editor.set_helper(Some(CliHelper::new()));

        self.print_banner();

        loop {
            let prompt = format!("{} > ", self.store.persona().label());
            match editor.readline(&prompt) {
                Ok(line) => {
                    if !line.trim().is_empty() {
                        let _ = editor.add_history_entry(line.as_str());
                    }
                    match ReplCommand::parse(&line).and_then(|cmd| self.handle(cmd)) {
                        Ok(Flow::Continue) => {}
                        Ok(Flow::Quit) => break,
                        Err(e) => println!("{}", format!("{:#}", e).red()),
                    }
                }
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
                Err(e) => return Err(e).context("Failed to read input"),
            }
        }

        println!("{}", "Goodbye!".bright_yellow());
        Ok(())
    }

    fn handle(&mut self, command: ReplCommand) -> Result<Flow> {
        match command {
            ReplCommand::Empty => {}
            ReplCommand::Send(text) => {
                let reply = send(
                    &mut self.store,
                    &mut self.responder,
                    &text,
                    self.settings.temperature,
                )?;
                println!("{}", self.render_turn(&reply));
            }
            ReplCommand::Persona(persona) => {
                match self.store.switch_persona(persona).cloned() {
                    Some(notice) => {
                        println!("{}", self.render_turn(&notice));
                        let persona = self.store.persona();
                        println!("{}", format!("Responding as: {}", persona.description).dimmed());
                    }
                    None => println!("{}", format!("Already in {} mode.", persona).dimmed()),
                }
            }
            ReplCommand::Model(model) => {
                self.store.set_model(model);
                println!("{}", format!("Model set to {}.", model).bright_yellow());
            }
            ReplCommand::Prompt(prompt) => {
                let cleared = prompt.is_none();
                self.store.set_custom_prompt(prompt);
                if cleared {
                    println!("{}", "Custom prompt cleared.".bright_yellow());
                } else {
                    let message = "Custom prompt set (used by the Custom persona).";
                    println!("{}", message.bright_yellow());
                }
            }
            ReplCommand::Export { format, path } => {
                let written = self.export(format, path)?;
                println!("{}", format!("Saved {}", written.display()).bright_green());
            }
            ReplCommand::History => {
                if self.store.is_empty() {
                    println!("{}", "No conversation history yet.".dimmed());
                }
                for turn in self.store.turns() {
                    println!("{}", self.render_turn(turn));
                }
            }
            ReplCommand::Stats => {
                let stats = self.store.stats();
                println!("Session duration: {}", stats.duration_label());
                println!("Messages sent:    {}", stats.user_turns);
                println!("Total messages:   {}", stats.total_turns);
                println!("Total characters: {}", stats.total_chars);
                println!("Model:            {}", self.store.current_model());
            }
            ReplCommand::Clear => {
                self.store.clear();
                println!("{}", "Chat cleared - let's start fresh!".bright_yellow());
            }
            ReplCommand::Personas => listing::personas(),
            ReplCommand::Models => listing::models(),
            ReplCommand::Help => println!("{}", help_text()),
            ReplCommand::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    /// Renders and writes the conversation; returns the written path.
    pub fn export(&self, format: ExportFormat, path: Option<PathBuf>) -> Result<PathBuf> {
        let export = self.store.export_as(format)?;
        let written = match path {
            Some(path) => self.writer.write_to(&export, &path)?,
            None => self.writer.write(&export)?,
        };
        Ok(written)
    }

    fn render_turn(&self, turn: &Turn) -> String {
        let stamp = if self.settings.show_timestamps {
            format!("[{}] ", turn.timestamp().format("%H:%M:%S"))
        } else {
            String::new()
        };

        match turn.role() {
            Role::User => format!(
                "{}{} {}",
                stamp.dimmed(),
                "You:".bright_cyan().bold(),
                turn.content()
            ),
            Role::Assistant => {
                let name = &self.settings.assistant_name;
                let speaker = match turn.persona() {
                    Some(persona) => format!("{} ({}):", name, persona.persona().label()),
                    None => format!("{}:", name),
                };
                format!(
                    "{}{} {}",
                    stamp.dimmed(),
                    speaker.bright_green().bold(),
                    turn.content()
                )
            }
            Role::System => format!(
                "{}{}",
                stamp.dimmed(),
                format!("🔄 {}", turn.content()).yellow()
            ),
        }
    }

    fn print_banner(&self) {
        let persona = self.store.persona();
        println!(
            "{}",
            format!("🤖 {} - {} Mode", self.settings.assistant_name, persona.label())
                .bright_magenta()
                .bold()
        );
        println!("{}", format!("Responding as: {}", persona.description).dimmed());
        let model = self.store.current_model();
        println!("{}", format!("Model: {} | /help for commands", model).dimmed());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn repl(dir: &TempDir) -> ChatRepl<CannedResponder> {
        let settings = ChatSettings::default();
        let store = ConversationStore::new(settings.persona, settings.model);
        ChatRepl::new(
            store,
            CannedResponder::seeded(1),
            settings,
            ExportWriter::with_dir(dir.path().to_path_buf()),
        )
    }

    #[test]
    fn test_send_and_switch_flow() {
        let dir = TempDir::new().unwrap();
        let mut repl = repl(&dir);

        repl.handle(ReplCommand::Send("hello".to_string())).unwrap();
        repl.handle(ReplCommand::Persona(PersonaId::Technical)).unwrap();
        repl.handle(ReplCommand::Persona(PersonaId::Technical)).unwrap();

        let roles: Vec<Role> = repl.store().turns().iter().map(|t| t.role()).collect();
        assert_eq!(roles, vec![Role::User, Role::Assistant, Role::System]);
    }

    #[test]
    fn test_export_command_writes_file() {
        let dir = TempDir::new().unwrap();
        let mut repl = repl(&dir);
        repl.handle(ReplCommand::Send("hello".to_string())).unwrap();

        repl.handle(ReplCommand::Export {
            format: ExportFormat::Json,
            path: None,
        })
        .unwrap();

        let written = dir.path().join("chat_history.json");
        assert!(std::fs::read_to_string(written).unwrap().contains("\"hello\""));
    }

    #[test]
    fn test_blank_send_is_an_error_not_a_turn() {
        let dir = TempDir::new().unwrap();
        let mut repl = repl(&dir);
        assert!(repl.handle(ReplCommand::Send(" ".to_string())).is_err());
        assert!(repl.store().is_empty());
    }

    #[test]
    fn test_quit_stops_loop() {
        let dir = TempDir::new().unwrap();
        let mut repl = repl(&dir);
        assert!(matches!(repl.handle(ReplCommand::Quit).unwrap(), Flow::Quit));
        assert!(matches!(repl.handle(ReplCommand::Clear).unwrap(), Flow::Continue));
    }

    #[test]
    fn test_argument_completion_candidates() {
        assert_eq!(
            CliHelper::argument_candidates("/export"),
            vec!["txt", "json", "csv"]
        );
        assert!(CliHelper::argument_candidates("/model").contains(&"gpt-4o".to_string()));
        assert!(CliHelper::argument_candidates("/stats").is_empty());
    }
}
