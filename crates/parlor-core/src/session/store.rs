//! The conversation store for one session.

use super::message::{Role, Turn};
use super::model::Session;
use super::stats::SessionStats;
use crate::chat::{ChatRequest, RequestMessage};
use crate::clock::{Clock, SystemClock};
use crate::error::Result;
use crate::export::{self, Export, ExportFormat, ExportMetadata};
use crate::model_id::ModelId;
use crate::persona::{Persona, PersonaId};
use crate::settings::ChatSettings;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::{debug, info};

/// Owns the turn history of the active session.
///
/// The store is the only writer of a session's turns. Turns are appended in
/// conversation order and never edited; a persona switch is recorded as a
/// new system turn instead of rewriting earlier ones.
///
/// Timestamps come from the injected [`Clock`] and are clamped so they never
/// decrease from one turn to the next.
pub struct ConversationStore {
    session: Session,
    clock: Arc<dyn Clock>,
    max_history: Option<usize>,
    last_timestamp: Option<DateTime<Utc>>,
}

impl ConversationStore {
    /// Creates a store backed by the system clock.
    pub fn new(persona: PersonaId, model: ModelId) -> Self {
        Self::with_clock(persona, model, Arc::new(SystemClock))
    }

    pub fn with_clock(persona: PersonaId, model: ModelId, clock: Arc<dyn Clock>) -> Self {
        let session = Session::new(persona, model, clock.now());
        debug!(session_id = %session.id, %persona, %model, "Created conversation store");
        Self {
            session,
            clock,
            max_history: None,
            last_timestamp: None,
        }
    }

    /// Creates a store configured from user settings.
    pub fn from_settings(settings: &ChatSettings, clock: Arc<dyn Clock>) -> Self {
        let mut store = Self::with_clock(settings.persona, settings.model, clock)
            .with_max_history(settings.max_history);
        store.set_custom_prompt(settings.custom_prompt.clone());
        store
    }

    /// Limits the history length. The first turn is always kept.
    ///
    /// Limits below 2 are raised to 2 so the newest turn survives trimming.
    pub fn with_max_history(mut self, limit: Option<usize>) -> Self {
        self.max_history = limit.map(|l| l.max(2));
        self.enforce_history_limit();
        self
    }

    // ============================================================================
    // Accessors
    // ============================================================================

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn turns(&self) -> &[Turn] {
        &self.session.turns
    }

    pub fn len(&self) -> usize {
        self.session.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.session.turns.is_empty()
    }

    pub fn current_persona(&self) -> PersonaId {
        self.session.current_persona
    }

    pub fn current_model(&self) -> ModelId {
        self.session.current_model
    }

    pub fn custom_prompt(&self) -> Option<&str> {
        self.session.custom_prompt.as_deref()
    }

    /// The preset for the active persona.
    pub fn persona(&self) -> Persona {
        self.session.current_persona.persona()
    }

    /// System prompt for the active persona, with the custom prompt applied.
    pub fn system_prompt(&self) -> String {
        self.persona().effective_system_prompt(self.custom_prompt())
    }

    // ============================================================================
    // Mutations
    // ============================================================================

    /// Appends a turn stamped with the current time.
    ///
    /// User and assistant turns are attributed to the active persona.
    /// Content is not validated; an empty string is a valid turn.
    pub fn append(&mut self, role: Role, content: impl Into<String>) -> &Turn {
        let persona = match role {
            Role::System => None,
            Role::User | Role::Assistant => Some(self.session.current_persona),
        };
        self.push_turn(role, content.into(), persona)
    }

    /// Makes `new_persona` active and records the switch as a system turn.
    ///
    /// Returns the notice, or `None` when `new_persona` is already active.
    pub fn switch_persona(&mut self, new_persona: PersonaId) -> Option<&Turn> {
        let previous = self.session.current_persona;
        if previous == new_persona {
            return None;
        }

        self.session.current_persona = new_persona;
        info!(
            session_id = %self.session.id,
            from = %previous,
            to = %new_persona,
            "Switched persona"
        );
        let notice = format!("Switched from {} to {} mode.", previous, new_persona);
        Some(self.push_turn(Role::System, notice, None))
    }

    /// Points the session at another model. History is untouched.
    pub fn set_model(&mut self, model: ModelId) {
        if self.session.current_model != model {
            info!(session_id = %self.session.id, from = %self.session.current_model, to = %model, "Switched model");
            self.session.current_model = model;
        }
    }

    /// Sets the Custom persona prompt; blank text clears it.
    pub fn set_custom_prompt(&mut self, prompt: Option<String>) {
        self.session.custom_prompt = prompt
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty());
    }

    /// Discards every turn. Persona, model and session id are kept.
    pub fn clear(&mut self) {
        info!(session_id = %self.session.id, discarded = self.len(), "Cleared conversation");
        self.session.turns.clear();
    }

    fn push_turn(&mut self, role: Role, content: String, persona: Option<PersonaId>) -> &Turn {
        let now = self.clock.now();
        let timestamp = match self.last_timestamp {
            Some(last) if last > now => last,
            _ => now,
        };
        self.last_timestamp = Some(timestamp);

        debug!(session_id = %self.session.id, %role, chars = content.len(), "Appending turn");
        self.session
            .turns
            .push(Turn::new(role, content, timestamp, persona));
        self.enforce_history_limit();

        let last = self.session.turns.len() - 1;
        &self.session.turns[last]
    }

    fn enforce_history_limit(&mut self) {
        let Some(limit) = self.max_history else {
            return;
        };
        let len = self.session.turns.len();
        if len > limit {
            let overflow = len - limit;
            self.session.turns.drain(1..1 + overflow);
            debug!(session_id = %self.session.id, dropped = overflow, "Trimmed history");
        }
    }

    // ============================================================================
    // Derived views
    // ============================================================================

    /// Messages for the hosted model: the system prompt, then every turn.
    pub fn request_messages(&self) -> Vec<RequestMessage> {
        let mut messages = Vec::with_capacity(self.len() + 1);
        messages.push(RequestMessage {
            role: Role::System,
            content: self.system_prompt(),
        });
        messages.extend(self.session.turns.iter().map(|turn| RequestMessage {
            role: turn.role(),
            content: turn.content().to_string(),
        }));
        messages
    }

    /// Full request for the active model at `temperature`.
    pub fn chat_request(&self, temperature: f64) -> ChatRequest {
        ChatRequest::from_store(self, temperature)
    }

    pub fn stats(&self) -> SessionStats {
        SessionStats::collect(
            &self.session.turns,
            self.session.created_at,
            self.clock.now(),
        )
    }

    /// Metadata describing the session as of now.
    pub fn metadata(&self) -> ExportMetadata {
        ExportMetadata {
            session_id: self.session.id.clone(),
            exported_at: self.clock.now(),
            turn_count: self.len(),
            persona: self.session.current_persona,
            model: self.session.current_model,
            custom_prompt: self.session.custom_prompt.clone(),
        }
    }

    // ============================================================================
    // Export
    // ============================================================================

    /// Exports the conversation to a format named by string.
    ///
    /// Fails with `InvalidFormat` unless `format` is txt, json or csv.
    pub fn export(&self, format: &str) -> Result<Export> {
        self.export_as(format.parse()?)
    }

    pub fn export_as(&self, format: ExportFormat) -> Result<Export> {
        self.export_with(format, &self.metadata())
    }

    /// Exports with caller-supplied metadata; output is fully determined by
    /// the turns and `metadata`.
    pub fn export_with(&self, format: ExportFormat, metadata: &ExportMetadata) -> Result<Export> {
        let export = export::render(&self.session.turns, metadata, format)?;
        info!(
            session_id = %self.session.id,
            %format,
            turns = self.len(),
            bytes = export.content.len(),
            "Exported conversation"
        );
        Ok(export)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::SteppingClock;
    use chrono::{Duration, TimeZone};

    fn start() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 5, 4, 10, 0, 0).unwrap()
    }

    fn store() -> ConversationStore {
        let clock = Arc::new(SteppingClock::new(start(), Duration::seconds(1)));
        ConversationStore::with_clock(PersonaId::Friendly, ModelId::Gpt4o, clock)
    }

    #[test]
    fn test_append_keeps_order_and_attribution() {
        let mut store = store();
        store.append(Role::User, "hello");
        store.append(Role::Assistant, "hi there");

        let turns = store.turns();
        assert_eq!(turns.len(), 2);
        assert_eq!(turns[0].content(), "hello");
        assert_eq!(turns[0].persona(), Some(PersonaId::Friendly));
        assert_eq!(turns[1].role(), Role::Assistant);
    }

    #[test]
    fn test_append_accepts_empty_content() {
        let mut store = store();
        let turn = store.append(Role::User, "");
        assert_eq!(turn.content(), "");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_switch_persona_appends_notice() {
        let mut store = store();
        store.append(Role::User, "hello");

        let notice = store.switch_persona(PersonaId::Technical).unwrap();
        assert_eq!(notice.role(), Role::System);
        assert_eq!(notice.content(), "Switched from Friendly to Technical mode.");
        assert_eq!(notice.persona(), None);
        assert_eq!(store.current_persona(), PersonaId::Technical);
        assert_eq!(store.turns()[0].content(), "hello");
    }

    #[test]
    fn test_switch_to_same_persona_is_noop() {
        let mut store = store();
        assert!(store.switch_persona(PersonaId::Friendly).is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn test_timestamps_clamped_when_clock_goes_backwards() {
        let clock = Arc::new(SteppingClock::new(start(), Duration::seconds(-10)));
        let mut store = ConversationStore::with_clock(PersonaId::Friendly, ModelId::Gpt4, clock);
        for i in 0..4 {
            store.append(Role::User, format!("m{i}"));
        }
        let stamps: Vec<_> = store.turns().iter().map(|t| t.timestamp()).collect();
        assert!(stamps.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_history_limit_keeps_first_turn() {
        let mut store = store().with_max_history(Some(3));
        store.append(Role::Assistant, "greeting");
        for i in 0..5 {
            store.append(Role::User, format!("m{i}"));
        }
        let contents: Vec<&str> = store.turns().iter().map(|t| t.content()).collect();
        assert_eq!(contents, vec!["greeting", "m3", "m4"]);
    }

    #[test]
    fn test_tiny_history_limit_keeps_newest_turn() {
        let mut store = store().with_max_history(Some(1));
        store.append(Role::Assistant, "greeting");
        store.append(Role::User, "older");
        let last = store.append(Role::User, "latest").content().to_string();
        assert_eq!(last, "latest");
        let contents: Vec<&str> = store.turns().iter().map(|t| t.content()).collect();
        assert_eq!(contents, vec!["greeting", "latest"]);
    }

    #[test]
    fn test_clear_keeps_persona_and_model() {
        let mut store = store();
        store.append(Role::User, "hello");
        store.switch_persona(PersonaId::Creative);
        store.clear();
        assert!(store.is_empty());
        assert_eq!(store.current_persona(), PersonaId::Creative);
        assert_eq!(store.current_model(), ModelId::Gpt4o);
    }

    #[test]
    fn test_request_messages_start_with_system_prompt() {
        let mut store = store();
        store.switch_persona(PersonaId::Custom);
        store.set_custom_prompt(Some("Answer in haiku.".to_string()));
        store.append(Role::User, "weather?");

        let messages = store.request_messages();
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[0].role, Role::System);
        assert_eq!(messages[0].content, "Answer in haiku.");
        assert_eq!(messages[1].role, Role::System);
        assert_eq!(messages[2].content, "weather?");

        let request = store.chat_request(0.2);
        assert_eq!(request.messages, messages);
        assert_eq!(request.model, store.current_model());
        assert_eq!(request.persona, PersonaId::Custom);
    }

    #[test]
    fn test_set_model_does_not_append() {
        let mut store = store();
        store.set_model(ModelId::Gpt35Turbo16k);
        assert_eq!(store.current_model(), ModelId::Gpt35Turbo16k);
        assert!(store.is_empty());
    }

    #[test]
    fn test_stats_count_roles() {
        let mut store = store();
        store.append(Role::User, "abc");
        store.append(Role::Assistant, "de");
        store.switch_persona(PersonaId::Technical);

        let stats = store.stats();
        assert_eq!(stats.total_turns, 3);
        assert_eq!(stats.user_turns, 1);
        assert_eq!(stats.assistant_turns, 1);
        assert_eq!(stats.system_turns, 1);
        assert_eq!(stats.total_chars, 5 + "Switched from Friendly to Technical mode.".len());
        assert_eq!(stats.started_at, start());
        assert!(stats.duration > Duration::zero());
    }

    #[test]
    fn test_export_rejects_unknown_format() {
        let store = store();
        let err = store.export("xml").unwrap_err();
        assert!(err.is_invalid_format());
    }
}
