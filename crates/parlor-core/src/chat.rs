//! Chat send flow.
//!
//! One user interaction: record the input, ask the responder for a reply,
//! record the reply. The hosted model sits behind the [`Responder`] trait;
//! its failures are recorded in the conversation, never retried.

use crate::error::{ParlorError, Result};
use crate::model_id::ModelId;
use crate::persona::PersonaId;
use crate::session::{ConversationStore, Role, Turn};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// One role/content pair in a model request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestMessage {
    pub role: Role,
    pub content: String,
}

/// Everything a hosted chat-completion call needs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatRequest {
    pub model: ModelId,
    pub temperature: f64,
    pub messages: Vec<RequestMessage>,
    /// Active persona; not part of the wire request
    #[serde(skip)]
    pub persona: PersonaId,
}

impl ChatRequest {
    /// Builds the request for the store's current state.
    pub fn from_store(store: &ConversationStore, temperature: f64) -> Self {
        Self {
            model: store.current_model(),
            temperature,
            messages: store.request_messages(),
            persona: store.current_persona(),
        }
    }

    /// Content of the most recent user message, if any.
    pub fn last_user_message(&self) -> Option<&str> {
        self.messages
            .iter()
            .rev()
            .find(|m| m.role == Role::User)
            .map(|m| m.content.as_str())
    }
}

/// Produces the assistant reply for a request.
///
/// Implementations wrap a hosted model client. The call is synchronous.
pub trait Responder {
    fn respond(&mut self, request: &ChatRequest) -> Result<String>;
}

/// Sends `input` through `responder` and records both sides.
///
/// Blank input is rejected with `EmptyInput` and nothing is recorded.
/// A responder failure is recorded as an assistant turn starting with
/// `Error:` and the call still succeeds.
pub fn send(
    store: &mut ConversationStore,
    responder: &mut dyn Responder,
    input: &str,
    temperature: f64,
) -> Result<Turn> {
    if input.trim().is_empty() {
        return Err(ParlorError::EmptyInput);
    }

    store.append(Role::User, input);
    let request = store.chat_request(temperature);

    let reply = match responder.respond(&request) {
        Ok(text) => text,
        Err(err) => {
            warn!(
                session_id = %store.session().id,
                model = %request.model,
                error = %err,
                "Responder failed"
            );
            format!("Error: {}", err)
        }
    };

    Ok(store.append(Role::Assistant, reply).clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Echo;

    impl Responder for Echo {
        fn respond(&mut self, request: &ChatRequest) -> Result<String> {
            Ok(format!("echo: {}", request.last_user_message().unwrap_or_default()))
        }
    }

    struct Failing;

    impl Responder for Failing {
        fn respond(&mut self, _request: &ChatRequest) -> Result<String> {
            Err(ParlorError::responder("rate limit exceeded"))
        }
    }

    struct Recording {
        requests: Vec<ChatRequest>,
    }

    impl Responder for Recording {
        fn respond(&mut self, request: &ChatRequest) -> Result<String> {
            self.requests.push(request.clone());
            Ok("ok".to_string())
        }
    }

    #[test]
    fn test_send_records_user_and_assistant() {
        let mut store = ConversationStore::new(PersonaId::Friendly, ModelId::Gpt4);
        let reply = send(&mut store, &mut Echo, "hello", 0.7).unwrap();

        assert_eq!(reply.role(), Role::Assistant);
        assert_eq!(reply.content(), "echo: hello");
        assert_eq!(store.len(), 2);
        assert_eq!(store.turns()[0].role(), Role::User);
    }

    #[test]
    fn test_send_rejects_blank_input() {
        let mut store = ConversationStore::new(PersonaId::Friendly, ModelId::Gpt4);
        let err = send(&mut store, &mut Echo, "   ", 0.7).unwrap_err();
        assert_eq!(err, ParlorError::EmptyInput);
        assert!(store.is_empty());
    }

    #[test]
    fn test_responder_failure_is_recorded_not_raised() {
        let mut store = ConversationStore::new(PersonaId::Friendly, ModelId::Gpt4);
        let reply = send(&mut store, &mut Failing, "hello", 0.7).unwrap();
        assert!(reply.content().starts_with("Error: "));
        assert!(reply.content().contains("rate limit exceeded"));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_request_carries_model_temperature_and_history() {
        let mut store = ConversationStore::new(PersonaId::Technical, ModelId::Gpt4o);
        let mut responder = Recording { requests: Vec::new() };
        send(&mut store, &mut responder, "first", 0.2).unwrap();
        send(&mut store, &mut responder, "second", 0.2).unwrap();

        let last = responder.requests.last().unwrap();
        assert_eq!(last.model, ModelId::Gpt4o);
        assert_eq!(last.temperature, 0.2);
        assert_eq!(last.persona, PersonaId::Technical);
        // system prompt + first + ok + second
        assert_eq!(last.messages.len(), 4);
        assert_eq!(last.last_user_message(), Some("second"));
    }

    #[test]
    fn test_wire_request_omits_persona() {
        let store = ConversationStore::new(PersonaId::Creative, ModelId::Gpt35Turbo);
        let request = ChatRequest::from_store(&store, 1.0);
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["model"], "gpt-3.5-turbo");
        assert_eq!(value["messages"][0]["role"], "system");
        assert!(value.get("persona").is_none());
    }
}
