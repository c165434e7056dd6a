//! Conversation turn types.
//!
//! This module contains types for representing messages in a conversation,
//! including roles and message content.

use crate::persona::PersonaId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display};

/// Represents the role of a turn in a conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, AsRefStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Role {
    /// System-generated notice or prompt.
    System,
    /// Message from the user.
    User,
    /// Message from the AI assistant.
    Assistant,
}

impl Role {
    /// Capitalised name used in transcripts ("User").
    pub fn label(&self) -> &'static str {
        match self {
            Role::System => "System",
            Role::User => "User",
            Role::Assistant => "Assistant",
        }
    }
}

/// A single turn in a conversation history.
///
/// Turns are immutable once created: the fields are only readable.
/// User and assistant turns remember the persona that was active when they
/// were recorded; system notices carry none.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    role: Role,
    content: String,
    timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    persona: Option<PersonaId>,
}

impl Turn {
    pub fn new(
        role: Role,
        content: impl Into<String>,
        timestamp: DateTime<Utc>,
        persona: Option<PersonaId>,
    ) -> Self {
        Self {
            role,
            content: content.into(),
            timestamp,
            persona,
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn persona(&self) -> Option<PersonaId> {
        self.persona
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_role_string_forms() {
        assert_eq!(Role::Assistant.to_string(), "assistant");
        assert_eq!(Role::Assistant.label(), "Assistant");
        assert_eq!(serde_json::to_string(&Role::System).unwrap(), "\"system\"");
    }

    #[test]
    fn test_turn_serializes_without_missing_persona() {
        let at = Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap();
        let notice = Turn::new(Role::System, "Switched", at, None);
        let value = serde_json::to_value(&notice).unwrap();
        assert_eq!(value["role"], "system");
        assert_eq!(value["content"], "Switched");
        assert_eq!(value["timestamp"], "2026-03-01T12:00:00Z");
        assert!(value.get("persona").is_none());

        let reply = Turn::new(Role::Assistant, "Hi", at, Some(PersonaId::Creative));
        let value = serde_json::to_value(&reply).unwrap();
        assert_eq!(value["persona"], "Creative");
    }
}
