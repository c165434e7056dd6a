//! Persona domain model.
//!
//! Represents the system-prompt configurations a user can pick from.
//! The set is closed: every persona is one of the `PersonaId` variants.

use crate::error::{ParlorError, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::{AsRefStr, Display, EnumIter, IntoEnumIterator};

/// Identifier of a preset persona.
#[derive(
    Deserialize,
    Serialize,
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Display,
    AsRefStr,
    EnumIter,
)]
pub enum PersonaId {
    /// Formal, structured, business-focused assistant
    Professional,
    /// Imaginative, expressive creative helper
    Creative,
    /// Precise, detailed, code-focused technical expert
    Technical,
    /// Casual, supportive, conversational companion
    #[default]
    Friendly,
    /// User-defined personality
    Custom,
}

impl PersonaId {
    /// Returns the preset persona for this identifier.
    pub fn persona(self) -> Persona {
        super::preset::preset_for(self)
    }

    /// All identifiers in display order.
    pub fn all() -> Vec<PersonaId> {
        Self::iter().collect()
    }
}

impl FromStr for PersonaId {
    type Err = ParlorError;

    /// Parses a persona name case-insensitively ("technical", "Technical").
    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        Self::iter()
            .find(|id| id.as_ref().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ParlorError::UnknownPersona(s.to_string()))
    }
}

/// A persona representing one assistant personality.
///
/// Personas are static configuration. The only runtime input is the custom
/// prompt, which replaces the system prompt of `PersonaId::Custom`.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Persona {
    /// Identifier of the persona
    pub id: PersonaId,
    /// Display name of the persona
    pub name: String,
    /// Badge shown next to the name
    pub emoji: String,
    /// One-line description of what the persona is good for
    pub description: String,
    /// System prompt sent ahead of the conversation
    pub system_prompt: String,
    /// Example reply illustrating the tone
    pub example: String,
}

impl Persona {
    /// Returns the system prompt to send, honouring a custom prompt.
    ///
    /// Only the Custom persona is affected; blank custom prompts fall back
    /// to the preset text.
    pub fn effective_system_prompt(&self, custom_prompt: Option<&str>) -> String {
        match (self.id, custom_prompt.map(str::trim)) {
            (PersonaId::Custom, Some(custom)) if !custom.is_empty() => custom.to_string(),
            _ => self.system_prompt.clone(),
        }
    }

    /// Name with its badge, e.g. "🎨 Creative".
    pub fn label(&self) -> String {
        format!("{} {}", self.emoji, self.name)
    }
}
