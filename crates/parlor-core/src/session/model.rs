//! Session domain model.
//!
//! This module contains the Session entity that holds one interactive
//! run's conversation.

use super::message::Turn;
use crate::model_id::ModelId;
use crate::persona::PersonaId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Represents one interactive chat run.
///
/// A session contains:
/// - The ordered turn history (insertion order is conversation order)
/// - The currently active persona and model
/// - The custom prompt used by the Custom persona
/// - Identity and creation timestamp
///
/// Sessions live only as long as the process that owns them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Unique session identifier (UUID format)
    pub id: String,
    /// Timestamp when the session was created
    pub created_at: DateTime<Utc>,
    /// The currently active persona
    pub current_persona: PersonaId,
    /// The currently selected model
    pub current_model: ModelId,
    /// Prompt for the Custom persona, if the user supplied one
    #[serde(default)]
    pub custom_prompt: Option<String>,
    /// Conversation history
    pub(crate) turns: Vec<Turn>,
}

impl Session {
    pub fn new(persona: PersonaId, model: ModelId, created_at: DateTime<Utc>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            created_at,
            current_persona: persona,
            current_model: model,
            custom_prompt: None,
            turns: Vec::new(),
        }
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }
}
