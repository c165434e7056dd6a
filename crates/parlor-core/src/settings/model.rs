//! Chat settings.
//!
//! Mirrors the sidebar of the chat UI: which persona and model to use, the
//! sampling temperature, and display preferences.

use crate::error::{ParlorError, Result};
use crate::model_id::ModelId;
use crate::persona::PersonaId;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Accepted sampling temperatures.
pub const TEMPERATURE_RANGE: RangeInclusive<f64> = 0.0..=2.0;

/// Accepted history limits, in turns.
pub const MAX_HISTORY_RANGE: RangeInclusive<usize> = 10..=100;

/// User-adjustable chat settings.
///
/// Every field has a default, so a partial settings file is valid.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ChatSettings {
    /// Name shown for assistant turns
    pub assistant_name: String,
    /// Persona active when a session starts
    pub persona: PersonaId,
    /// Model requested from the hosted API
    pub model: ModelId,
    /// Sampling temperature passed through to the model
    pub temperature: f64,
    /// Keep at most this many turns; `None` keeps everything
    pub max_history: Option<usize>,
    /// Show turn timestamps when printing the conversation
    pub show_timestamps: bool,
    /// System prompt for the Custom persona
    pub custom_prompt: Option<String>,
}

impl Default for ChatSettings {
    fn default() -> Self {
        Self {
            assistant_name: "Assistant".to_string(),
            persona: PersonaId::default(),
            model: ModelId::default(),
            temperature: 0.7,
            max_history: None,
            show_timestamps: true,
            custom_prompt: None,
        }
    }
}

impl ChatSettings {
    /// Checks ranges and required fields.
    pub fn validate(&self) -> Result<()> {
        if self.assistant_name.trim().is_empty() {
            return Err(ParlorError::config("assistant_name must not be empty"));
        }
        if !TEMPERATURE_RANGE.contains(&self.temperature) {
            return Err(ParlorError::config(format!(
                "temperature {} is outside {}..={}",
                self.temperature,
                TEMPERATURE_RANGE.start(),
                TEMPERATURE_RANGE.end()
            )));
        }
        if let Some(limit) = self.max_history {
            if !MAX_HISTORY_RANGE.contains(&limit) {
                return Err(ParlorError::config(format!(
                    "max_history {} is outside {}..={}",
                    limit,
                    MAX_HISTORY_RANGE.start(),
                    MAX_HISTORY_RANGE.end()
                )));
            }
        }
        Ok(())
    }

    /// The custom prompt, if set and not blank.
    pub fn custom_prompt(&self) -> Option<&str> {
        self.custom_prompt
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty())
    }
}
