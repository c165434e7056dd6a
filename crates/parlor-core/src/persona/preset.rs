//! Default persona presets.
//!
//! Provides the fixed personalities available to every session.

use super::model::{Persona, PersonaId};
use strum::IntoEnumIterator;

/// System prompt used by the Custom persona until the user supplies one.
pub const CUSTOM_FALLBACK_PROMPT: &str =
    "You are a helpful assistant with a custom style specified by the user below.";

/// Returns every preset persona, in `PersonaId` order.
///
/// - **Professional**: business strategy and communication
/// - **Creative**: storytelling and artistic projects
/// - **Technical**: programming and problem-solving
/// - **Friendly**: casual chat and emotional support
/// - **Custom**: user-defined prompt
pub fn get_default_presets() -> Vec<Persona> {
    PersonaId::iter().map(preset_for).collect()
}

pub(super) fn preset_for(id: PersonaId) -> Persona {
    let (emoji, description, system_prompt, example) = match id {
        PersonaId::Professional => (
            "💼",
            "Formal, structured, business-focused assistant",
            "You are a professional business assistant. Respond with formal, structured, business-focused advice. \
             Use polite, efficient, and results-oriented tone. Expertise: business strategy, communication.",
            "I recommend a structured approach to managing client interactions: 1. Preparation 2. Active Listening 3. Solution-Focused Discussion...",
        ),
        PersonaId::Creative => (
            "🎨",
            "Imaginative, expressive creative helper",
            "You are a creative writing helper. Respond imaginatively for artistic, story-driven projects. \
             Be enthusiastic, artistic, and encouraging. Expertise: storytelling, creative writing, artistic projects.",
            "Ah, the art of navigating stormy client waters! Picture this: you're weaving a story where everyone wins...",
        ),
        PersonaId::Technical => (
            "🖥️",
            "Precise, detailed, code-focused technical expert",
            "You are a technical expert. Respond with precise, detailed, code-focused explanations. \
             Be analytical and educational. Expertise: programming, technology, problem-solving.",
            "To solve this, start by analyzing the requirements, then design a scalable architecture, and finally implement modular code with examples...",
        ),
        PersonaId::Friendly => (
            "😊",
            "Casual, supportive, conversational companion",
            "You are a friendly companion. Respond casually, warmly, and with conversational advice. \
             Be supportive and empathetic. Expertise: general chat, emotional support, casual advice.",
            "That sounds tough, but I know you've got this! Let me know how I can help or if you just need to vent.",
        ),
        PersonaId::Custom => (
            "✨",
            "User-defined personality",
            CUSTOM_FALLBACK_PROMPT,
            "Custom personality response here.",
        ),
    };

    Persona {
        id,
        name: id.to_string(),
        emoji: emoji.to_string(),
        description: description.to_string(),
        system_prompt: system_prompt.to_string(),
        example: example.to_string(),
    }
}
