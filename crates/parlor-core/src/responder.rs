//! Offline responder that answers from canned templates.
//!
//! Used when no hosted model is wired in: it picks a reply in the style of
//! the active persona and echoes the user's text back.

use crate::chat::{ChatRequest, Responder};
use crate::error::Result;
use crate::persona::PersonaId;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Canned replies keyed by persona style.
pub struct CannedResponder {
    rng: StdRng,
}

impl CannedResponder {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// A responder with reproducible choices.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    fn templates(persona: PersonaId, input: &str) -> Vec<String> {
        match persona {
            PersonaId::Professional => vec![
                format!("Thank you for your message regarding '{input}'. I've processed your request and understand your query."),
                format!("I acknowledge your input: '{input}'. Please allow me to provide you with a comprehensive response."),
                format!("Your inquiry about '{input}' has been noted. I'm here to assist you with professional guidance."),
            ],
            PersonaId::Creative => vec![
                format!("🎨 Wow! '{input}' - that sparks so many creative possibilities! Let me paint you a picture with words..."),
                format!("✨ Your message '{input}' is like a canvas waiting for artistic interpretation! Here's my creative take..."),
                format!("🌟 '{input}' - what an inspiring prompt! Let me weave some creative magic around that idea..."),
            ],
            PersonaId::Technical => vec![
                format!("Let's break '{input}' down: requirements first, then design, then a minimal implementation."),
                format!("Regarding '{input}': the key constraint is correctness, so start with a failing test and iterate."),
                format!("For '{input}', I'd sketch the data model, pick the simplest algorithm that fits, and measure."),
            ],
            PersonaId::Friendly | PersonaId::Custom => vec![
                format!("That's really interesting! You mentioned '{input}' and I think that's a great topic to explore together! 😊"),
                format!("I love that you brought up '{input}'! It's always exciting to chat about new things. Let me share my thoughts!"),
                format!("Hey, great question about '{input}'! I'm happy to help you with that. Here's what I'm thinking..."),
            ],
        }
    }
}

impl Default for CannedResponder {
    fn default() -> Self {
        Self::new()
    }
}

impl Responder for CannedResponder {
    fn respond(&mut self, request: &ChatRequest) -> Result<String> {
        let input = request.last_user_message().unwrap_or_default();
        let templates = Self::templates(request.persona, input);
        Ok(templates
            .choose(&mut self.rng)
            .cloned()
            .unwrap_or_else(|| input.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::send;
    use crate::model_id::ModelId;
    use crate::session::ConversationStore;

    #[test]
    fn test_reply_echoes_input() {
        let mut store = ConversationStore::new(PersonaId::Professional, ModelId::Gpt4);
        let mut responder = CannedResponder::seeded(7);
        let reply = send(&mut store, &mut responder, "quarterly plan", 0.7).unwrap();
        assert!(reply.content().contains("'quarterly plan'"));
    }

    #[test]
    fn test_seeded_responders_agree() {
        let store = {
            let mut store = ConversationStore::new(PersonaId::Creative, ModelId::Gpt4);
            store.append(crate::session::Role::User, "a poem");
            store
        };
        let request = ChatRequest::from_store(&store, 0.7);
        let a = CannedResponder::seeded(42).respond(&request).unwrap();
        let b = CannedResponder::seeded(42).respond(&request).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_every_persona_has_templates() {
        for persona in PersonaId::all() {
            assert_eq!(CannedResponder::templates(persona, "x").len(), 3);
        }
    }
}
