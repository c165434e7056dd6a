//! Persona domain module.
//!
//! This module contains the persona identifiers and the preset persona
//! configurations that shape how the assistant responds.
//!
//! # Module Structure
//!
//! - `model`: Core persona domain models (`Persona`, `PersonaId`)
//! - `preset`: The fixed set of system personas
//!
//! # Usage
//!
//! ```ignore
//! use parlor_core::persona::{Persona, PersonaId, get_default_presets};
//! ```

mod model;
mod preset;

// Re-export public API
pub use model::{Persona, PersonaId};
pub use preset::{CUSTOM_FALLBACK_PROMPT, get_default_presets};
