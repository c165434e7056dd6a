//! Core domain for Parlor: persona chat sessions with transcript export.
//!
//! A [`ConversationStore`] owns one session's ordered turns together with
//! the active persona and model. It records persona switches as system
//! notices and renders the conversation as TXT, JSON or CSV.
//!
//! ```
//! use parlor_core::{ConversationStore, ModelId, PersonaId, Role};
//!
//! let mut store = ConversationStore::new(PersonaId::Friendly, ModelId::Gpt4o);
//! store.append(Role::User, "Hello!");
//! store.switch_persona(PersonaId::Technical);
//!
//! let export = store.export("json").unwrap();
//! assert_eq!(export.file_name, "chat_history.json");
//! ```

pub mod chat;
pub mod clock;
pub mod error;
pub mod export;
pub mod model_id;
pub mod persona;
pub mod responder;
pub mod session;
pub mod settings;

// Re-export common types
pub use chat::{ChatRequest, RequestMessage, Responder, send};
pub use clock::{Clock, SteppingClock, SystemClock};
pub use error::{ParlorError, Result};
pub use export::{Export, ExportFormat, ExportMetadata};
pub use model_id::ModelId;
pub use persona::{Persona, PersonaId};
pub use responder::CannedResponder;
pub use session::{ConversationStore, Role, Session, SessionStats, Turn};
pub use settings::{ChatSettings, SettingsRepository};
