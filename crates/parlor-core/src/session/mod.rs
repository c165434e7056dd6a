//! Session domain module.
//!
//! This module contains the conversation turn types, the per-run session
//! model and the `ConversationStore` that owns it.
//!
//! # Module Structure
//!
//! - `message`: Conversation turn types (`Role`, `Turn`)
//! - `model`: Core session domain model (`Session`)
//! - `store`: Append, persona switch, history limit and export (`ConversationStore`)
//! - `stats`: Derived counters for display (`SessionStats`)
//!
//! # Usage
//!
//! ```ignore
//! use parlor_core::session::{ConversationStore, Role, Turn};
//! ```

mod message;
mod model;
mod stats;
mod store;

// Re-export public API
pub use message::{Role, Turn};
pub use model::Session;
pub use stats::SessionStats;
pub use store::ConversationStore;
