//! Settings domain module.
//!
//! - `model`: User-adjustable chat settings (`ChatSettings`)
//! - `repository`: Repository trait for settings persistence

mod model;
mod repository;

pub use model::{ChatSettings, MAX_HISTORY_RANGE, TEMPERATURE_RANGE};
pub use repository::SettingsRepository;
