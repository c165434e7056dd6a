//! Supported chat model identifiers.
//!
//! | Model ID | Notes |
//! |----------|-------|
//! | `gpt-3.5-turbo` | Default, cheapest |
//! | `gpt-3.5-turbo-16k` | Longer context |
//! | `gpt-4` | |
//! | `gpt-4-turbo` | |
//! | `gpt-4o` | Latest |
//!
//! The identifier is passed through to the hosted model client as-is.

use crate::error::{ParlorError, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::{AsRefStr, Display, EnumIter, IntoEnumIterator};

/// A model the session can be pointed at.
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
pub enum ModelId {
    #[default]
    #[serde(rename = "gpt-3.5-turbo")]
    #[strum(serialize = "gpt-3.5-turbo")]
    Gpt35Turbo,
    #[serde(rename = "gpt-3.5-turbo-16k")]
    #[strum(serialize = "gpt-3.5-turbo-16k")]
    Gpt35Turbo16k,
    #[serde(rename = "gpt-4")]
    #[strum(serialize = "gpt-4")]
    Gpt4,
    #[serde(rename = "gpt-4-turbo")]
    #[strum(serialize = "gpt-4-turbo")]
    Gpt4Turbo,
    #[serde(rename = "gpt-4o")]
    #[strum(serialize = "gpt-4o")]
    Gpt4o,
}

impl ModelId {
    /// All identifiers in selector order.
    pub fn all() -> Vec<ModelId> {
        Self::iter().collect()
    }
}

impl FromStr for ModelId {
    type Err = ParlorError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        Self::iter()
            .find(|id| id.as_ref().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ParlorError::UnknownModel(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_api_identifier() {
        assert_eq!(ModelId::Gpt35Turbo16k.to_string(), "gpt-3.5-turbo-16k");
        assert_eq!(ModelId::Gpt4o.as_ref(), "gpt-4o");
    }

    #[test]
    fn test_parse_round_trips_every_model() {
        for model in ModelId::all() {
            assert_eq!(model.to_string().parse::<ModelId>().unwrap(), model);
        }
    }

    #[test]
    fn test_parse_rejects_unknown_model() {
        let err = "gpt-2".parse::<ModelId>().unwrap_err();
        assert_eq!(err, ParlorError::UnknownModel("gpt-2".to_string()));
    }

    #[test]
    fn test_serde_uses_api_identifier() {
        let json = serde_json::to_string(&ModelId::Gpt4Turbo).unwrap();
        assert_eq!(json, "\"gpt-4-turbo\"");
        let back: ModelId = serde_json::from_str("\"gpt-4\"").unwrap();
        assert_eq!(back, ModelId::Gpt4);
    }
}
