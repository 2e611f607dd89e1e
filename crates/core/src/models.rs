//! Catalog of LLM models clients may select.
//!
//! Clients address models by a short key; the provider is addressed by
//! its own model id, which is echoed back to clients as `model_used`.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// A model selectable by clients.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelKey {
    #[default]
    #[serde(rename = "deephermes2pro")]
    DeepHermes2Pro,
    Mixtral,
    #[serde(rename = "gpt4o")]
    Gpt4o,
}

/// Every supported model, in catalog order.
pub const ALL_MODELS: [ModelKey; 3] = [ModelKey::DeepHermes2Pro, ModelKey::Mixtral, ModelKey::Gpt4o];

impl ModelKey {
    /// Parse a model key as sent by clients.
    pub fn from_key(key: &str) -> Result<Self, CoreError> {
        ALL_MODELS
            .into_iter()
            .find(|m| m.key() == key.trim())
            .ok_or_else(|| {
                let supported: Vec<&str> = ALL_MODELS.iter().map(|m| m.key()).collect();
                CoreError::Validation(format!(
                    "Unsupported model '{key}'. Must be one of: {}",
                    supported.join(", ")
                ))
            })
    }

    /// Resolve an optional request field, falling back to the default model.
    pub fn from_optional(key: Option<&str>) -> Result<Self, CoreError> {
        key.map_or(Ok(Self::default()), Self::from_key)
    }

    /// Key clients use to select this model.
    pub fn key(self) -> &'static str {
        match self {
            Self::DeepHermes2Pro => "deephermes2pro",
            Self::Mixtral => "mixtral",
            Self::Gpt4o => "gpt4o",
        }
    }

    /// Model id understood by the OpenRouter API.
    pub fn provider_id(self) -> &'static str {
        match self {
            Self::DeepHermes2Pro => "nousresearch/hermes-2-pro-llama-3-8b",
            Self::Mixtral => "mistralai/mixtral-8x22b-instruct",
            Self::Gpt4o => "openai/gpt-4o",
        }
    }
}

/// Keys of every supported model, in catalog order.
pub fn model_keys() -> Vec<&'static str> {
    ALL_MODELS.iter().map(|m| m.key()).collect()
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn keys_round_trip_through_parser() {
        for model in ALL_MODELS {
            assert_eq!(ModelKey::from_key(model.key()).unwrap(), model);
        }
    }

    #[test]
    fn serde_names_match_keys() {
        for model in ALL_MODELS {
            let json = serde_json::to_string(&model).unwrap();
            assert_eq!(json, format!("\"{}\"", model.key()));
        }
    }

    #[test]
    fn unknown_key_lists_supported_models() {
        let err = ModelKey::from_key("llama").unwrap_err();
        assert_matches!(&err, CoreError::Validation(msg) if msg.contains("deephermes2pro, mixtral, gpt4o"));
    }

    #[test]
    fn default_is_deephermes() {
        assert_eq!(ModelKey::from_optional(None).unwrap().provider_id(), "nousresearch/hermes-2-pro-llama-3-8b");
    }
}
