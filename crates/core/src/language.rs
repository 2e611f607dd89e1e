//! Output language selection.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Language the generated content is written in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Tr,
}

impl Language {
    /// Parse a language code as sent by clients (`"en"` or `"tr"`).
    pub fn from_code(code: &str) -> Result<Self, CoreError> {
        match code.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Self::En),
            "tr" => Ok(Self::Tr),
            other => Err(CoreError::Validation(format!(
                "Unsupported language '{other}'. Must be one of: en, tr"
            ))),
        }
    }

    /// Resolve an optional request field, falling back to English.
    pub fn from_optional(code: Option<&str>) -> Result<Self, CoreError> {
        code.map_or(Ok(Self::default()), Self::from_code)
    }

    pub fn as_code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Tr => "tr",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_code())
    }
}
