//! Shapes of the content produced by each wizard step.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Generation kinds
// ---------------------------------------------------------------------------

/// The four steps that call out to the LLM provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GenerationKind {
    Titles,
    Description,
    Script,
    Thumbnail,
}

impl GenerationKind {
    /// Parse a kind string from the database or a query parameter.
    pub fn from_str_db(s: &str) -> Result<Self, CoreError> {
        match s {
            "titles" => Ok(Self::Titles),
            "description" => Ok(Self::Description),
            "script" => Ok(Self::Script),
            "thumbnail" => Ok(Self::Thumbnail),
            _ => Err(CoreError::Validation(format!(
                "Invalid generation kind '{s}'. Must be one of: titles, description, script, thumbnail"
            ))),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Titles => "titles",
            Self::Description => "description",
            Self::Script => "script",
            Self::Thumbnail => "thumbnail",
        }
    }
}

// ---------------------------------------------------------------------------
// Step outputs
// ---------------------------------------------------------------------------

/// Description paragraph plus hashtags for a selected title.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DescriptionContent {
    pub description: String,
    pub hashtags: Vec<String>,
}

/// One titled section of a video script.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptSection {
    pub title: String,
    pub content: String,
}

/// A structured video script.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Script {
    pub hook: String,
    pub sections: Vec<ScriptSection>,
    pub outro: String,
}

/// Individual SEO scores, each in `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeoScores {
    pub clickbait_score: u8,
    pub keyword_relevance_score: u8,
    pub length_score: u8,
    pub overall_seo_score: u8,
}

/// Scores plus the recommendations derived from them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeoReport {
    pub scores: SeoScores,
    pub recommendations: Vec<String>,
}
