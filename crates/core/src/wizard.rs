//! Step wizard state machine.
//!
//! The wizard walks one run of content creation through six linear steps.
//! Each step's "Next" action produces that step's content and advances
//! `current_step` by exactly one. Mutators verify the current step before
//! touching any field, so a rejected action leaves the state unchanged.
//! Callers perform the provider call first and only record its result on
//! success, which keeps a failed call on the same step.

use serde::{Deserialize, Serialize};

use crate::content::{DescriptionContent, Script, SeoReport};
use crate::error::CoreError;
use crate::language::Language;
use crate::models::ModelKey;

// ---------------------------------------------------------------------------
// Steps
// ---------------------------------------------------------------------------

/// The six steps of the wizard, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    Topic,
    Title,
    Description,
    Script,
    Thumbnail,
    Seo,
}

/// Total number of steps in the wizard.
pub const TOTAL_STEPS: u8 = 6;

/// Minimum step number (1-based).
pub const MIN_STEP: u8 = 1;

/// Maximum step number (1-based).
pub const MAX_STEP: u8 = 6;

impl WizardStep {
    /// Convert a 1-based step number to a `WizardStep`.
    pub fn from_number(n: u8) -> Result<Self, CoreError> {
        match n {
            1 => Ok(Self::Topic),
            2 => Ok(Self::Title),
            3 => Ok(Self::Description),
            4 => Ok(Self::Script),
            5 => Ok(Self::Thumbnail),
            6 => Ok(Self::Seo),
            _ => Err(CoreError::Validation(format!(
                "Invalid step number {n}. Must be between {MIN_STEP} and {MAX_STEP}"
            ))),
        }
    }

    /// Convert to a 1-based step number.
    pub fn to_number(self) -> u8 {
        match self {
            Self::Topic => 1,
            Self::Title => 2,
            Self::Description => 3,
            Self::Script => 4,
            Self::Thumbnail => 5,
            Self::Seo => 6,
        }
    }

    /// Human-readable label for the step.
    pub fn label(self) -> &'static str {
        match self {
            Self::Topic => "Topic",
            Self::Title => "Title",
            Self::Description => "Description & Hashtags",
            Self::Script => "Script",
            Self::Thumbnail => "Thumbnail Text",
            Self::Seo => "SEO Score",
        }
    }

    /// The following step, or `None` on the last one.
    pub fn next(self) -> Option<Self> {
        Self::from_number(self.to_number() + 1).ok()
    }
}

// ---------------------------------------------------------------------------
// Actions
// ---------------------------------------------------------------------------

/// A "Next" action a client can perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardAction {
    /// Submit a topic and generate title candidates.
    SubmitTopic,
    /// Pick a title and generate its description and hashtags.
    SelectTitle,
    /// Generate the video script.
    GenerateScript,
    /// Generate thumbnail overlay texts.
    GenerateThumbnail,
    /// Score the content for SEO.
    AnalyzeSeo,
}

impl WizardAction {
    /// The step the wizard must be on for this action to run.
    pub fn required_step(self) -> WizardStep {
        match self {
            Self::SubmitTopic => WizardStep::Topic,
            Self::SelectTitle => WizardStep::Title,
            Self::GenerateScript => WizardStep::Description,
            Self::GenerateThumbnail => WizardStep::Script,
            Self::AnalyzeSeo => WizardStep::Thumbnail,
        }
    }
}

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

/// Everything one wizard run has produced so far.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WizardState {
    pub current_step: WizardStep,
    pub language: Language,
    pub model: ModelKey,
    pub topic: Option<String>,
    pub titles: Vec<String>,
    pub selected_title: Option<String>,
    pub description: Option<DescriptionContent>,
    pub script: Option<Script>,
    pub thumbnail_texts: Vec<String>,
    pub seo: Option<SeoReport>,
}

impl WizardState {
    /// A fresh run positioned on the first step.
    pub fn new(language: Language, model: ModelKey) -> Self {
        Self {
            current_step: WizardStep::Topic,
            language,
            model,
            topic: None,
            titles: Vec::new(),
            selected_title: None,
            description: None,
            script: None,
            thumbnail_texts: Vec::new(),
            seo: None,
        }
    }

    /// Whether the final step has been reached.
    pub fn is_complete(&self) -> bool {
        self.current_step == WizardStep::Seo
    }

    /// Fail with a conflict unless `action` is allowed on the current step.
    pub fn ensure_can(&self, action: WizardAction) -> Result<(), CoreError> {
        let required = action.required_step();
        if self.current_step != required {
            return Err(CoreError::Conflict(format!(
                "{action:?} requires step {} ({}), but the wizard is on step {} ({})",
                required.to_number(),
                required.label(),
                self.current_step.to_number(),
                self.current_step.label(),
            )));
        }
        Ok(())
    }

    /// Validate that `title` is one of the generated candidates.
    ///
    /// Returns the candidate as stored, so callers use the exact text.
    pub fn check_title_selection(&self, title: &str) -> Result<String, CoreError> {
        self.ensure_can(WizardAction::SelectTitle)?;
        let wanted = title.trim();
        self.titles
            .iter()
            .find(|candidate| candidate.as_str() == wanted)
            .cloned()
            .ok_or_else(|| {
                CoreError::Validation(format!(
                    "Title '{wanted}' is not one of the generated candidates"
                ))
            })
    }

    /// The selected title, required by every step after the second.
    pub fn selected_title(&self) -> Result<&str, CoreError> {
        self.selected_title
            .as_deref()
            .ok_or_else(|| CoreError::Conflict("No title has been selected yet".to_string()))
    }

    /// Record generated title candidates for a topic (step 1 to 2).
    pub fn record_titles(&mut self, topic: &str, titles: Vec<String>) -> Result<(), CoreError> {
        self.ensure_can(WizardAction::SubmitTopic)?;
        let topic = validate_topic(topic)?;
        if titles.is_empty() {
            return Err(CoreError::Validation(
                "At least one title candidate is required".to_string(),
            ));
        }
        self.topic = Some(topic);
        self.titles = titles;
        self.advance();
        Ok(())
    }

    /// Record the chosen title and its description (step 2 to 3).
    pub fn record_description(
        &mut self,
        title: &str,
        content: DescriptionContent,
    ) -> Result<(), CoreError> {
        let title = self.check_title_selection(title)?;
        self.selected_title = Some(title);
        self.description = Some(content);
        self.advance();
        Ok(())
    }

    /// Record the generated script (step 3 to 4).
    pub fn record_script(&mut self, script: Script) -> Result<(), CoreError> {
        self.ensure_can(WizardAction::GenerateScript)?;
        self.script = Some(script);
        self.advance();
        Ok(())
    }

    /// Record thumbnail texts (step 4 to 5).
    pub fn record_thumbnails(&mut self, texts: Vec<String>) -> Result<(), CoreError> {
        self.ensure_can(WizardAction::GenerateThumbnail)?;
        self.thumbnail_texts = texts;
        self.advance();
        Ok(())
    }

    /// Inputs for SEO analysis: selected title, description and hashtags.
    pub fn seo_inputs(&self) -> Result<(&str, &DescriptionContent), CoreError> {
        self.ensure_can(WizardAction::AnalyzeSeo)?;
        let title = self.selected_title()?;
        let description = self
            .description
            .as_ref()
            .ok_or_else(|| CoreError::Conflict("No description has been generated yet".to_string()))?;
        Ok((title, description))
    }

    /// Record the SEO report (step 5 to 6).
    pub fn record_seo(&mut self, report: SeoReport) -> Result<(), CoreError> {
        self.ensure_can(WizardAction::AnalyzeSeo)?;
        self.seo = Some(report);
        self.advance();
        Ok(())
    }

    /// Discard all generated content and return to the first step.
    ///
    /// Language and model selections are kept.
    pub fn reset(&mut self) {
        *self = Self::new(self.language, self.model);
    }

    fn advance(&mut self) {
        if let Some(next) = self.current_step.next() {
            self.current_step = next;
        }
    }
}

/// Trim a topic and reject it when blank.
pub fn validate_topic(topic: &str) -> Result<String, CoreError> {
    require_non_blank("Topic", topic)
}

/// Trim a title and reject it when blank.
pub fn validate_title(title: &str) -> Result<String, CoreError> {
    require_non_blank("Title", title)
}

fn require_non_blank(field: &str, value: &str) -> Result<String, CoreError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation(format!("{field} must not be empty")));
    }
    Ok(trimmed.to_string())
}
