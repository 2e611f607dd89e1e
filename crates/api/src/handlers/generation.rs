//! Handlers for the per-step generation endpoints.
//!
//! These are stateless: each request carries everything the step needs
//! and the response is the step's contract body (no data envelope).

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use videofuel_core::content::{ScriptSection, SeoScores};
use videofuel_core::language::Language;
use videofuel_core::models::ModelKey;

use crate::error::AppResult;
use crate::generation::{self, GenerationOptions};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// API request types
// ---------------------------------------------------------------------------

/// Request body for `POST /generate-titles`.
#[derive(Debug, Deserialize)]
pub struct TitlesRequest {
    pub topic: String,
    pub language: Option<String>,
    pub model: Option<String>,
}

/// Request body for `POST /generate-description` and `POST /generate-thumbnail`.
#[derive(Debug, Deserialize)]
pub struct TitleRequest {
    pub title: String,
    pub language: Option<String>,
    pub model: Option<String>,
}

/// Request body for `POST /generate-script`.
#[derive(Debug, Deserialize)]
pub struct ScriptRequest {
    pub title: String,
    pub language: Option<String>,
    pub video_length_minutes: Option<u32>,
    pub model: Option<String>,
}

/// Request body for `POST /analyze-seo`.
#[derive(Debug, Deserialize)]
pub struct SeoRequest {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub hashtags: Vec<String>,
    pub language: Option<String>,
}

// ---------------------------------------------------------------------------
// API response types
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct TitlesResponse {
    pub titles: Vec<String>,
    pub language: Language,
    pub model_used: &'static str,
}

#[derive(Debug, Serialize)]
pub struct DescriptionResponse {
    pub description: String,
    pub hashtags: Vec<String>,
    pub language: Language,
    pub model_used: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ScriptResponse {
    pub hook: String,
    pub sections: Vec<ScriptSection>,
    pub outro: String,
    pub language: Language,
    pub model_used: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ThumbnailResponse {
    pub thumbnail_texts: Vec<String>,
    pub language: Language,
    pub model_used: &'static str,
}

#[derive(Debug, Serialize)]
pub struct SeoResponse {
    pub scores: SeoScores,
    pub recommendations: Vec<String>,
}

/// Resolve the optional language/model request fields.
fn resolve_options(language: Option<&str>, model: Option<&str>) -> AppResult<GenerationOptions> {
    Ok(GenerationOptions {
        language: Language::from_optional(language)?,
        model: ModelKey::from_optional(model)?,
    })
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /generate-titles -- title candidates for a topic.
pub async fn generate_titles(
    State(state): State<AppState>,
    Json(body): Json<TitlesRequest>,
) -> AppResult<Json<TitlesResponse>> {
    let opts = resolve_options(body.language.as_deref(), body.model.as_deref())?;
    let titles = generation::titles(&state, &body.topic, opts).await?;

    Ok(Json(TitlesResponse {
        titles,
        language: opts.language,
        model_used: opts.model.provider_id(),
    }))
}

/// POST /generate-description -- description paragraph and hashtags.
pub async fn generate_description(
    State(state): State<AppState>,
    Json(body): Json<TitleRequest>,
) -> AppResult<Json<DescriptionResponse>> {
    let opts = resolve_options(body.language.as_deref(), body.model.as_deref())?;
    let content = generation::description(&state, &body.title, opts).await?;

    Ok(Json(DescriptionResponse {
        description: content.description,
        hashtags: content.hashtags,
        language: opts.language,
        model_used: opts.model.provider_id(),
    }))
}

/// POST /generate-script -- hook, sections and outro.
pub async fn generate_script(
    State(state): State<AppState>,
    Json(body): Json<ScriptRequest>,
) -> AppResult<Json<ScriptResponse>> {
    let opts = resolve_options(body.language.as_deref(), body.model.as_deref())?;
    let script =
        generation::script(&state, &body.title, body.video_length_minutes, opts).await?;

    Ok(Json(ScriptResponse {
        hook: script.hook,
        sections: script.sections,
        outro: script.outro,
        language: opts.language,
        model_used: opts.model.provider_id(),
    }))
}

/// POST /generate-thumbnail -- short thumbnail overlay texts.
pub async fn generate_thumbnail(
    State(state): State<AppState>,
    Json(body): Json<TitleRequest>,
) -> AppResult<Json<ThumbnailResponse>> {
    let opts = resolve_options(body.language.as_deref(), body.model.as_deref())?;
    let thumbnail_texts = generation::thumbnails(&state, &body.title, opts).await?;

    Ok(Json(ThumbnailResponse {
        thumbnail_texts,
        language: opts.language,
        model_used: opts.model.provider_id(),
    }))
}

/// POST /analyze-seo -- heuristic SEO scores and recommendations.
pub async fn analyze_seo(
    State(state): State<AppState>,
    Json(body): Json<SeoRequest>,
) -> AppResult<Json<SeoResponse>> {
    let language = Language::from_optional(body.language.as_deref())?;
    let report = generation::analyze_seo(
        &state,
        &body.title,
        &body.description,
        &body.hashtags,
        language,
    )
    .await?;

    Ok(Json(SeoResponse {
        scores: report.scores,
        recommendations: report.recommendations,
    }))
}
