//! Generation service shared by the per-step endpoints and wizard sessions.
//!
//! Each function validates its input, renders the step prompt, calls the
//! provider, shapes the reply, and logs the result to the database. A
//! failure at any point returns before anything is persisted.

use std::time::Instant;

use serde::Serialize;
use serde_json::json;
use videofuel_core::content::{DescriptionContent, GenerationKind, Script, SeoReport};
use videofuel_core::language::Language;
use videofuel_core::models::ModelKey;
use videofuel_core::prompts::{self, Prompt, THUMBNAIL_COUNT, TITLE_COUNT};
use videofuel_core::{parsing, seo, wizard};
use videofuel_db::models::generation::CreateGeneration;
use videofuel_db::models::seo_analysis::CreateSeoAnalysis;
use videofuel_db::repositories::{GenerationRepo, SeoAnalysisRepo};
use videofuel_llm::{CompletionRequest, LlmError};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Language and model a generation runs with.
#[derive(Debug, Clone, Copy)]
pub struct GenerationOptions {
    pub language: Language,
    pub model: ModelKey,
}

/// Generate title candidates for a topic.
pub async fn titles(
    state: &AppState,
    topic: &str,
    opts: GenerationOptions,
) -> AppResult<Vec<String>> {
    let topic = wizard::validate_topic(topic)?;
    let prompt = prompts::titles_prompt(&topic, opts.language);
    let text = complete(state, &prompt, opts.model).await?;

    let titles = parsing::parse_numbered_list(&text, TITLE_COUNT);
    if titles.is_empty() {
        return Err(LlmError::EmptyResponse.into());
    }

    log_generation(
        state,
        prompt.kind,
        opts,
        json!({ "topic": topic }),
        &json!({ "titles": titles }),
    )
    .await?;
    Ok(titles)
}

/// Generate a description paragraph and hashtags for a title.
pub async fn description(
    state: &AppState,
    title: &str,
    opts: GenerationOptions,
) -> AppResult<DescriptionContent> {
    let title = wizard::validate_title(title)?;
    let prompt = prompts::description_prompt(&title, opts.language);
    let text = complete(state, &prompt, opts.model).await?;

    let content = parsing::parse_description(&text);
    log_generation(state, prompt.kind, opts, json!({ "title": title }), &content).await?;
    Ok(content)
}

/// Generate a structured script for a title.
pub async fn script(
    state: &AppState,
    title: &str,
    video_length_minutes: Option<u32>,
    opts: GenerationOptions,
) -> AppResult<Script> {
    let title = wizard::validate_title(title)?;
    let minutes = prompts::validate_video_length(video_length_minutes)?;
    let prompt = prompts::script_prompt(&title, minutes, opts.language);
    let text = complete(state, &prompt, opts.model).await?;

    let script = parsing::parse_script(&text);
    log_generation(
        state,
        prompt.kind,
        opts,
        json!({ "title": title, "video_length_minutes": minutes }),
        &script,
    )
    .await?;
    Ok(script)
}

/// Generate short thumbnail overlay texts for a title.
pub async fn thumbnails(
    state: &AppState,
    title: &str,
    opts: GenerationOptions,
) -> AppResult<Vec<String>> {
    let title = wizard::validate_title(title)?;
    let prompt = prompts::thumbnail_prompt(&title, opts.language);
    let text = complete(state, &prompt, opts.model).await?;

    let texts = parsing::parse_numbered_list(&text, THUMBNAIL_COUNT);
    if texts.is_empty() {
        return Err(LlmError::EmptyResponse.into());
    }

    log_generation(
        state,
        prompt.kind,
        opts,
        json!({ "title": title }),
        &json!({ "thumbnail_texts": texts }),
    )
    .await?;
    Ok(texts)
}

/// Score content for SEO and log the analysis.
pub async fn analyze_seo(
    state: &AppState,
    title: &str,
    description: &str,
    hashtags: &[String],
    language: Language,
) -> AppResult<SeoReport> {
    // Scored as given: padding counts toward the length score.
    wizard::validate_title(title)?;
    let report = seo::analyze(title, description, hashtags, language);

    let analysis = SeoAnalysisRepo::create(
        &state.pool,
        &CreateSeoAnalysis {
            title,
            description,
            hashtags,
            language,
            report: &report,
        },
    )
    .await?;

    tracing::info!(
        analysis_id = analysis.id,
        language = %language,
        overall = report.scores.overall_seo_score,
        "SEO analysis recorded"
    );
    Ok(report)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn complete(state: &AppState, prompt: &Prompt, model: ModelKey) -> AppResult<String> {
    let request = CompletionRequest::from_prompt(prompt, model);
    let started = Instant::now();
    let text = state.llm.complete(request).await?;

    tracing::info!(
        kind = prompt.kind.as_str(),
        model = model.key(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "Provider completion received"
    );
    Ok(text)
}

async fn log_generation<T: Serialize>(
    state: &AppState,
    kind: GenerationKind,
    opts: GenerationOptions,
    input: serde_json::Value,
    output: &T,
) -> AppResult<()> {
    let output = serde_json::to_value(output)
        .map_err(|e| AppError::InternalError(format!("Failed to encode generation output: {e}")))?;

    let generation = GenerationRepo::create(
        &state.pool,
        &CreateGeneration {
            kind,
            language: opts.language,
            model: opts.model,
            input,
            output,
        },
    )
    .await?;

    tracing::debug!(
        generation_id = generation.id,
        kind = kind.as_str(),
        "Generation logged"
    );
    Ok(())
}
