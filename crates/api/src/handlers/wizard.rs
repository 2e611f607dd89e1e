//! Handlers for server-side content wizard sessions.
//!
//! A session walks through six steps: topic, title, description, script,
//! thumbnail and SEO. Each step endpoint checks the session is on the
//! right step before calling the provider, records the result, and
//! saves the new state only if no other request moved the session in
//! the meantime.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use videofuel_core::error::CoreError;
use videofuel_core::language::Language;
use videofuel_core::models::ModelKey;
use videofuel_core::types::{DbId, Timestamp};
use videofuel_core::wizard::{WizardAction, WizardState};
use videofuel_db::models::wizard_session::WizardSession;
use videofuel_db::repositories::WizardSessionRepo;

use crate::error::{AppError, AppResult};
use crate::generation::{self, GenerationOptions};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct CreateWizardSessionRequest {
    pub language: Option<String>,
    pub model: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SubmitTopicRequest {
    pub topic: String,
}

#[derive(Debug, Deserialize)]
pub struct SelectTitleRequest {
    pub title: String,
}

#[derive(Debug, Deserialize)]
pub struct WizardScriptRequest {
    pub video_length_minutes: Option<u32>,
}

/// A wizard session as returned to clients.
#[derive(Debug, Serialize)]
pub struct WizardSessionView {
    pub id: DbId,
    pub uuid: Uuid,
    pub current_step: u8,
    pub step_label: &'static str,
    pub is_complete: bool,
    pub state: WizardState,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl WizardSessionView {
    fn from_session(session: WizardSession) -> AppResult<Self> {
        let state = session.wizard_state()?;
        Ok(Self {
            id: session.id,
            uuid: session.uuid,
            current_step: state.current_step.to_number(),
            step_label: state.current_step.label(),
            is_complete: state.is_complete(),
            state,
            created_at: session.created_at,
            updated_at: session.updated_at,
        })
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Load a session and decode its state.
async fn load_session(
    pool: &sqlx::PgPool,
    id: DbId,
) -> AppResult<(WizardSession, WizardState)> {
    let session = WizardSessionRepo::find_by_id(pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "WizardSession",
            id,
        }))?;
    let wizard = session.wizard_state()?;
    Ok((session, wizard))
}

/// Save `wizard` over `session`, failing if it was saved by anyone else
/// after it was read.
async fn persist(
    pool: &sqlx::PgPool,
    session: &WizardSession,
    wizard: &WizardState,
) -> AppResult<WizardSessionView> {
    let saved = WizardSessionRepo::save_state(pool, session.id, session.revision, wizard)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Conflict(format!(
                "Wizard session {} was modified by another request",
                session.id
            )))
        })?;

    tracing::info!(
        session_id = saved.id,
        from_step = session.current_step,
        to_step = saved.current_step,
        revision = saved.revision,
        "Wizard session saved"
    );

    WizardSessionView::from_session(saved)
}

fn options(wizard: &WizardState) -> GenerationOptions {
    GenerationOptions {
        language: wizard.language,
        model: wizard.model,
    }
}

// ---------------------------------------------------------------------------
// POST /wizard-sessions
// ---------------------------------------------------------------------------

/// Start a new wizard run on the topic step.
pub async fn create_session(
    State(state): State<AppState>,
    Json(body): Json<CreateWizardSessionRequest>,
) -> AppResult<impl IntoResponse> {
    let language = Language::from_optional(body.language.as_deref())?;
    let model = ModelKey::from_optional(body.model.as_deref())?;

    let session = WizardSessionRepo::create(&state.pool, &WizardState::new(language, model)).await?;

    tracing::info!(
        session_id = session.id,
        language = %language,
        model = model.key(),
        "Wizard session created"
    );

    let view = WizardSessionView::from_session(session)?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: view })))
}

// ---------------------------------------------------------------------------
// GET /wizard-sessions/{id}
// ---------------------------------------------------------------------------

pub async fn get_session(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let (session, _) = load_session(&state.pool, id).await?;
    let view = WizardSessionView::from_session(session)?;
    Ok(Json(DataResponse { data: view }))
}

// ---------------------------------------------------------------------------
// POST /wizard-sessions/{id}/topic
// ---------------------------------------------------------------------------

/// Step 1: submit a topic and generate title candidates.
pub async fn submit_topic(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(body): Json<SubmitTopicRequest>,
) -> AppResult<impl IntoResponse> {
    let (session, mut wizard) = load_session(&state.pool, id).await?;
    wizard.ensure_can(WizardAction::SubmitTopic)?;

    let titles = generation::titles(&state, &body.topic, options(&wizard)).await?;
    wizard.record_titles(&body.topic, titles)?;

    let view = persist(&state.pool, &session, &wizard).await?;
    Ok(Json(DataResponse { data: view }))
}

// ---------------------------------------------------------------------------
// POST /wizard-sessions/{id}/title
// ---------------------------------------------------------------------------

/// Step 2: select one of the candidates and generate its description.
pub async fn select_title(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(body): Json<SelectTitleRequest>,
) -> AppResult<impl IntoResponse> {
    let (session, mut wizard) = load_session(&state.pool, id).await?;
    let title = wizard.check_title_selection(&body.title)?;

    let content = generation::description(&state, &title, options(&wizard)).await?;
    wizard.record_description(&title, content)?;

    let view = persist(&state.pool, &session, &wizard).await?;
    Ok(Json(DataResponse { data: view }))
}

// ---------------------------------------------------------------------------
// POST /wizard-sessions/{id}/script
// ---------------------------------------------------------------------------

/// Step 3: generate the script for the selected title.
///
/// The body is optional; without one the default length is used.
pub async fn generate_script(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    body: Option<Json<WizardScriptRequest>>,
) -> AppResult<impl IntoResponse> {
    let video_length_minutes = body.and_then(|Json(b)| b.video_length_minutes);
    let (session, mut wizard) = load_session(&state.pool, id).await?;
    wizard.ensure_can(WizardAction::GenerateScript)?;
    let title = wizard.selected_title()?.to_string();

    let script =
        generation::script(&state, &title, video_length_minutes, options(&wizard)).await?;
    wizard.record_script(script)?;

    let view = persist(&state.pool, &session, &wizard).await?;
    Ok(Json(DataResponse { data: view }))
}

// ---------------------------------------------------------------------------
// POST /wizard-sessions/{id}/thumbnail
// ---------------------------------------------------------------------------

/// Step 4: generate thumbnail texts for the selected title.
pub async fn generate_thumbnail(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let (session, mut wizard) = load_session(&state.pool, id).await?;
    wizard.ensure_can(WizardAction::GenerateThumbnail)?;
    let title = wizard.selected_title()?.to_string();

    let texts = generation::thumbnails(&state, &title, options(&wizard)).await?;
    wizard.record_thumbnails(texts)?;

    let view = persist(&state.pool, &session, &wizard).await?;
    Ok(Json(DataResponse { data: view }))
}

// ---------------------------------------------------------------------------
// POST /wizard-sessions/{id}/seo
// ---------------------------------------------------------------------------

/// Step 5: score the selected title and description.
pub async fn analyze_seo(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let (session, mut wizard) = load_session(&state.pool, id).await?;
    let (title, content) = {
        let (title, content) = wizard.seo_inputs()?;
        (title.to_string(), content.clone())
    };

    let report = generation::analyze_seo(
        &state,
        &title,
        &content.description,
        &content.hashtags,
        wizard.language,
    )
    .await?;
    wizard.record_seo(report)?;

    let view = persist(&state.pool, &session, &wizard).await?;
    Ok(Json(DataResponse { data: view }))
}

// ---------------------------------------------------------------------------
// POST /wizard-sessions/{id}/reset
// ---------------------------------------------------------------------------

/// Discard generated content and return to the topic step.
pub async fn reset_session(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let (session, mut wizard) = load_session(&state.pool, id).await?;
    wizard.reset();

    let view = persist(&state.pool, &session, &wizard).await?;
    Ok(Json(DataResponse { data: view }))
}
