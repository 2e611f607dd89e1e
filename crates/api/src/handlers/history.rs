//! Handlers for browsing the generation log and SEO analysis history.

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;

use videofuel_core::content::GenerationKind;
use videofuel_core::error::CoreError;
use videofuel_core::pagination::{clamp_limit, clamp_offset, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT};
use videofuel_core::types::DbId;
use videofuel_db::repositories::{GenerationRepo, SeoAnalysisRepo};

use crate::error::{AppError, AppResult};
use crate::query::{GenerationListParams, PaginationParams};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// GET /generations
// ---------------------------------------------------------------------------

/// List logged generations, newest first, optionally filtered by `kind`.
pub async fn list_generations(
    State(state): State<AppState>,
    Query(params): Query<GenerationListParams>,
) -> AppResult<impl IntoResponse> {
    let kind = params
        .kind
        .as_deref()
        .map(GenerationKind::from_str_db)
        .transpose()?;
    let limit = clamp_limit(params.limit, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT);
    let offset = clamp_offset(params.offset);

    let items = GenerationRepo::list(&state.pool, kind, limit, offset).await?;
    Ok(Json(DataResponse { data: items }))
}

// ---------------------------------------------------------------------------
// GET /generations/{id}
// ---------------------------------------------------------------------------

pub async fn get_generation(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let generation = GenerationRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Generation",
            id,
        }))?;
    Ok(Json(DataResponse { data: generation }))
}

// ---------------------------------------------------------------------------
// GET /seo-analyses
// ---------------------------------------------------------------------------

/// List recorded SEO analyses, newest first.
pub async fn list_seo_analyses(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<impl IntoResponse> {
    let limit = clamp_limit(params.limit, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT);
    let offset = clamp_offset(params.offset);

    let items = SeoAnalysisRepo::list(&state.pool, limit, offset).await?;
    Ok(Json(DataResponse { data: items }))
}

// ---------------------------------------------------------------------------
// GET /seo-analyses/{id}
// ---------------------------------------------------------------------------

pub async fn get_seo_analysis(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let analysis = SeoAnalysisRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "SeoAnalysis",
            id,
        }))?;
    Ok(Json(DataResponse { data: analysis }))
}
