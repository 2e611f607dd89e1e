//! Service metadata endpoints.

use axum::Json;
use serde::Serialize;
use videofuel_core::models;

/// API version advertised at `GET /api/`.
pub const API_VERSION: &str = "1.0.0";

#[derive(Debug, Serialize)]
pub struct RootResponse {
    pub message: &'static str,
    pub version: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ModelsResponse {
    pub models: Vec<&'static str>,
}

/// GET /api/ -- service banner.
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "VideoFuel AI - YouTube Creator Toolkit",
        version: API_VERSION,
    })
}

/// GET /api/models -- selectable model keys, in catalog order.
pub async fn list_models() -> Json<ModelsResponse> {
    Json(ModelsResponse {
        models: models::model_keys(),
    })
}
