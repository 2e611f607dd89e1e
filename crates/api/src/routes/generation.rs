//! Route definitions for the per-step generation endpoints.
//!
//! Merged directly into `/api` by `api_routes()`.
//!
//! ```text
//! POST   /generate-titles          generate_titles
//! POST   /generate-description     generate_description
//! POST   /generate-script          generate_script
//! POST   /generate-thumbnail       generate_thumbnail
//! POST   /analyze-seo              analyze_seo
//! ```

use axum::routing::post;
use axum::Router;

use crate::handlers::generation;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/generate-titles", post(generation::generate_titles))
        .route("/generate-description", post(generation::generate_description))
        .route("/generate-script", post(generation::generate_script))
        .route("/generate-thumbnail", post(generation::generate_thumbnail))
        .route("/analyze-seo", post(generation::analyze_seo))
}
