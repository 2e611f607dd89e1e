//! Route definitions for generation and SEO analysis history.
//!
//! ```text
//! GET    /generations              list_generations (?kind, limit, offset)
//! GET    /generations/{id}         get_generation
//! GET    /seo-analyses             list_seo_analyses (?limit, offset)
//! GET    /seo-analyses/{id}        get_seo_analysis
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::history;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/generations", get(history::list_generations))
        .route("/generations/{id}", get(history::get_generation))
        .route("/seo-analyses", get(history::list_seo_analyses))
        .route("/seo-analyses/{id}", get(history::get_seo_analysis))
}
