pub mod generation;
pub mod health;
pub mod history;
pub mod wizard;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /                                     service banner
/// /models                               selectable model keys
///
/// /generate-titles                      title candidates (POST)
/// /generate-description                 description + hashtags (POST)
/// /generate-script                      structured script (POST)
/// /generate-thumbnail                   thumbnail texts (POST)
/// /analyze-seo                          SEO scores + recommendations (POST)
///
/// /generations                          generation log (?kind, limit, offset)
/// /generations/{id}                     single generation
/// /seo-analyses                         SEO analysis history (?limit, offset)
/// /seo-analyses/{id}                    single analysis
///
/// /wizard-sessions                      create (POST)
/// /wizard-sessions/{id}                 get
/// /wizard-sessions/{id}/topic           step 1 (POST)
/// /wizard-sessions/{id}/title           step 2 (POST)
/// /wizard-sessions/{id}/script          step 3 (POST)
/// /wizard-sessions/{id}/thumbnail       step 4 (POST)
/// /wizard-sessions/{id}/seo             step 5 (POST)
/// /wizard-sessions/{id}/reset           back to step 1 (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::meta::root))
        .route("/models", get(handlers::meta::list_models))
        .merge(generation::router())
        .merge(history::router())
        .nest("/wizard-sessions", wizard::router())
}
