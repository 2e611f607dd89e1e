//! Route definitions for content wizard sessions.
//!
//! Mounted at `/wizard-sessions` by `api_routes()`.
//!
//! ```text
//! POST   /                    create_session
//! GET    /{id}                get_session
//! POST   /{id}/topic          submit_topic
//! POST   /{id}/title          select_title
//! POST   /{id}/script         generate_script
//! POST   /{id}/thumbnail      generate_thumbnail
//! POST   /{id}/seo            analyze_seo
//! POST   /{id}/reset          reset_session
//! ```

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::wizard;
use crate::state::AppState;

/// Wizard session routes, mounted at `/wizard-sessions`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(wizard::create_session))
        .route("/{id}", get(wizard::get_session))
        .route("/{id}/topic", post(wizard::submit_topic))
        .route("/{id}/title", post(wizard::select_title))
        .route("/{id}/script", post(wizard::generate_script))
        .route("/{id}/thumbnail", post(wizard::generate_thumbnail))
        .route("/{id}/seo", post(wizard::analyze_seo))
        .route("/{id}/reset", post(wizard::reset_session))
}
