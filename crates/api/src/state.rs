use std::sync::Arc;

use videofuel_llm::ChatCompletion;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: videofuel_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// LLM provider used by every generation step.
    pub llm: Arc<dyn ChatCompletion>,
}
