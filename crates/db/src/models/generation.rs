//! Generation log models and DTOs.

use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;
use videofuel_core::content::GenerationKind;
use videofuel_core::language::Language;
use videofuel_core::models::ModelKey;
use videofuel_core::types::{DbId, Timestamp};

/// A row from the `generations` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Generation {
    pub id: DbId,
    pub uuid: Uuid,
    pub kind: String,
    pub language: String,
    pub model: String,
    pub input: serde_json::Value,
    pub output: serde_json::Value,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Input for logging a completed generation.
#[derive(Debug, Clone)]
pub struct CreateGeneration {
    pub kind: GenerationKind,
    pub language: Language,
    pub model: ModelKey,
    /// Request fields that produced the output (topic/title/length).
    pub input: serde_json::Value,
    /// The shaped output returned to the client.
    pub output: serde_json::Value,
}
