//! Wizard session models.

use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;
use videofuel_core::error::CoreError;
use videofuel_core::types::{DbId, Timestamp};
use videofuel_core::wizard::WizardState;

/// A row from the `wizard_sessions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct WizardSession {
    pub id: DbId,
    pub uuid: Uuid,
    pub current_step: i16,
    /// Save counter for optimistic concurrency.
    pub revision: i32,
    pub language: String,
    pub model: String,
    pub state: serde_json::Value,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl WizardSession {
    /// Decode the stored wizard state.
    pub fn wizard_state(&self) -> Result<WizardState, CoreError> {
        serde_json::from_value(self.state.clone()).map_err(|e| {
            CoreError::Internal(format!("Corrupt state for wizard session {}: {e}", self.id))
        })
    }
}
