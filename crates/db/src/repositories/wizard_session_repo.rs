//! Repository for the `wizard_sessions` table.

use sqlx::types::Json;
use sqlx::PgPool;
use videofuel_core::types::DbId;
use videofuel_core::wizard::WizardState;

use crate::models::wizard_session::WizardSession;

/// Column list for wizard_sessions queries.
const COLUMNS: &str = "id, uuid, current_step, revision, language, model, state, created_at, updated_at";

/// Provides persistence for step wizard sessions.
pub struct WizardSessionRepo;

impl WizardSessionRepo {
    /// Insert a new session holding `state`.
    pub async fn create(pool: &PgPool, state: &WizardState) -> Result<WizardSession, sqlx::Error> {
        let query = format!(
            "INSERT INTO wizard_sessions (current_step, language, model, state) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, WizardSession>(&query)
            .bind(i16::from(state.current_step.to_number()))
            .bind(state.language.as_code())
            .bind(state.model.key())
            .bind(Json(state))
            .fetch_one(pool)
            .await
    }

    /// Find a session by its primary key.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<WizardSession>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM wizard_sessions WHERE id = $1");
        sqlx::query_as::<_, WizardSession>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Overwrite the stored state of a session, provided it is still at
    /// `expected_revision`. Every successful save bumps the revision.
    ///
    /// Returns `None` if the session does not exist or another request has
    /// saved it since it was read.
    pub async fn save_state(
        pool: &PgPool,
        id: DbId,
        expected_revision: i32,
        state: &WizardState,
    ) -> Result<Option<WizardSession>, sqlx::Error> {
        let query = format!(
            "UPDATE wizard_sessions \
             SET current_step = $3, state = $4, revision = revision + 1 \
             WHERE id = $1 AND revision = $2 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, WizardSession>(&query)
            .bind(id)
            .bind(expected_revision)
            .bind(i16::from(state.current_step.to_number()))
            .bind(Json(state))
            .fetch_optional(pool)
            .await
    }
}
