//! Repository for the `generations` table.

use sqlx::PgPool;
use videofuel_core::content::GenerationKind;
use videofuel_core::types::DbId;

use crate::models::generation::{CreateGeneration, Generation};

/// Column list for generations queries.
const COLUMNS: &str = "id, uuid, kind, language, model, input, output, created_at, updated_at";

/// Provides insert and lookup operations for the generation log.
pub struct GenerationRepo;

impl GenerationRepo {
    /// Insert a generation record, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateGeneration) -> Result<Generation, sqlx::Error> {
        let query = format!(
            "INSERT INTO generations (kind, language, model, input, output) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Generation>(&query)
            .bind(input.kind.as_str())
            .bind(input.language.as_code())
            .bind(input.model.key())
            .bind(&input.input)
            .bind(&input.output)
            .fetch_one(pool)
            .await
    }

    /// Find a generation by its primary key.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Generation>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM generations WHERE id = $1");
        sqlx::query_as::<_, Generation>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List generations, newest first, optionally restricted to one kind.
    pub async fn list(
        pool: &PgPool,
        kind: Option<GenerationKind>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Generation>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM generations \
             WHERE ($1::TEXT IS NULL OR kind = $1) \
             ORDER BY created_at DESC, id DESC \
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, Generation>(&query)
            .bind(kind.map(|k| k.as_str()))
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }
}
