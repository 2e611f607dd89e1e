//! Repository for the `seo_analyses` table.

use sqlx::types::Json;
use sqlx::PgPool;
use videofuel_core::types::DbId;

use crate::models::seo_analysis::{CreateSeoAnalysis, SeoAnalysis};

/// Column list for seo_analyses queries.
const COLUMNS: &str = "id, uuid, title, description, hashtags, language, scores, \
     recommendations, created_at, updated_at";

/// Provides insert and lookup operations for SEO analyses.
pub struct SeoAnalysisRepo;

impl SeoAnalysisRepo {
    /// Insert an analysis record, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateSeoAnalysis<'_>,
    ) -> Result<SeoAnalysis, sqlx::Error> {
        let query = format!(
            "INSERT INTO seo_analyses \
                (title, description, hashtags, language, scores, recommendations) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SeoAnalysis>(&query)
            .bind(input.title)
            .bind(input.description)
            .bind(Json(input.hashtags))
            .bind(input.language.as_code())
            .bind(Json(&input.report.scores))
            .bind(Json(&input.report.recommendations))
            .fetch_one(pool)
            .await
    }

    /// Find an analysis by its primary key.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<SeoAnalysis>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM seo_analyses WHERE id = $1");
        sqlx::query_as::<_, SeoAnalysis>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List analyses, newest first.
    pub async fn list(
        pool: &PgPool,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<SeoAnalysis>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM seo_analyses \
             ORDER BY created_at DESC, id DESC \
             LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, SeoAnalysis>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }
}
