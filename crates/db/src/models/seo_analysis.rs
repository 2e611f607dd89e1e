//! SEO analysis log models and DTOs.

use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;
use videofuel_core::content::SeoReport;
use videofuel_core::language::Language;
use videofuel_core::types::{DbId, Timestamp};

/// A row from the `seo_analyses` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SeoAnalysis {
    pub id: DbId,
    pub uuid: Uuid,
    pub title: String,
    pub description: String,
    pub hashtags: serde_json::Value,
    pub language: String,
    pub scores: serde_json::Value,
    pub recommendations: serde_json::Value,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Input for logging an SEO analysis.
#[derive(Debug, Clone)]
pub struct CreateSeoAnalysis<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub hashtags: &'a [String],
    pub language: Language,
    pub report: &'a SeoReport,
}
