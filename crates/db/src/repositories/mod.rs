//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod generation_repo;
pub mod seo_analysis_repo;
pub mod wizard_session_repo;

pub use generation_repo::GenerationRepo;
pub use seo_analysis_repo::SeoAnalysisRepo;
pub use wizard_session_repo::WizardSessionRepo;
