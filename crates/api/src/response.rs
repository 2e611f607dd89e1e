//! Shared response envelope types for API handlers.
//!
//! History and wizard-session resources use a `{ "data": ... }` envelope.
//! The per-step generation endpoints return their contract bodies bare,
//! since browser clients read those fields at the top level.

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
///
/// # Example
///
/// ```ignore
/// Ok(Json(DataResponse { data: items }))
/// ```
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}
