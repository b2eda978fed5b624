// handlers/protected/subjects/department_get.rs - GET /api/subjects handler

use axum::{
    extract::{Extension, State},
    response::{IntoResponse, Json},
};

use crate::error::ApiError;
use crate::middleware::Session;
use crate::types::Role;
use crate::AppState;

/// GET /api/subjects - List all departments (SBTE_ADMIN only)
///
/// Returns a bare JSON array, not an envelope; that is the contract the
/// original application's clients rely on.
pub async fn department_get(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
) -> Result<impl IntoResponse, ApiError> {
    if session.role != Role::SbteAdmin {
        return Err(ApiError::forbidden("Unauthorized"));
    }

    let departments = state.store.list_departments().await?;

    Ok(Json(departments))
}
