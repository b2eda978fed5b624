// handlers/protected/subjects/department_delete.rs - DELETE /api/subjects handler

use axum::{
    extract::{Extension, State},
    response::{IntoResponse, Json},
};
use serde::Deserialize;
use serde_json::json;

use crate::error::ApiError;
use crate::middleware::Session;
use crate::types::Role;
use crate::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteDepartmentBody {
    pub department_id: Option<String>,
}

/// DELETE /api/subjects - Delete a department record (SBTE_ADMIN only)
pub async fn department_delete(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Json(body): Json<DeleteDepartmentBody>,
) -> Result<impl IntoResponse, ApiError> {
    let department_id = super::non_empty(body.department_id)
        .ok_or_else(|| ApiError::bad_request("Department ID is required"))?;

    if session.role != Role::SbteAdmin {
        return Err(ApiError::forbidden("Unauthorized"));
    }

    if state.store.department_by_id(&department_id).await?.is_none() {
        return Err(ApiError::not_found("Department not found"));
    }

    state.store.delete_department(&department_id).await?;

    Ok(Json(json!({ "message": "Department deleted successfully" })))
}
