// handlers/protected/subjects/department_put.rs - PUT /api/subjects handler

use axum::{
    extract::{Extension, State},
    response::{IntoResponse, Json},
};
use serde::Deserialize;
use serde_json::json;

use crate::database::models::DepartmentChanges;
use crate::error::ApiError;
use crate::middleware::Session;
use crate::types::Role;
use crate::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDepartmentBody {
    pub department_id: Option<String>,
    pub name: Option<String>,
    pub is_active: Option<bool>,
    pub college_id: Option<String>,
}

/// PUT /api/subjects - Update a department record (SBTE_ADMIN only)
pub async fn department_put(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Json(body): Json<UpdateDepartmentBody>,
) -> Result<impl IntoResponse, ApiError> {
    let (department_id, name, is_active, college_id) = match (
        super::non_empty(body.department_id),
        super::non_empty(body.name),
        body.is_active,
        super::non_empty(body.college_id),
    ) {
        (Some(department_id), Some(name), Some(is_active), Some(college_id)) => {
            (department_id, name, is_active, college_id)
        }
        _ => {
            return Err(ApiError::bad_request(
                "All fields (departmentId, name, isActive, and collegeId) are required",
            ))
        }
    };

    if session.role != Role::SbteAdmin {
        return Err(ApiError::forbidden("Unauthorized"));
    }

    if state.store.department_by_id(&department_id).await?.is_none() {
        return Err(ApiError::not_found("Department not found"));
    }

    let department = state
        .store
        .update_department(
            &department_id,
            DepartmentChanges {
                name,
                is_active,
                college_id,
            },
        )
        .await?;

    Ok(Json(json!({
        "message": "Department updated successfully",
        "department": department
    })))
}
