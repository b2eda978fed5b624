// handlers/protected/subjects/subject_post.rs - POST /api/subjects handler

use axum::{
    extract::{Extension, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::database::models::NewSubject;
use crate::error::ApiError;
use crate::middleware::Session;
use crate::types::Role;
use crate::AppState;

/// Request body for subject creation. Every field is optional at the serde
/// level so a missing field becomes a 400 instead of an extractor rejection.
/// `credit_score` stays a raw Value: clients send it both as a number and as
/// a numeric string.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSubjectBody {
    pub name: Option<String>,
    pub code: Option<String>,
    pub semester: Option<i32>,
    pub credit_score: Option<Value>,
    pub department_id: Option<String>,
    pub teacher_id: Option<String>,
}

/// POST /api/subjects - Create a subject within the caller's own department
///
/// Only an HOD session may create subjects, and only for the department the
/// session belongs to. The (name, code, departmentId) triple must not
/// already exist; a supplied teacherId must resolve to a teacher.
pub async fn subject_post(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Json(body): Json<CreateSubjectBody>,
) -> Result<impl IntoResponse, ApiError> {
    let (name, code, semester, credit_score, department_id) = match (
        super::non_empty(body.name),
        super::non_empty(body.code),
        body.semester,
        body.credit_score,
        super::non_empty(body.department_id),
    ) {
        (Some(name), Some(code), Some(semester), Some(credit_score), Some(department_id)) => {
            (name, code, semester, credit_score, department_id)
        }
        _ => return Err(ApiError::bad_request("All fields are required")),
    };

    if session.role != Role::Hod {
        return Err(ApiError::forbidden("Unauthorized: Only HOD can create subjects"));
    }

    if session.department_id.as_deref() != Some(department_id.as_str()) {
        return Err(ApiError::forbidden(
            "Unauthorized: You are not authorized to create subjects in this department",
        ));
    }

    // An empty teacherId means "no association", not a lookup failure
    let teacher_id = super::non_empty(body.teacher_id);
    if let Some(teacher_id) = teacher_id.as_deref() {
        if state.store.teacher_by_id(teacher_id).await?.is_none() {
            return Err(ApiError::not_found("Teacher not found"));
        }
    }

    let credit_score = parse_credit_score(&credit_score)
        .ok_or_else(|| ApiError::bad_request("Invalid credit score value"))?;

    let existing = state
        .store
        .subject_by_name_code(&name, &code, &department_id)
        .await?;
    if existing.is_some() {
        return Err(ApiError::conflict(
            "Subject with the same name and code already exists in this department",
        ));
    }

    let subject = state
        .store
        .insert_subject(NewSubject {
            name,
            code,
            semester,
            credit_score,
            department_id,
            teacher_id,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Subject Created Successfully", "subject": subject })),
    ))
}

/// Accepts a JSON number or a numeric string; rejects everything else,
/// including non-finite values.
fn parse_credit_score(value: &Value) -> Option<f64> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    parsed.is_finite().then_some(parsed)
}
