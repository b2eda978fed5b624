use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Subject row as persisted. Serialized camelCase to match the wire format.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Subject {
    pub id: String,
    pub name: String,
    pub code: String,
    pub semester: i32,
    pub credit_score: f64,
    pub department_id: String,
    pub teacher_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields supplied when creating a subject; id and timestamps are minted by
/// the store on insert.
#[derive(Debug, Clone)]
pub struct NewSubject {
    pub name: String,
    pub code: String,
    pub semester: i32,
    pub credit_score: f64,
    pub department_id: String,
    pub teacher_id: Option<String>,
}
