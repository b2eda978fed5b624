use async_trait::async_trait;
use sqlx::PgPool;
use thiserror::Error;
use uuid::Uuid;

use crate::database::models::{Department, DepartmentChanges, NewSubject, Subject, Teacher};

/// Errors surfaced by the persistence seam
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

/// Persistence seam between the HTTP handlers and PostgreSQL.
///
/// Handlers only talk to this trait; the production implementation is
/// [`PgStore`], tests drive the router through an in-memory implementation.
#[async_trait]
pub trait Store: Send + Sync {
    async fn teacher_by_id(&self, id: &str) -> Result<Option<Teacher>, StoreError>;

    async fn subject_by_name_code(
        &self,
        name: &str,
        code: &str,
        department_id: &str,
    ) -> Result<Option<Subject>, StoreError>;

    async fn insert_subject(&self, subject: NewSubject) -> Result<Subject, StoreError>;

    async fn department_by_id(&self, id: &str) -> Result<Option<Department>, StoreError>;

    async fn update_department(
        &self,
        id: &str,
        changes: DepartmentChanges,
    ) -> Result<Department, StoreError>;

    async fn delete_department(&self, id: &str) -> Result<(), StoreError>;

    async fn list_departments(&self) -> Result<Vec<Department>, StoreError>;

    /// Connectivity probe used by the health endpoint
    async fn ping(&self) -> Result<(), StoreError>;
}

const SUBJECT_COLUMNS: &str =
    "id, name, code, semester, credit_score, department_id, teacher_id, created_at, updated_at";
const DEPARTMENT_COLUMNS: &str = "id, name, is_active, college_id, created_at, updated_at";

/// PostgreSQL-backed store
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Store for PgStore {
    async fn teacher_by_id(&self, id: &str) -> Result<Option<Teacher>, StoreError> {
        let teacher = sqlx::query_as::<_, Teacher>("SELECT id, name FROM teachers WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(teacher)
    }

    async fn subject_by_name_code(
        &self,
        name: &str,
        code: &str,
        department_id: &str,
    ) -> Result<Option<Subject>, StoreError> {
        let sql = format!(
            "SELECT {} FROM subjects WHERE name = $1 AND code = $2 AND department_id = $3",
            SUBJECT_COLUMNS
        );
        let subject = sqlx::query_as::<_, Subject>(&sql)
            .bind(name)
            .bind(code)
            .bind(department_id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(subject)
    }

    async fn insert_subject(&self, subject: NewSubject) -> Result<Subject, StoreError> {
        let id = Uuid::new_v4().to_string();
        let sql = format!(
            "INSERT INTO subjects (id, name, code, semester, credit_score, department_id, teacher_id, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, now(), now()) \
             RETURNING {}",
            SUBJECT_COLUMNS
        );
        let created = sqlx::query_as::<_, Subject>(&sql)
            .bind(&id)
            .bind(&subject.name)
            .bind(&subject.code)
            .bind(subject.semester)
            .bind(subject.credit_score)
            .bind(&subject.department_id)
            .bind(&subject.teacher_id)
            .fetch_one(&self.pool)
            .await?;
        Ok(created)
    }

    async fn department_by_id(&self, id: &str) -> Result<Option<Department>, StoreError> {
        let sql = format!("SELECT {} FROM departments WHERE id = $1", DEPARTMENT_COLUMNS);
        let department = sqlx::query_as::<_, Department>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(department)
    }

    async fn update_department(
        &self,
        id: &str,
        changes: DepartmentChanges,
    ) -> Result<Department, StoreError> {
        let sql = format!(
            "UPDATE departments SET name = $2, is_active = $3, college_id = $4, updated_at = now() \
             WHERE id = $1 RETURNING {}",
            DEPARTMENT_COLUMNS
        );
        let updated = sqlx::query_as::<_, Department>(&sql)
            .bind(id)
            .bind(&changes.name)
            .bind(changes.is_active)
            .bind(&changes.college_id)
            .fetch_optional(&self.pool)
            .await?;

        updated.ok_or_else(|| StoreError::NotFound(format!("department {}", id)))
    }

    async fn delete_department(&self, id: &str) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM departments WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(format!("department {}", id)));
        }
        Ok(())
    }

    async fn list_departments(&self) -> Result<Vec<Department>, StoreError> {
        let sql = format!("SELECT {} FROM departments ORDER BY name", DEPARTMENT_COLUMNS);
        let departments = sqlx::query_as::<_, Department>(&sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(departments)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
