// Shared helpers; each test binary uses a subset
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use chrono::Utc;
use serde_json::Value;
use tower::ServiceExt;

use sbte_api::auth::{generate_jwt, Claims};
use sbte_api::database::models::{Department, DepartmentChanges, NewSubject, Subject, Teacher};
use sbte_api::database::store::{Store, StoreError};
use sbte_api::types::Role;
use sbte_api::AppState;

/// In-memory Store so tests can drive the real router and middleware stack
/// without PostgreSQL. Every store call is recorded, which lets tests assert
/// that rejected requests never reached persistence.
#[derive(Default)]
pub struct MemoryStore {
    pub teachers: Mutex<Vec<Teacher>>,
    pub departments: Mutex<Vec<Department>>,
    pub subjects: Mutex<Vec<Subject>>,
    calls: Mutex<Vec<&'static str>>,
}

impl MemoryStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn seed_department(&self, department: Department) {
        self.departments.lock().unwrap().push(department);
    }

    pub fn seed_teacher(&self, teacher: Teacher) {
        self.teachers.lock().unwrap().push(teacher);
    }

    pub fn seed_subject(&self, subject: Subject) {
        self.subjects.lock().unwrap().push(subject);
    }

    /// Names of every store method invoked so far, in order
    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }

    pub fn subject_count(&self) -> usize {
        self.subjects.lock().unwrap().len()
    }

    fn record(&self, call: &'static str) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn teacher_by_id(&self, id: &str) -> Result<Option<Teacher>, StoreError> {
        self.record("teacher_by_id");
        Ok(self.teachers.lock().unwrap().iter().find(|t| t.id == id).cloned())
    }

    async fn subject_by_name_code(
        &self,
        name: &str,
        code: &str,
        department_id: &str,
    ) -> Result<Option<Subject>, StoreError> {
        self.record("subject_by_name_code");
        Ok(self
            .subjects
            .lock()
            .unwrap()
            .iter()
            .find(|s| s.name == name && s.code == code && s.department_id == department_id)
            .cloned())
    }

    async fn insert_subject(&self, subject: NewSubject) -> Result<Subject, StoreError> {
        self.record("insert_subject");
        let now = Utc::now();
        let created = Subject {
            id: uuid::Uuid::new_v4().to_string(),
            name: subject.name,
            code: subject.code,
            semester: subject.semester,
            credit_score: subject.credit_score,
            department_id: subject.department_id,
            teacher_id: subject.teacher_id,
            created_at: now,
            updated_at: now,
        };
        self.subjects.lock().unwrap().push(created.clone());
        Ok(created)
    }

    async fn department_by_id(&self, id: &str) -> Result<Option<Department>, StoreError> {
        self.record("department_by_id");
        Ok(self.departments.lock().unwrap().iter().find(|d| d.id == id).cloned())
    }

    async fn update_department(
        &self,
        id: &str,
        changes: DepartmentChanges,
    ) -> Result<Department, StoreError> {
        self.record("update_department");
        let mut departments = self.departments.lock().unwrap();
        let department = departments
            .iter_mut()
            .find(|d| d.id == id)
            .ok_or_else(|| StoreError::NotFound(format!("department {}", id)))?;
        department.name = changes.name;
        department.is_active = changes.is_active;
        department.college_id = changes.college_id;
        department.updated_at = Utc::now();
        Ok(department.clone())
    }

    async fn delete_department(&self, id: &str) -> Result<(), StoreError> {
        self.record("delete_department");
        let mut departments = self.departments.lock().unwrap();
        let before = departments.len();
        departments.retain(|d| d.id != id);
        if departments.len() == before {
            return Err(StoreError::NotFound(format!("department {}", id)));
        }
        Ok(())
    }

    async fn list_departments(&self) -> Result<Vec<Department>, StoreError> {
        self.record("list_departments");
        Ok(self.departments.lock().unwrap().clone())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

/// Build the production router over an in-memory store
pub fn app_with(store: Arc<MemoryStore>) -> Router {
    sbte_api::app(AppState { store })
}

/// Mint a session token the way the auth collaborator would
pub fn token_for(role: Role, department_id: Option<&str>) -> String {
    let claims = Claims::new(
        "test-user".to_string(),
        "Test User".to_string(),
        role,
        department_id.map(str::to_string),
    );
    generate_jwt(claims).expect("failed to mint test token")
}

pub fn department(id: &str, name: &str) -> Department {
    let now = Utc::now();
    Department {
        id: id.to_string(),
        name: name.to_string(),
        is_active: true,
        college_id: "c1".to_string(),
        created_at: now,
        updated_at: now,
    }
}

pub fn teacher(id: &str, name: &str) -> Teacher {
    Teacher {
        id: id.to_string(),
        name: name.to_string(),
    }
}

pub fn subject(name: &str, code: &str, department_id: &str) -> Subject {
    let now = Utc::now();
    Subject {
        id: uuid::Uuid::new_v4().to_string(),
        name: name.to_string(),
        code: code.to_string(),
        semester: 1,
        credit_score: 3.0,
        department_id: department_id.to_string(),
        teacher_id: None,
        created_at: now,
        updated_at: now,
    }
}

/// Send a request to /api/subjects and return (status, parsed JSON body)
pub async fn api_subjects(
    app: Router,
    method: Method,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    send(app, method, "/api/subjects", token, body).await
}

pub async fn send(
    app: Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }

    let request = match body {
        Some(value) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(value.to_string()))
            .expect("request build"),
        None => builder.body(Body::empty()).expect("request build"),
    };

    let response = app.oneshot(request).await.expect("request execution");
    let status = response.status();

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body extraction");
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("json body")
    };

    (status, value)
}
