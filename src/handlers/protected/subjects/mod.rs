// handlers/protected/subjects/mod.rs - /api/subjects resource
//
// Keeps the original application's wire contract: POST creates a subject,
// while PUT/DELETE/GET on the same path manage department records.

pub mod department_delete;
pub mod department_get;
pub mod department_put;
pub mod subject_post;

pub use department_delete::department_delete;
pub use department_get::department_get;
pub use department_put::department_put;
pub use subject_post::subject_post;

/// Treat empty strings the same as absent fields; upstream clients send
/// cleared form inputs as "".
pub(super) fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}
