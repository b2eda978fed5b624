use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Minimal teacher mirror; the subject handler only needs to confirm a
/// teacher exists before associating it.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Teacher {
    pub id: String,
    pub name: String,
}
