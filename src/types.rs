/// Shared types used across the codebase

use serde::{Deserialize, Serialize};

/// Principal roles carried by session claims.
/// Wire format matches the role strings issued by the auth service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Hod,
    SbteAdmin,
    Teacher,
    Student,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roles_serialize_to_wire_strings() {
        assert_eq!(serde_json::to_value(Role::Hod).unwrap(), "HOD");
        assert_eq!(serde_json::to_value(Role::SbteAdmin).unwrap(), "SBTE_ADMIN");
        let role: Role = serde_json::from_value(serde_json::json!("TEACHER")).unwrap();
        assert_eq!(role, Role::Teacher);
    }
}
