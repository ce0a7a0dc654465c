use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Recruiter,
    Interviewer,
    Viewer,
}

/// Hiring-team member account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: UserRole,
}

/// The service runs without authentication; every note and score is
/// attributed to this hard-coded account.
pub fn current_user() -> User {
    User {
        id: Uuid::from_u128(0x0000_0000_0000_0000_0000_0000_0000_0001),
        name: "Sarah Chen".to_string(),
        email: "sarah.chen@talentflow.example".to_string(),
        role: UserRole::Admin,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_user_is_stable_admin() {
        let a = current_user();
        let b = current_user();
        assert_eq!(a.id, b.id);
        assert_eq!(a.role, UserRole::Admin);
    }
}
