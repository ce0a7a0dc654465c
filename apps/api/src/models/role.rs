use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EmploymentType {
    FullTime,
    PartTime,
    Contract,
    Internship,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoleStatus {
    Open,
    Closed,
    #[default]
    Draft,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryRange {
    pub min: u32,
    pub max: u32,
    pub currency: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionType {
    Text,
    Textarea,
    Select,
    Radio,
}

/// Custom application question attached to a role.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationQuestion {
    pub id: Uuid,
    pub question: String,
    pub question_type: QuestionType,
    pub required: bool,
    /// Choices for select/radio questions; empty for free-text ones.
    #[serde(default)]
    pub options: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
}

/// An open (or draft/closed) position in the organization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Role {
    pub id: Uuid,
    pub title: String,
    pub department: String,
    pub location: String,
    pub employment_type: EmploymentType,
    pub description: String,
    pub requirements: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary: Option<SalaryRange>,
    pub status: RoleStatus,
    #[serde(default)]
    pub questions: Vec<ApplicationQuestion>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_employment_type_serde_kebab_case() {
        assert_eq!(
            serde_json::to_string(&EmploymentType::FullTime).unwrap(),
            r#""full-time""#
        );
        let t: EmploymentType = serde_json::from_str(r#""internship""#).unwrap();
        assert_eq!(t, EmploymentType::Internship);
    }

    #[test]
    fn test_role_status_default_is_draft() {
        assert_eq!(RoleStatus::default(), RoleStatus::Draft);
    }

    #[test]
    fn test_role_deserializes_without_optional_fields() {
        let json = r#"{
            "id": "8e4a0c3a-2f6b-4c7e-9a1d-5b2e8f3c6d7a",
            "title": "Animal Welfare Officer",
            "department": "Field Operations",
            "location": "Horsham, UK",
            "employment_type": "full-time",
            "description": "Support our front-line rescue work.",
            "requirements": ["Full driving licence"],
            "status": "open",
            "created_at": "2026-01-05T09:00:00Z",
            "updated_at": "2026-01-05T09:00:00Z"
        }"#;
        let role: Role = serde_json::from_str(json).unwrap();
        assert_eq!(role.status, RoleStatus::Open);
        assert!(role.salary.is_none());
        assert!(role.questions.is_empty());
    }
}
