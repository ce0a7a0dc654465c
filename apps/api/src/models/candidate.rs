use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::stage::Stage;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoteType {
    #[default]
    General,
    Interview,
    Reference,
    Internal,
}

/// Interview/evaluation note, embedded in its candidate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Note {
    pub id: Uuid,
    pub candidate_id: Uuid,
    pub author_id: Uuid,
    pub author_name: String,
    pub content: String,
    pub note_type: NoteType,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Scoring rubric item. The rubric is fixed; scores reference it by id.
#[derive(Debug, Clone, Serialize)]
pub struct ScoreCategory {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub max_score: u8,
}

pub const SCORE_CATEGORIES: &[ScoreCategory] = &[
    ScoreCategory {
        id: "cat-1",
        name: "Technical Skills",
        description: "Proficiency in required technologies and tools",
        max_score: 5,
    },
    ScoreCategory {
        id: "cat-2",
        name: "Communication",
        description: "Clarity, professionalism, and listening skills",
        max_score: 5,
    },
    ScoreCategory {
        id: "cat-3",
        name: "Problem Solving",
        description: "Analytical thinking and creative solutions",
        max_score: 5,
    },
    ScoreCategory {
        id: "cat-4",
        name: "Culture Fit",
        description: "Alignment with company values and team dynamics",
        max_score: 5,
    },
    ScoreCategory {
        id: "cat-5",
        name: "Experience",
        description: "Relevant work history and achievements",
        max_score: 5,
    },
];

pub fn score_category(id: &str) -> Option<&'static ScoreCategory> {
    SCORE_CATEGORIES.iter().find(|c| c.id == id)
}

/// Individual score entry. One per (category, evaluator) pair; re-scoring
/// replaces the previous entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Score {
    pub id: Uuid,
    pub candidate_id: Uuid,
    pub category_id: String,
    pub category_name: String,
    pub value: u8,
    pub max_value: u8,
    pub evaluator_id: Uuid,
    pub evaluator_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Answer to a role's custom application question.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionAnswer {
    pub question_id: Uuid,
    pub question: String,
    pub answer: String,
}

/// Candidate/applicant profile, with embedded notes and scores.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candidate {
    pub id: Uuid,
    pub role_id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linked_in: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub portfolio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resume_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_letter: Option<String>,
    #[serde(default)]
    pub question_answers: Vec<QuestionAnswer>,
    pub stage: Stage,
    pub applied_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub notes: Vec<Note>,
    #[serde(default)]
    pub scores: Vec<Score>,
    #[serde(default)]
    pub tags: Vec<String>,
}
