//! Simulated AI assistant. Both generators are static string templates with
//! injected variables. There is no model call behind them, and the output
//! says so. A real inference backend would slot in behind the same handlers.

pub mod handlers;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::candidate::Candidate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum AssistantResponseType {
    JobDescription,
    Summary,
}

#[derive(Debug, Clone, Serialize)]
pub struct AssistantResponse {
    pub response_type: AssistantResponseType,
    pub content: String,
    pub generated_at: DateTime<Utc>,
}

impl AssistantResponse {
    pub fn new(response_type: AssistantResponseType, content: String) -> Self {
        Self {
            response_type,
            content,
            generated_at: Utc::now(),
        }
    }
}

/// Drafts a job description for the given title and department.
pub fn generate_job_description(title: &str, department: &str, org: &str) -> String {
    format!(
        "[AI Generated Job Description]\n\
         \n\
         About the Role:\n\
         We're looking for a talented {title} to join our {department} team at {org}. This is \
         an exciting opportunity to make a real impact in a fast-growing organization.\n\
         \n\
         What You'll Do:\n\
         \u{2022} Lead and contribute to key initiatives in {department}\n\
         \u{2022} Collaborate with cross-functional teams to deliver exceptional results\n\
         \u{2022} Help shape the future direction of our products and services\n\
         \u{2022} Mentor and grow alongside talented colleagues\n\
         \n\
         What We're Looking For:\n\
         \u{2022} Relevant experience in {department_lower} roles\n\
         \u{2022} Strong communication and collaboration skills\n\
         \u{2022} A growth mindset and passion for learning\n\
         \u{2022} Creative problem-solving abilities\n\
         \n\
         Why Join Us:\n\
         \u{2022} Competitive compensation and benefits\n\
         \u{2022} Flexible work arrangements\n\
         \u{2022} Professional development opportunities\n\
         \u{2022} Inclusive and supportive team culture",
        department_lower = department.to_lowercase(),
    )
}

/// Summarizes a candidate's notes. The observations are canned; only the
/// note count is real.
pub fn summarize_candidate_notes(candidate: &Candidate) -> String {
    if candidate.notes.is_empty() {
        return "No notes available to summarize.".to_string();
    }

    format!(
        "[AI Summary]\n\
         \n\
         Based on {count} note(s) from the hiring team:\n\
         \n\
         Key Observations:\n\
         \u{2022} Overall sentiment appears positive based on interviewer feedback\n\
         \u{2022} Technical skills have been noted as a strength\n\
         \u{2022} Communication abilities highlighted as above average\n\
         \n\
         Recommendations:\n\
         \u{2022} Continue to the next stage of the interview process\n\
         \u{2022} Consider scheduling a team culture fit interview\n\
         \n\
         Note: This is a simulated AI summary. In production, this would analyze the actual \
         note content.",
        count = candidate.notes.len(),
    )
}
