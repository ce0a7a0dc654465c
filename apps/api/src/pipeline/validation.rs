//! Server-side form validation for the public application form and the
//! recruiter-facing note/score forms. Each validator collects every failing
//! field so the caller can report them all at once.

use serde::Deserialize;

use crate::models::candidate::{score_category, QuestionAnswer};
use crate::models::role::Role;

const NAME_MAX: usize = 50;
const COVER_LETTER_MAX: usize = 5000;
const NOTE_MAX: usize = 2000;

/// Public application form payload.
#[derive(Debug, Clone, Deserialize)]
pub struct ApplicationForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub linked_in: Option<String>,
    #[serde(default)]
    pub portfolio: Option<String>,
    #[serde(default)]
    pub resume_url: Option<String>,
    #[serde(default)]
    pub cover_letter: Option<String>,
    #[serde(default)]
    pub question_answers: Vec<QuestionAnswer>,
}

pub fn validate_application(form: &ApplicationForm, role: &Role) -> Vec<String> {
    let mut errors = Vec::new();

    if form.first_name.trim().is_empty() {
        errors.push("First name is required".to_string());
    } else if form.first_name.chars().count() > NAME_MAX {
        errors.push("First name must be 50 characters or less".to_string());
    }

    if form.last_name.trim().is_empty() {
        errors.push("Last name is required".to_string());
    } else if form.last_name.chars().count() > NAME_MAX {
        errors.push("Last name must be 50 characters or less".to_string());
    }

    if form.email.trim().is_empty() {
        errors.push("Email address is required".to_string());
    } else if !is_plausible_email(&form.email) {
        errors.push("Please enter a valid email address".to_string());
    }

    if let Some(phone) = non_empty(&form.phone) {
        let ok = phone
            .chars()
            .all(|c| c.is_ascii_digit() || " -+()".contains(c));
        if !ok {
            errors.push("Please enter a valid phone number".to_string());
        }
    }

    if let Some(linked_in) = non_empty(&form.linked_in) {
        if !linked_in.contains("linkedin.com") {
            errors.push("Please enter a valid LinkedIn URL".to_string());
        }
    }

    if let Some(portfolio) = non_empty(&form.portfolio) {
        if !portfolio.starts_with("http://") && !portfolio.starts_with("https://") {
            errors.push(
                "Please enter a valid URL (starting with http:// or https://)".to_string(),
            );
        }
    }

    if let Some(cover_letter) = &form.cover_letter {
        if cover_letter.chars().count() > COVER_LETTER_MAX {
            errors.push("Cover letter must be 5000 characters or less".to_string());
        }
    }

    for question in role.questions.iter().filter(|q| q.required) {
        let answered = form
            .question_answers
            .iter()
            .any(|a| a.question_id == question.id && !a.answer.trim().is_empty());
        if !answered {
            errors.push(format!("An answer is required for \"{}\"", question.question));
        }
    }

    errors
}

pub fn validate_note_content(content: &str) -> Vec<String> {
    let mut errors = Vec::new();
    if content.trim().is_empty() {
        errors.push("Note content is required".to_string());
    } else if content.chars().count() > NOTE_MAX {
        errors.push("Note must be 2000 characters or less".to_string());
    }
    errors
}

pub fn validate_score(category_id: &str, value: u8) -> Vec<String> {
    let mut errors = Vec::new();
    match score_category(category_id) {
        None => errors.push(format!("Unknown score category \"{category_id}\"")),
        Some(category) => {
            if value > category.max_score {
                errors.push(format!(
                    "Score must be between 0 and {}",
                    category.max_score
                ));
            }
        }
    }
    errors
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.trim().is_empty())
}

fn is_plausible_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !email.contains(char::is_whitespace)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::role::{
        ApplicationQuestion, EmploymentType, QuestionType, RoleStatus,
    };
    use chrono::Utc;
    use uuid::Uuid;

    fn make_form() -> ApplicationForm {
        ApplicationForm {
            first_name: "Amara".to_string(),
            last_name: "Okafor".to_string(),
            email: "amara@example.com".to_string(),
            phone: None,
            linked_in: None,
            portfolio: None,
            resume_url: None,
            cover_letter: None,
            question_answers: vec![],
        }
    }

    fn make_role(questions: Vec<ApplicationQuestion>) -> Role {
        let now = Utc::now();
        Role {
            id: Uuid::new_v4(),
            title: "Veterinary Nurse".to_string(),
            department: "Animal Care".to_string(),
            location: "Bristol, UK".to_string(),
            employment_type: EmploymentType::FullTime,
            description: "Care for animals in our centre.".to_string(),
            requirements: vec![],
            salary: None,
            status: RoleStatus::Open,
            questions,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_minimal_valid_application_passes() {
        assert!(validate_application(&make_form(), &make_role(vec![])).is_empty());
    }

    #[test]
    fn test_missing_names_and_email_all_reported() {
        let form = ApplicationForm {
            first_name: "".to_string(),
            last_name: "  ".to_string(),
            email: "".to_string(),
            ..make_form()
        };
        let errors = validate_application(&form, &make_role(vec![]));
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_name_length_limit() {
        let form = ApplicationForm {
            first_name: "x".repeat(51),
            ..make_form()
        };
        let errors = validate_application(&form, &make_role(vec![]));
        assert_eq!(errors, vec!["First name must be 50 characters or less"]);
    }

    #[test]
    fn test_malformed_email_rejected() {
        for bad in ["plainaddress", "no@tld", "@example.com", "a b@example.com"] {
            let form = ApplicationForm {
                email: bad.to_string(),
                ..make_form()
            };
            let errors = validate_application(&form, &make_role(vec![]));
            assert_eq!(errors, vec!["Please enter a valid email address"], "{bad}");
        }
    }

    #[test]
    fn test_phone_allows_formatting_characters() {
        let form = ApplicationForm {
            phone: Some("+44 (0)117 123-4567".to_string()),
            ..make_form()
        };
        assert!(validate_application(&form, &make_role(vec![])).is_empty());

        let form = ApplicationForm {
            phone: Some("call me maybe".to_string()),
            ..make_form()
        };
        assert_eq!(
            validate_application(&form, &make_role(vec![])),
            vec!["Please enter a valid phone number"]
        );
    }

    #[test]
    fn test_linkedin_and_portfolio_urls() {
        let form = ApplicationForm {
            linked_in: Some("https://example.com/me".to_string()),
            portfolio: Some("www.example.com".to_string()),
            ..make_form()
        };
        let errors = validate_application(&form, &make_role(vec![]));
        assert!(errors.iter().any(|e| e.contains("LinkedIn")));
        assert!(errors.iter().any(|e| e.contains("http://")));
    }

    #[test]
    fn test_cover_letter_length_limit() {
        let form = ApplicationForm {
            cover_letter: Some("y".repeat(5001)),
            ..make_form()
        };
        assert_eq!(
            validate_application(&form, &make_role(vec![])),
            vec!["Cover letter must be 5000 characters or less"]
        );
    }

    #[test]
    fn test_required_question_must_be_answered() {
        let question = ApplicationQuestion {
            id: Uuid::new_v4(),
            question: "Why do you want this role?".to_string(),
            question_type: QuestionType::Textarea,
            required: true,
            options: vec![],
            placeholder: None,
            max_length: Some(500),
        };
        let role = make_role(vec![question.clone()]);

        let errors = validate_application(&make_form(), &role);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("Why do you want this role?"));

        let form = ApplicationForm {
            question_answers: vec![QuestionAnswer {
                question_id: question.id,
                question: question.question.clone(),
                answer: "Because animal welfare matters to me.".to_string(),
            }],
            ..make_form()
        };
        assert!(validate_application(&form, &role).is_empty());
    }

    #[test]
    fn test_optional_question_may_be_skipped() {
        let question = ApplicationQuestion {
            id: Uuid::new_v4(),
            question: "Anything else?".to_string(),
            question_type: QuestionType::Text,
            required: false,
            options: vec![],
            placeholder: None,
            max_length: None,
        };
        assert!(validate_application(&make_form(), &make_role(vec![question])).is_empty());
    }

    #[test]
    fn test_note_content_rules() {
        assert!(validate_note_content("Solid phone screen").is_empty());
        assert_eq!(validate_note_content("   "), vec!["Note content is required"]);
        assert_eq!(
            validate_note_content(&"z".repeat(2001)),
            vec!["Note must be 2000 characters or less"]
        );
    }

    #[test]
    fn test_score_rules() {
        assert!(validate_score("cat-1", 5).is_empty());
        assert_eq!(
            validate_score("cat-1", 6),
            vec!["Score must be between 0 and 5"]
        );
        assert_eq!(
            validate_score("cat-99", 3),
            vec!["Unknown score category \"cat-99\""]
        );
    }
}
