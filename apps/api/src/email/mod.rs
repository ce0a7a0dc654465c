//! Stage email templates. Rendering is plain `{{var}}` substitution; the
//! supported variables are `{{firstName}}`, `{{role}}`, and `{{org}}`.
//! Templates are rendered for preview only; nothing here sends mail.

pub mod handlers;

use serde::Serialize;

use crate::models::stage::Stage;

#[derive(Debug, Clone, Serialize)]
pub struct EmailTemplate {
    pub id: &'static str,
    pub name: &'static str,
    pub subject: &'static str,
    pub body: &'static str,
    pub stage: Stage,
}

/// A template with its variables filled in for one candidate.
#[derive(Debug, Clone, Serialize)]
pub struct RenderedEmail {
    pub template_id: &'static str,
    pub stage: Stage,
    pub subject: String,
    pub body: String,
}

/// No template exists for `applied`; applicants get the confirmation page,
/// not an email.
pub const EMAIL_TEMPLATES: &[EmailTemplate] = &[
    EmailTemplate {
        id: "template-review",
        name: "Application Received",
        subject: "Thanks for applying to {{role}} at {{org}}",
        body: "Dear {{firstName}},\n\n\
               Thank you for your interest in the {{role}} position at {{org}}. We've received \
               your application and our team is currently reviewing it.\n\n\
               We appreciate the time you took to apply and will be in touch within the next \
               1-2 weeks with an update on your application status.\n\n\
               Best regards,\n\
               The {{org}} Team",
        stage: Stage::Review,
    },
    EmailTemplate {
        id: "template-interview",
        name: "Interview Invitation",
        subject: "Interview Invitation - {{role}} at {{org}}",
        body: "Dear {{firstName}},\n\n\
               Great news! After reviewing your application for the {{role}} position, we'd \
               love to invite you for an interview.\n\n\
               Please let us know your availability for the coming week, and we'll schedule a \
               time that works for you.\n\n\
               We look forward to speaking with you!\n\n\
               Best regards,\n\
               The {{org}} Team",
        stage: Stage::Interview,
    },
    EmailTemplate {
        id: "template-offer",
        name: "Offer Letter",
        subject: "Job Offer - {{role}} at {{org}}",
        body: "Dear {{firstName}},\n\n\
               We are thrilled to offer you the position of {{role}} at {{org}}!\n\n\
               Your skills, experience, and enthusiasm made a strong impression on our team, \
               and we believe you'll be a fantastic addition.\n\n\
               Please find the formal offer details attached. We'd appreciate your response \
               within 5 business days.\n\n\
               Welcome aboard!\n\n\
               Best regards,\n\
               The {{org}} Team",
        stage: Stage::Offer,
    },
    EmailTemplate {
        id: "template-rejected",
        name: "Application Update",
        subject: "Update on your {{role}} application at {{org}}",
        body: "Dear {{firstName}},\n\n\
               Thank you for your interest in the {{role}} position at {{org}} and for taking \
               the time to apply.\n\n\
               After careful consideration, we've decided to move forward with other candidates \
               whose experience more closely matches our current needs.\n\n\
               We encourage you to apply for future openings that match your skills. We'll keep \
               your resume on file for potential opportunities.\n\n\
               We wish you the best in your job search.\n\n\
               Best regards,\n\
               The {{org}} Team",
        stage: Stage::Rejected,
    },
];

pub fn template_for_stage(stage: Stage) -> Option<&'static EmailTemplate> {
    EMAIL_TEMPLATES.iter().find(|t| t.stage == stage)
}

pub fn render(
    template: &'static EmailTemplate,
    first_name: &str,
    role_title: &str,
    org: &str,
) -> RenderedEmail {
    let fill = |text: &str| {
        text.replace("{{firstName}}", first_name)
            .replace("{{role}}", role_title)
            .replace("{{org}}", org)
    };
    RenderedEmail {
        template_id: template.id,
        stage: template.stage,
        subject: fill(template.subject),
        body: fill(template.body),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_exists_for_every_stage_except_applied() {
        assert!(template_for_stage(Stage::Applied).is_none());
        for stage in [Stage::Review, Stage::Interview, Stage::Offer, Stage::Rejected] {
            assert!(template_for_stage(stage).is_some(), "{stage:?}");
        }
    }

    #[test]
    fn test_render_fills_every_placeholder() {
        for template in EMAIL_TEMPLATES {
            let rendered = render(template, "Priya", "Campaign Manager", "Talent Flow");
            assert!(!rendered.subject.contains("{{"), "{}", rendered.subject);
            assert!(!rendered.body.contains("{{"), "{}", rendered.body);
            assert!(rendered.body.contains("Priya"));
        }
    }

    #[test]
    fn test_render_injects_org_name() {
        let template = template_for_stage(Stage::Offer).unwrap();
        let rendered = render(template, "Sam", "Vet Nurse", "RSPCA");
        assert!(rendered.subject.contains("RSPCA"));
        assert!(rendered.body.contains("The RSPCA Team"));
    }

    #[test]
    fn test_repeated_placeholders_all_replaced() {
        let template = template_for_stage(Stage::Review).unwrap();
        let rendered = render(template, "Sam", "Vet Nurse", "Talent Flow");
        assert_eq!(rendered.body.matches("Talent Flow").count(), 2);
    }
}
