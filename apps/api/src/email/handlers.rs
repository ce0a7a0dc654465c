use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use crate::email::{render, template_for_stage, EmailTemplate, RenderedEmail, EMAIL_TEMPLATES};
use crate::errors::AppError;
use crate::models::stage::Stage;
use crate::state::AppState;

/// GET /api/v1/email-templates
pub async fn handle_list_templates() -> Json<&'static [EmailTemplate]> {
    Json(EMAIL_TEMPLATES)
}

/// GET /api/v1/candidates/:id/email-preview/:stage
///
/// Renders the stage's template for one candidate. The recruiter copies the
/// preview into their mail client; the service itself never sends.
pub async fn handle_preview(
    State(state): State<AppState>,
    Path((candidate_id, stage)): Path<(Uuid, Stage)>,
) -> Result<Json<RenderedEmail>, AppError> {
    let candidate = state
        .store
        .get_candidate(candidate_id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Candidate {candidate_id} not found")))?;
    let role = state
        .store
        .get_role(candidate.role_id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Role {} not found", candidate.role_id)))?;
    let template = template_for_stage(stage).ok_or_else(|| {
        AppError::NotFound(format!("No email template for stage {stage:?}"))
    })?;

    Ok(Json(render(
        template,
        &candidate.first_name,
        &role.title,
        &state.config.org_name,
    )))
}
