use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::assistant::{
    generate_job_description, summarize_candidate_notes, AssistantResponse,
    AssistantResponseType,
};
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct JobDescriptionRequest {
    pub title: String,
    pub department: String,
}

/// POST /api/v1/assistant/job-description
pub async fn handle_job_description(
    State(state): State<AppState>,
    Json(req): Json<JobDescriptionRequest>,
) -> Result<Json<AssistantResponse>, AppError> {
    if req.title.trim().is_empty() || req.department.trim().is_empty() {
        return Err(AppError::Validation(
            "Title and department are required".to_string(),
        ));
    }
    let content = generate_job_description(&req.title, &req.department, &state.config.org_name);
    Ok(Json(AssistantResponse::new(
        AssistantResponseType::JobDescription,
        content,
    )))
}

/// POST /api/v1/candidates/:id/summary
pub async fn handle_summarize_notes(
    State(state): State<AppState>,
    Path(candidate_id): Path<Uuid>,
) -> Result<Json<AssistantResponse>, AppError> {
    let candidate = state
        .store
        .get_candidate(candidate_id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Candidate {candidate_id} not found")))?;
    let content = summarize_candidate_notes(&candidate);
    Ok(Json(AssistantResponse::new(
        AssistantResponseType::Summary,
        content,
    )))
}
