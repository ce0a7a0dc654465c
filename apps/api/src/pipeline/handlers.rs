use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use serde::Deserialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::candidate::{
    score_category, Candidate, Note, NoteType, Score, ScoreCategory, SCORE_CATEGORIES,
};
use crate::models::role::{
    ApplicationQuestion, EmploymentType, Role, RoleStatus, SalaryRange,
};
use crate::models::stage::{Stage, StageInfo};
use crate::models::user::current_user;
use crate::pipeline::validation::{
    validate_application, validate_note_content, validate_score, ApplicationForm,
};
use crate::state::AppState;
use crate::store::{CandidatePatch, RolePatch};

// ────────────────────────────────────────────────────────────────────────────
// Roles
// ────────────────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct RoleListQuery {
    pub status: Option<RoleStatus>,
}

/// GET /api/v1/roles
pub async fn handle_list_roles(
    State(state): State<AppState>,
    Query(params): Query<RoleListQuery>,
) -> Result<Json<Vec<Role>>, AppError> {
    let mut roles = state.store.list_roles().await;
    if let Some(status) = params.status {
        roles.retain(|r| r.status == status);
    }
    Ok(Json(roles))
}

/// GET /api/v1/roles/open
/// The careers page listing.
pub async fn handle_open_roles(
    State(state): State<AppState>,
) -> Result<Json<Vec<Role>>, AppError> {
    Ok(Json(state.store.list_open_roles().await))
}

/// GET /api/v1/roles/:id
pub async fn handle_get_role(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Role>, AppError> {
    let role = state
        .store
        .get_role(id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Role {id} not found")))?;
    Ok(Json(role))
}

#[derive(Deserialize)]
pub struct CreateRoleRequest {
    pub title: String,
    pub department: String,
    pub location: String,
    pub employment_type: EmploymentType,
    pub description: String,
    #[serde(default)]
    pub requirements: Vec<String>,
    #[serde(default)]
    pub salary: Option<SalaryRange>,
    #[serde(default)]
    pub status: RoleStatus,
    #[serde(default)]
    pub questions: Vec<ApplicationQuestion>,
}

/// POST /api/v1/roles
pub async fn handle_create_role(
    State(state): State<AppState>,
    Json(req): Json<CreateRoleRequest>,
) -> Result<(StatusCode, Json<Role>), AppError> {
    let mut errors = Vec::new();
    for (value, field) in [
        (&req.title, "Title"),
        (&req.department, "Department"),
        (&req.location, "Location"),
        (&req.description, "Description"),
    ] {
        if value.trim().is_empty() {
            errors.push(format!("{field} is required"));
        }
    }
    if !errors.is_empty() {
        return Err(AppError::Validation(errors.join("; ")));
    }

    let now = Utc::now();
    let role = Role {
        id: Uuid::new_v4(),
        title: req.title,
        department: req.department,
        location: req.location,
        employment_type: req.employment_type,
        description: req.description,
        requirements: req.requirements,
        salary: req.salary,
        status: req.status,
        questions: req.questions,
        created_at: now,
        updated_at: now,
    };
    let role = state.store.create_role(role).await;
    Ok((StatusCode::CREATED, Json(role)))
}

/// PATCH /api/v1/roles/:id
pub async fn handle_update_role(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(patch): Json<RolePatch>,
) -> Result<Json<Role>, AppError> {
    let role = state
        .store
        .update_role(id, patch)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Role {id} not found")))?;
    Ok(Json(role))
}

// ────────────────────────────────────────────────────────────────────────────
// Candidates
// ────────────────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CandidateListQuery {
    pub role_id: Option<Uuid>,
    pub stage: Option<Stage>,
}

/// GET /api/v1/candidates
/// The pipeline board data source.
pub async fn handle_list_candidates(
    State(state): State<AppState>,
    Query(params): Query<CandidateListQuery>,
) -> Result<Json<Vec<Candidate>>, AppError> {
    let mut candidates = match params.role_id {
        Some(role_id) => state.store.list_candidates_by_role(role_id).await,
        None => state.store.list_candidates().await,
    };
    if let Some(stage) = params.stage {
        candidates.retain(|c| c.stage == stage);
    }
    Ok(Json(candidates))
}

/// GET /api/v1/candidates/:id
pub async fn handle_get_candidate(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Candidate>, AppError> {
    let candidate = state
        .store
        .get_candidate(id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Candidate {id} not found")))?;
    Ok(Json(candidate))
}

/// POST /api/v1/roles/:id/apply
/// The public application form.
pub async fn handle_apply(
    State(state): State<AppState>,
    Path(role_id): Path<Uuid>,
    Json(form): Json<ApplicationForm>,
) -> Result<(StatusCode, Json<Candidate>), AppError> {
    let role = state
        .store
        .get_role(role_id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Role {role_id} not found")))?;

    if role.status != RoleStatus::Open {
        return Err(AppError::UnprocessableEntity(
            "This role is not accepting applications".to_string(),
        ));
    }

    let errors = validate_application(&form, &role);
    if !errors.is_empty() {
        return Err(AppError::Validation(errors.join("; ")));
    }

    let now = Utc::now();
    let candidate = Candidate {
        id: Uuid::new_v4(),
        role_id,
        first_name: form.first_name,
        last_name: form.last_name,
        email: form.email,
        phone: form.phone,
        linked_in: form.linked_in,
        portfolio: form.portfolio,
        resume_url: form.resume_url,
        cover_letter: form.cover_letter,
        question_answers: form.question_answers,
        stage: Stage::Applied,
        applied_at: now,
        updated_at: now,
        notes: vec![],
        scores: vec![],
        tags: vec![],
    };
    let candidate = state.store.create_candidate(candidate).await;
    Ok((StatusCode::CREATED, Json(candidate)))
}

/// PATCH /api/v1/candidates/:id
pub async fn handle_update_candidate(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(patch): Json<CandidatePatch>,
) -> Result<Json<Candidate>, AppError> {
    let candidate = state
        .store
        .update_candidate(id, patch)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Candidate {id} not found")))?;
    Ok(Json(candidate))
}

#[derive(Deserialize)]
pub struct StageChangeRequest {
    pub stage: Stage,
}

/// PATCH /api/v1/candidates/:id/stage
/// A card move on the board; any stage may move to any other stage.
pub async fn handle_set_stage(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<StageChangeRequest>,
) -> Result<Json<Candidate>, AppError> {
    let candidate = state
        .store
        .set_candidate_stage(id, req.stage)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Candidate {id} not found")))?;
    Ok(Json(candidate))
}

// ────────────────────────────────────────────────────────────────────────────
// Notes
// ────────────────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct NoteForm {
    pub content: String,
    #[serde(default)]
    pub note_type: NoteType,
}

/// POST /api/v1/candidates/:id/notes
pub async fn handle_add_note(
    State(state): State<AppState>,
    Path(candidate_id): Path<Uuid>,
    Json(form): Json<NoteForm>,
) -> Result<(StatusCode, Json<Note>), AppError> {
    let errors = validate_note_content(&form.content);
    if !errors.is_empty() {
        return Err(AppError::Validation(errors.join("; ")));
    }

    let author = current_user();
    let now = Utc::now();
    let note = Note {
        id: Uuid::new_v4(),
        candidate_id,
        author_id: author.id,
        author_name: author.name,
        content: form.content,
        note_type: form.note_type,
        created_at: now,
        updated_at: now,
    };
    let note = state
        .store
        .add_note(candidate_id, note)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Candidate {candidate_id} not found")))?;
    Ok((StatusCode::CREATED, Json(note)))
}

#[derive(Deserialize)]
pub struct NoteUpdateRequest {
    pub content: String,
}

/// PATCH /api/v1/candidates/:id/notes/:note_id
pub async fn handle_update_note(
    State(state): State<AppState>,
    Path((candidate_id, note_id)): Path<(Uuid, Uuid)>,
    Json(req): Json<NoteUpdateRequest>,
) -> Result<Json<Note>, AppError> {
    let errors = validate_note_content(&req.content);
    if !errors.is_empty() {
        return Err(AppError::Validation(errors.join("; ")));
    }
    let note = state
        .store
        .update_note(candidate_id, note_id, req.content)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Note {note_id} not found")))?;
    Ok(Json(note))
}

/// DELETE /api/v1/candidates/:id/notes/:note_id
pub async fn handle_delete_note(
    State(state): State<AppState>,
    Path((candidate_id, note_id)): Path<(Uuid, Uuid)>,
) -> Result<StatusCode, AppError> {
    state
        .store
        .delete_note(candidate_id, note_id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Note {note_id} not found")))?;
    Ok(StatusCode::NO_CONTENT)
}

// ────────────────────────────────────────────────────────────────────────────
// Scores
// ────────────────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct ScoreForm {
    pub category_id: String,
    pub value: u8,
    #[serde(default)]
    pub comment: Option<String>,
}

/// PUT /api/v1/candidates/:id/scores
///
/// One score per (category, evaluator): re-submitting replaces the previous
/// entry rather than stacking a second opinion from the same person.
pub async fn handle_upsert_score(
    State(state): State<AppState>,
    Path(candidate_id): Path<Uuid>,
    Json(form): Json<ScoreForm>,
) -> Result<Json<Score>, AppError> {
    let errors = validate_score(&form.category_id, form.value);
    if !errors.is_empty() {
        return Err(AppError::Validation(errors.join("; ")));
    }
    let category = score_category(&form.category_id)
        .ok_or_else(|| AppError::Validation("Category is required".to_string()))?;

    let evaluator = current_user();
    let score = Score {
        id: Uuid::new_v4(),
        candidate_id,
        category_id: category.id.to_string(),
        category_name: category.name.to_string(),
        value: form.value.min(category.max_score),
        max_value: category.max_score,
        evaluator_id: evaluator.id,
        evaluator_name: evaluator.name,
        comment: form.comment,
        created_at: Utc::now(),
    };
    let score = state
        .store
        .upsert_score(candidate_id, score)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Candidate {candidate_id} not found")))?;
    Ok(Json(score))
}

// ────────────────────────────────────────────────────────────────────────────
// Static pipeline data
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/stages
pub async fn handle_list_stages() -> Json<Vec<StageInfo>> {
    Json(Stage::ALL.iter().map(|s| s.info()).collect())
}

/// GET /api/v1/score-categories
pub async fn handle_list_score_categories() -> Json<&'static [ScoreCategory]> {
    Json(SCORE_CATEGORIES)
}
