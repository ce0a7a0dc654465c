pub mod health;

use axum::{
    routing::{delete, get, patch, post, put},
    Router,
};

use crate::assistant::handlers as assistant;
use crate::decoder::handlers as decoder;
use crate::email::handlers as email;
use crate::pipeline::handlers as pipeline;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Inclusivity analyzer
        .route("/api/v1/decoder/analyze", post(decoder::handle_analyze))
        // Roles
        .route("/api/v1/roles", get(pipeline::handle_list_roles))
        .route("/api/v1/roles", post(pipeline::handle_create_role))
        .route("/api/v1/roles/open", get(pipeline::handle_open_roles))
        .route("/api/v1/roles/:id", get(pipeline::handle_get_role))
        .route("/api/v1/roles/:id", patch(pipeline::handle_update_role))
        .route("/api/v1/roles/:id/apply", post(pipeline::handle_apply))
        // Candidates
        .route("/api/v1/candidates", get(pipeline::handle_list_candidates))
        .route("/api/v1/candidates/:id", get(pipeline::handle_get_candidate))
        .route(
            "/api/v1/candidates/:id",
            patch(pipeline::handle_update_candidate),
        )
        .route(
            "/api/v1/candidates/:id/stage",
            patch(pipeline::handle_set_stage),
        )
        // Notes
        .route(
            "/api/v1/candidates/:id/notes",
            post(pipeline::handle_add_note),
        )
        .route(
            "/api/v1/candidates/:id/notes/:note_id",
            patch(pipeline::handle_update_note),
        )
        .route(
            "/api/v1/candidates/:id/notes/:note_id",
            delete(pipeline::handle_delete_note),
        )
        // Scores
        .route(
            "/api/v1/candidates/:id/scores",
            put(pipeline::handle_upsert_score),
        )
        // Static pipeline data
        .route("/api/v1/stages", get(pipeline::handle_list_stages))
        .route(
            "/api/v1/score-categories",
            get(pipeline::handle_list_score_categories),
        )
        // Email templates
        .route("/api/v1/email-templates", get(email::handle_list_templates))
        .route(
            "/api/v1/candidates/:id/email-preview/:stage",
            get(email::handle_preview),
        )
        // Assistant (simulated)
        .route(
            "/api/v1/assistant/job-description",
            post(assistant::handle_job_description),
        )
        .route(
            "/api/v1/candidates/:id/summary",
            post(assistant::handle_summarize_notes),
        )
        .with_state(state)
}
