pub mod memory;

use async_trait::async_trait;
use serde::Deserialize;
use uuid::Uuid;

use crate::models::candidate::{Candidate, Note, Score};
use crate::models::role::{ApplicationQuestion, EmploymentType, Role, RoleStatus, SalaryRange};
use crate::models::stage::Stage;

/// Partial update for a role. `None` fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RolePatch {
    pub title: Option<String>,
    pub department: Option<String>,
    pub location: Option<String>,
    pub employment_type: Option<EmploymentType>,
    pub description: Option<String>,
    pub requirements: Option<Vec<String>>,
    pub salary: Option<SalaryRange>,
    pub status: Option<RoleStatus>,
    pub questions: Option<Vec<ApplicationQuestion>>,
}

/// Partial update for a candidate's own profile fields. Stage moves, notes,
/// and scores have dedicated operations.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CandidatePatch {
    pub phone: Option<String>,
    pub linked_in: Option<String>,
    pub portfolio: Option<String>,
    pub resume_url: Option<String>,
    pub cover_letter: Option<String>,
    pub tags: Option<Vec<String>>,
}

/// The data store seam. Implement this to swap backends without touching
/// handler code; the default backend is `memory::InMemoryStore`.
///
/// Operations return `None` for unknown ids; handlers translate that into
/// 404s. Every mutation bumps the touched record's `updated_at`.
///
/// Carried in `AppState` as `Arc<dyn DataStore>`.
#[async_trait]
pub trait DataStore: Send + Sync {
    async fn list_roles(&self) -> Vec<Role>;
    async fn get_role(&self, id: Uuid) -> Option<Role>;
    async fn list_open_roles(&self) -> Vec<Role>;
    async fn create_role(&self, role: Role) -> Role;
    async fn update_role(&self, id: Uuid, patch: RolePatch) -> Option<Role>;

    async fn list_candidates(&self) -> Vec<Candidate>;
    async fn get_candidate(&self, id: Uuid) -> Option<Candidate>;
    async fn list_candidates_by_role(&self, role_id: Uuid) -> Vec<Candidate>;
    async fn list_candidates_by_stage(&self, stage: Stage) -> Vec<Candidate>;
    async fn create_candidate(&self, candidate: Candidate) -> Candidate;
    async fn update_candidate(&self, id: Uuid, patch: CandidatePatch) -> Option<Candidate>;
    async fn set_candidate_stage(&self, id: Uuid, stage: Stage) -> Option<Candidate>;

    async fn add_note(&self, candidate_id: Uuid, note: Note) -> Option<Note>;
    async fn update_note(&self, candidate_id: Uuid, note_id: Uuid, content: String)
        -> Option<Note>;
    async fn delete_note(&self, candidate_id: Uuid, note_id: Uuid) -> Option<()>;

    /// Inserts the score, replacing any previous entry by the same evaluator
    /// for the same category.
    async fn upsert_score(&self, candidate_id: Uuid, score: Score) -> Option<Score>;
}
