//! In-memory data store: two RwLock'd maps, no persistence across restarts.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::candidate::{Candidate, Note, Score};
use crate::models::role::{Role, RoleStatus};
use crate::models::stage::Stage;
use crate::store::{CandidatePatch, DataStore, RolePatch};

#[derive(Default)]
pub struct InMemoryStore {
    roles: RwLock<HashMap<Uuid, Role>>,
    candidates: RwLock<HashMap<Uuid, Candidate>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DataStore for InMemoryStore {
    async fn list_roles(&self) -> Vec<Role> {
        let roles = self.roles.read().await;
        let mut all: Vec<Role> = roles.values().cloned().collect();
        all.sort_by_key(|r| r.created_at);
        all
    }

    async fn get_role(&self, id: Uuid) -> Option<Role> {
        self.roles.read().await.get(&id).cloned()
    }

    async fn list_open_roles(&self) -> Vec<Role> {
        let mut open = self.list_roles().await;
        open.retain(|r| r.status == RoleStatus::Open);
        open
    }

    async fn create_role(&self, role: Role) -> Role {
        self.roles.write().await.insert(role.id, role.clone());
        role
    }

    async fn update_role(&self, id: Uuid, patch: RolePatch) -> Option<Role> {
        let mut roles = self.roles.write().await;
        let role = roles.get_mut(&id)?;
        if let Some(title) = patch.title {
            role.title = title;
        }
        if let Some(department) = patch.department {
            role.department = department;
        }
        if let Some(location) = patch.location {
            role.location = location;
        }
        if let Some(employment_type) = patch.employment_type {
            role.employment_type = employment_type;
        }
        if let Some(description) = patch.description {
            role.description = description;
        }
        if let Some(requirements) = patch.requirements {
            role.requirements = requirements;
        }
        if let Some(salary) = patch.salary {
            role.salary = Some(salary);
        }
        if let Some(status) = patch.status {
            role.status = status;
        }
        if let Some(questions) = patch.questions {
            role.questions = questions;
        }
        role.updated_at = Utc::now();
        Some(role.clone())
    }

    async fn list_candidates(&self) -> Vec<Candidate> {
        let candidates = self.candidates.read().await;
        let mut all: Vec<Candidate> = candidates.values().cloned().collect();
        all.sort_by_key(|c| c.applied_at);
        all
    }

    async fn get_candidate(&self, id: Uuid) -> Option<Candidate> {
        self.candidates.read().await.get(&id).cloned()
    }

    async fn list_candidates_by_role(&self, role_id: Uuid) -> Vec<Candidate> {
        let mut all = self.list_candidates().await;
        all.retain(|c| c.role_id == role_id);
        all
    }

    async fn list_candidates_by_stage(&self, stage: Stage) -> Vec<Candidate> {
        let mut all = self.list_candidates().await;
        all.retain(|c| c.stage == stage);
        all
    }

    async fn create_candidate(&self, candidate: Candidate) -> Candidate {
        self.candidates
            .write()
            .await
            .insert(candidate.id, candidate.clone());
        candidate
    }

    async fn update_candidate(&self, id: Uuid, patch: CandidatePatch) -> Option<Candidate> {
        let mut candidates = self.candidates.write().await;
        let candidate = candidates.get_mut(&id)?;
        if let Some(phone) = patch.phone {
            candidate.phone = Some(phone);
        }
        if let Some(linked_in) = patch.linked_in {
            candidate.linked_in = Some(linked_in);
        }
        if let Some(portfolio) = patch.portfolio {
            candidate.portfolio = Some(portfolio);
        }
        if let Some(resume_url) = patch.resume_url {
            candidate.resume_url = Some(resume_url);
        }
        if let Some(cover_letter) = patch.cover_letter {
            candidate.cover_letter = Some(cover_letter);
        }
        if let Some(tags) = patch.tags {
            candidate.tags = tags;
        }
        candidate.updated_at = Utc::now();
        Some(candidate.clone())
    }

    async fn set_candidate_stage(&self, id: Uuid, stage: Stage) -> Option<Candidate> {
        let mut candidates = self.candidates.write().await;
        let candidate = candidates.get_mut(&id)?;
        candidate.stage = stage;
        candidate.updated_at = Utc::now();
        Some(candidate.clone())
    }

    async fn add_note(&self, candidate_id: Uuid, note: Note) -> Option<Note> {
        let mut candidates = self.candidates.write().await;
        let candidate = candidates.get_mut(&candidate_id)?;
        candidate.notes.push(note.clone());
        candidate.updated_at = Utc::now();
        Some(note)
    }

    async fn update_note(
        &self,
        candidate_id: Uuid,
        note_id: Uuid,
        content: String,
    ) -> Option<Note> {
        let mut candidates = self.candidates.write().await;
        let candidate = candidates.get_mut(&candidate_id)?;
        let note = candidate.notes.iter_mut().find(|n| n.id == note_id)?;
        note.content = content;
        note.updated_at = Utc::now();
        Some(note.clone())
    }

    async fn delete_note(&self, candidate_id: Uuid, note_id: Uuid) -> Option<()> {
        let mut candidates = self.candidates.write().await;
        let candidate = candidates.get_mut(&candidate_id)?;
        let before = candidate.notes.len();
        candidate.notes.retain(|n| n.id != note_id);
        (candidate.notes.len() < before).then_some(())
    }

    async fn upsert_score(&self, candidate_id: Uuid, score: Score) -> Option<Score> {
        let mut candidates = self.candidates.write().await;
        let candidate = candidates.get_mut(&candidate_id)?;
        let existing = candidate.scores.iter_mut().find(|s| {
            s.category_id == score.category_id && s.evaluator_id == score.evaluator_id
        });
        match existing {
            Some(slot) => *slot = score.clone(),
            None => candidate.scores.push(score.clone()),
        }
        candidate.updated_at = Utc::now();
        Some(score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::candidate::score_category;
    use crate::models::role::EmploymentType;
    use crate::models::user::current_user;

    fn make_role(status: RoleStatus) -> Role {
        let now = Utc::now();
        Role {
            id: Uuid::new_v4(),
            title: "Campaign Manager".to_string(),
            department: "Marketing".to_string(),
            location: "Remote".to_string(),
            employment_type: EmploymentType::FullTime,
            description: "Run our campaigns.".to_string(),
            requirements: vec!["3+ years campaign experience".to_string()],
            salary: None,
            status,
            questions: vec![],
            created_at: now,
            updated_at: now,
        }
    }

    fn make_candidate(role_id: Uuid) -> Candidate {
        let now = Utc::now();
        Candidate {
            id: Uuid::new_v4(),
            role_id,
            first_name: "Priya".to_string(),
            last_name: "Patel".to_string(),
            email: "priya@example.com".to_string(),
            phone: None,
            linked_in: None,
            portfolio: None,
            resume_url: None,
            cover_letter: None,
            question_answers: vec![],
            stage: Stage::Applied,
            applied_at: now,
            updated_at: now,
            notes: vec![],
            scores: vec![],
            tags: vec![],
        }
    }

    fn make_note(candidate_id: Uuid, content: &str) -> Note {
        let now = Utc::now();
        let author = current_user();
        Note {
            id: Uuid::new_v4(),
            candidate_id,
            author_id: author.id,
            author_name: author.name,
            content: content.to_string(),
            note_type: Default::default(),
            created_at: now,
            updated_at: now,
        }
    }

    fn make_score(candidate_id: Uuid, category_id: &str, value: u8) -> Score {
        let category = score_category(category_id).unwrap();
        let evaluator = current_user();
        Score {
            id: Uuid::new_v4(),
            candidate_id,
            category_id: category.id.to_string(),
            category_name: category.name.to_string(),
            value,
            max_value: category.max_score,
            evaluator_id: evaluator.id,
            evaluator_name: evaluator.name,
            comment: None,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_create_and_get_role() {
        let store = InMemoryStore::new();
        let role = store.create_role(make_role(RoleStatus::Open)).await;
        let fetched = store.get_role(role.id).await.unwrap();
        assert_eq!(fetched.title, "Campaign Manager");
    }

    #[tokio::test]
    async fn test_open_roles_excludes_draft_and_closed() {
        let store = InMemoryStore::new();
        store.create_role(make_role(RoleStatus::Open)).await;
        store.create_role(make_role(RoleStatus::Draft)).await;
        store.create_role(make_role(RoleStatus::Closed)).await;
        assert_eq!(store.list_open_roles().await.len(), 1);
        assert_eq!(store.list_roles().await.len(), 3);
    }

    #[tokio::test]
    async fn test_update_role_patches_only_given_fields() {
        let store = InMemoryStore::new();
        let role = store.create_role(make_role(RoleStatus::Draft)).await;
        let updated = store
            .update_role(
                role.id,
                RolePatch {
                    status: Some(RoleStatus::Open),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.status, RoleStatus::Open);
        assert_eq!(updated.title, role.title);
        assert!(updated.updated_at >= role.updated_at);
    }

    #[tokio::test]
    async fn test_update_unknown_role_returns_none() {
        let store = InMemoryStore::new();
        let result = store.update_role(Uuid::new_v4(), RolePatch::default()).await;
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_candidate_filters_by_role_and_stage() {
        let store = InMemoryStore::new();
        let role_a = store.create_role(make_role(RoleStatus::Open)).await;
        let role_b = store.create_role(make_role(RoleStatus::Open)).await;
        let c1 = store.create_candidate(make_candidate(role_a.id)).await;
        store.create_candidate(make_candidate(role_b.id)).await;
        store.set_candidate_stage(c1.id, Stage::Interview).await;

        assert_eq!(store.list_candidates_by_role(role_a.id).await.len(), 1);
        assert_eq!(store.list_candidates_by_stage(Stage::Interview).await.len(), 1);
        assert_eq!(store.list_candidates_by_stage(Stage::Applied).await.len(), 1);
    }

    #[tokio::test]
    async fn test_stage_move_bumps_updated_at() {
        let store = InMemoryStore::new();
        let role = store.create_role(make_role(RoleStatus::Open)).await;
        let candidate = store.create_candidate(make_candidate(role.id)).await;
        let moved = store
            .set_candidate_stage(candidate.id, Stage::Offer)
            .await
            .unwrap();
        assert_eq!(moved.stage, Stage::Offer);
        assert!(moved.updated_at >= candidate.updated_at);
    }

    #[tokio::test]
    async fn test_note_lifecycle() {
        let store = InMemoryStore::new();
        let role = store.create_role(make_role(RoleStatus::Open)).await;
        let candidate = store.create_candidate(make_candidate(role.id)).await;

        let note = store
            .add_note(candidate.id, make_note(candidate.id, "Strong portfolio"))
            .await
            .unwrap();
        let updated = store
            .update_note(candidate.id, note.id, "Strong portfolio, invite".to_string())
            .await
            .unwrap();
        assert_eq!(updated.content, "Strong portfolio, invite");

        assert!(store.delete_note(candidate.id, note.id).await.is_some());
        assert!(store.delete_note(candidate.id, note.id).await.is_none());
        let fetched = store.get_candidate(candidate.id).await.unwrap();
        assert!(fetched.notes.is_empty());
    }

    #[tokio::test]
    async fn test_score_upsert_replaces_same_category_and_evaluator() {
        let store = InMemoryStore::new();
        let role = store.create_role(make_role(RoleStatus::Open)).await;
        let candidate = store.create_candidate(make_candidate(role.id)).await;

        store
            .upsert_score(candidate.id, make_score(candidate.id, "cat-1", 3))
            .await
            .unwrap();
        store
            .upsert_score(candidate.id, make_score(candidate.id, "cat-1", 5))
            .await
            .unwrap();
        store
            .upsert_score(candidate.id, make_score(candidate.id, "cat-2", 4))
            .await
            .unwrap();

        let fetched = store.get_candidate(candidate.id).await.unwrap();
        assert_eq!(fetched.scores.len(), 2);
        let technical = fetched
            .scores
            .iter()
            .find(|s| s.category_id == "cat-1")
            .unwrap();
        assert_eq!(technical.value, 5);
    }

    #[tokio::test]
    async fn test_note_for_unknown_candidate_returns_none() {
        let store = InMemoryStore::new();
        let orphan = Uuid::new_v4();
        assert!(store
            .add_note(orphan, make_note(orphan, "lost"))
            .await
            .is_none());
    }
}
