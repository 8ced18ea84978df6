use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::http::StatusCode;
use axum::response::Response;
use chrono::Utc;
use serde_json::Value;

use crate::talent::domain::{
    CandidateRecord, Competencies, StaffRole, UserId, UserProfile,
};
use crate::talent::repository::{ProfileRepository, RepositoryError};
use crate::talent::{talent_router, TalentService};

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    pub(super) records: Arc<Mutex<HashMap<UserId, UserProfile>>>,
}

impl ProfileRepository for MemoryRepository {
    fn get(&self, id: &UserId) -> Result<Option<UserProfile>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn save(&self, profile: UserProfile) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        guard.insert(profile.id.clone(), profile);
        Ok(())
    }

    fn delete(&self, id: &UserId) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        guard.remove(id);
        Ok(())
    }

    fn list(&self) -> Result<Vec<UserProfile>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.values().cloned().collect())
    }
}

pub(super) struct UnavailableRepository;

impl ProfileRepository for UnavailableRepository {
    fn get(&self, _id: &UserId) -> Result<Option<UserProfile>, RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".to_string()))
    }

    fn save(&self, _profile: UserProfile) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".to_string()))
    }

    fn delete(&self, _id: &UserId) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".to_string()))
    }

    fn list(&self) -> Result<Vec<UserProfile>, RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".to_string()))
    }
}

pub(super) fn build_service() -> (TalentService<MemoryRepository>, Arc<MemoryRepository>) {
    let repository = Arc::new(MemoryRepository::default());
    let service = TalentService::new(repository.clone()).expect("service seeds");
    (service, repository)
}

pub(super) fn router_with_service(service: TalentService<MemoryRepository>) -> axum::Router {
    talent_router(Arc::new(service))
}

pub(super) fn seed_competencies() -> Competencies {
    Competencies {
        technical: 70,
        leadership: 50,
        analytics: 70,
        communication: 70,
        digital: 60,
    }
}

pub(super) fn staff_profile(suffix: &str, competencies: Competencies) -> UserProfile {
    UserProfile {
        id: UserId(format!("user-{suffix}")),
        name: format!("Test User {suffix}"),
        role: StaffRole::Staff,
        competencies,
        merit_score: 70,
        merit_change: 0,
        training_completed: Vec::new(),
        certifications_earned: Vec::new(),
        last_updated: Utc::now(),
    }
}

/// A candidate whose values trip none of the eight checks.
pub(super) fn clean_candidate() -> CandidateRecord {
    CandidateRecord {
        id: UserId("cand-001".to_string()),
        name: "Clean Candidate".to_string(),
        merit_score: 80,
        competency_match: 76,
        performance: 74,
        feedback360: 80,
        learning_agility: 78,
        tenure_years: 6,
        training_completed: 3,
        certifications_earned: vec![
            "Leadership Essentials".to_string(),
            "Data Analytics".to_string(),
        ],
        supervisor_id: None,
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

pub(super) fn assert_ok(response: &Response) {
    assert_eq!(response.status(), StatusCode::OK);
}
