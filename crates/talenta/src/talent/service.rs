use std::sync::Arc;

use chrono::Utc;
use serde::Serialize;

use super::career::{self, CareerRecommendation};
use super::catalog;
use super::domain::{CandidateRecord, CertificateRef, TrainingId, UserId, UserProfile};
use super::fraud::{self, FraudCheckReport};
use super::merit::{self, MeritBreakdown};
use super::repository::{ProfileRepository, RepositoryError};
use super::store::ProfileStore;

/// Service composing the profile store with the scoring, career, and fraud
/// engines. All operations are synchronous transformations over explicit
/// data; the store is the only mutable state.
pub struct TalentService<R> {
    store: ProfileStore<R>,
}

/// Result of a training completion: the persisted profile plus, on first
/// completion, the minted certificate reference.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrainingCompletion {
    pub profile: UserProfile,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certificate: Option<CertificateRef>,
}

impl<R: ProfileRepository> TalentService<R> {
    /// Builds the service and seeds the store from the static catalog.
    pub fn new(repository: Arc<R>) -> Result<Self, TalentError> {
        let store = ProfileStore::new(repository);
        store.initialize()?;
        Ok(Self { store })
    }

    #[cfg(test)]
    pub(crate) fn with_store(store: ProfileStore<R>) -> Self {
        Self { store }
    }

    pub fn profile(&self, user_id: &UserId) -> Result<UserProfile, TalentError> {
        self.store
            .get(user_id)?
            .ok_or_else(|| TalentError::ProfileNotFound(user_id.0.clone()))
    }

    pub fn profiles(&self) -> Result<Vec<UserProfile>, TalentError> {
        Ok(self.store.get_all()?)
    }

    /// Explanatory merit breakdown for committee displays.
    pub fn merit_breakdown(&self, user_id: &UserId) -> Result<MeritBreakdown, TalentError> {
        let profile = self.profile(user_id)?;
        Ok(merit::merit_breakdown(&profile, Utc::now()))
    }

    /// Applies a training completion to the stored profile.
    ///
    /// Membership is checked before any delta is applied, so re-applying the
    /// same training returns the profile unchanged: no double deltas, no
    /// duplicate certification entries, no merit drift.
    pub fn apply_training_completion(
        &self,
        user_id: &UserId,
        training_id: &str,
    ) -> Result<TrainingCompletion, TalentError> {
        let mut profile = self.profile(user_id)?;

        if profile.has_completed(training_id) {
            return Ok(TrainingCompletion {
                profile,
                certificate: None,
            });
        }

        // Unknown trainings carry no deltas but still count as completed.
        let program = catalog::training_program(training_id);
        if let Some(program) = program {
            for (axis, delta) in program.deltas {
                profile.competencies.raise(*axis, *delta);
            }
        }

        profile
            .training_completed
            .push(TrainingId(training_id.to_string()));
        profile.certifications_earned.push(
            program
                .map(|p| p.name.to_string())
                .unwrap_or_else(|| training_id.to_string()),
        );

        let previous = profile.merit_score;
        profile.merit_score =
            merit::simple_merit_score(&profile.competencies, profile.training_completed.len());
        profile.merit_change = i16::from(profile.merit_score) - i16::from(previous);
        profile.last_updated = Utc::now();

        self.store.save(profile.clone())?;

        let certificate = CertificateRef::mint(&profile.id, training_id, profile.last_updated);
        Ok(TrainingCompletion {
            profile,
            certificate: Some(certificate),
        })
    }

    /// Career recommendation; never errors. A missing profile (or an
    /// unavailable repository) degrades to the default recommendation.
    pub fn career_recommendation(&self, user_id: &UserId) -> CareerRecommendation {
        match self.store.get(user_id) {
            Ok(Some(profile)) => career::recommend(&profile),
            Ok(None) | Err(_) => career::default_recommendation(),
        }
    }

    /// Runs the anomaly checklist over a caller-supplied candidate record.
    pub fn fraud_checklist(&self, candidate: &CandidateRecord) -> FraudCheckReport {
        fraud::generate_checklist(candidate, Utc::now())
    }

    /// Merit-board listing: staff and supervisor candidates, highest merit
    /// first.
    pub fn merit_board(&self) -> Result<Vec<CandidateRecord>, TalentError> {
        let mut candidates: Vec<CandidateRecord> = self
            .store
            .get_all()?
            .iter()
            .filter(|profile| profile.role.is_candidate())
            .map(CandidateRecord::from_profile)
            .collect();
        candidates.sort_by(|a, b| b.merit_score.cmp(&a.merit_score));
        Ok(candidates)
    }

    /// Deletes the user's stored profile; the next read re-seeds it.
    pub fn reset_user(&self, user_id: &UserId) -> Result<(), TalentError> {
        Ok(self.store.reset_user(user_id)?)
    }
}

/// Error raised by the talent service. Profile lookups are the only domain
/// failure; everything else degrades by defaulting.
#[derive(Debug, thiserror::Error)]
pub enum TalentError {
    #[error("profile '{0}' not found")]
    ProfileNotFound(String),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
