use std::sync::Arc;

use chrono::Utc;

use super::catalog::{self, SeedUser};
use super::domain::{Competencies, UserId, UserProfile};
use super::repository::{ProfileRepository, RepositoryError};

/// Competency vector assumed when a seed record omits one.
const DEFAULT_COMPETENCIES: Competencies = Competencies {
    technical: 70,
    leadership: 50,
    analytics: 70,
    communication: 70,
    digital: 60,
};

/// Merit score assumed when a seed record omits one.
const DEFAULT_MERIT_SCORE: u8 = 70;

/// Keyed profile store over an injected repository. Seeds from the static
/// user catalog and re-seeds individual users lazily after a reset.
pub struct ProfileStore<R> {
    repository: Arc<R>,
}

impl<R: ProfileRepository> ProfileStore<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Seeds one profile per catalog user. Idempotent: existing records are
    /// never overwritten, so user edits survive repeated initialization.
    pub fn initialize(&self) -> Result<(), RepositoryError> {
        for seed in catalog::SEED_USERS {
            let id = UserId(seed.id.to_string());
            if self.repository.get(&id)?.is_none() {
                self.repository.save(seed_profile(seed))?;
            }
        }
        Ok(())
    }

    /// Fetches a profile. A miss for a catalog-known user re-seeds that one
    /// record, which is how a reset user reappears with fresh seed data on
    /// the next read.
    pub fn get(&self, id: &UserId) -> Result<Option<UserProfile>, RepositoryError> {
        if let Some(profile) = self.repository.get(id)? {
            return Ok(Some(profile));
        }

        match catalog::seed_user(&id.0) {
            Some(seed) => {
                let profile = seed_profile(seed);
                self.repository.save(profile.clone())?;
                Ok(Some(profile))
            }
            None => Ok(None),
        }
    }

    /// All stored profiles, unordered.
    pub fn get_all(&self) -> Result<Vec<UserProfile>, RepositoryError> {
        self.repository.list()
    }

    /// Whole-record upsert by id.
    pub fn save(&self, profile: UserProfile) -> Result<(), RepositoryError> {
        self.repository.save(profile)
    }

    /// Deletes the stored record only; re-seeding happens lazily on the next
    /// `get`, never inside the reset itself.
    pub fn reset_user(&self, id: &UserId) -> Result<(), RepositoryError> {
        self.repository.delete(id)
    }
}

fn seed_profile(seed: &SeedUser) -> UserProfile {
    UserProfile {
        id: UserId(seed.id.to_string()),
        name: seed.name.to_string(),
        role: seed.role,
        competencies: seed.competencies.unwrap_or(DEFAULT_COMPETENCIES),
        merit_score: seed.merit_score.unwrap_or(DEFAULT_MERIT_SCORE),
        merit_change: 0,
        training_completed: Vec::new(),
        certifications_earned: Vec::new(),
        last_updated: Utc::now(),
    }
}
