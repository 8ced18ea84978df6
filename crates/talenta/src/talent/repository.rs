use super::domain::{UserId, UserProfile};

/// Storage abstraction so the store and service can be exercised in
/// isolation. Implementations live with the hosting process (in-memory for
/// the demo API and tests; any keyed store in a real deployment).
pub trait ProfileRepository: Send + Sync {
    fn get(&self, id: &UserId) -> Result<Option<UserProfile>, RepositoryError>;
    fn save(&self, profile: UserProfile) -> Result<(), RepositoryError>;
    fn delete(&self, id: &UserId) -> Result<(), RepositoryError>;
    fn list(&self) -> Result<Vec<UserProfile>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}
