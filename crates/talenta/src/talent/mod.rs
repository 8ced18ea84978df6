//! Talent management core: profile store, merit scoring, competency updates,
//! career gap analysis, and the anomaly checklist.
//!
//! Everything here is a synchronous pure transformation over explicit data;
//! the only mutable state is the injected [`ProfileRepository`]. UI and
//! transport layers are external collaborators calling through
//! [`TalentService`] or the HTTP router.

pub mod career;
pub mod catalog;
pub mod domain;
pub mod fraud;
pub mod merit;
pub mod repository;
pub mod router;
pub mod service;
pub mod store;

#[cfg(test)]
mod tests;

pub use career::{ActionStep, CareerGap, CareerRecommendation};
pub use domain::{
    CandidateRecord, CertificateRef, Competencies, CompetencyAxis, StaffRole, TrainingId, UserId,
    UserProfile,
};
pub use fraud::{CheckStatus, FraudCheckItem, FraudCheckReport, Severity};
pub use merit::{BiasCheck, MeritBreakdown, MeritComponent};
pub use repository::{ProfileRepository, RepositoryError};
pub use router::talent_router;
pub use service::{TalentError, TalentService, TrainingCompletion};
pub use store::ProfileStore;
