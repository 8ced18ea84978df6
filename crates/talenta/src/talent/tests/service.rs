use super::common::*;
use std::sync::Arc;

use crate::talent::domain::{StaffRole, UserId};
use crate::talent::{TalentError, TalentService};

#[test]
fn initialization_seeds_catalog_users_once() {
    let (service, repository) = build_service();

    let profiles = service.profiles().expect("profiles listed");
    assert_eq!(profiles.len(), 4);

    // A second service over the same repository must not clobber edits.
    service
        .apply_training_completion(&UserId("user-001".to_string()), "train-001")
        .expect("completion succeeds");
    let service = TalentService::new(repository).expect("re-init succeeds");
    let profile = service
        .profile(&UserId("user-001".to_string()))
        .expect("profile exists");
    assert!(profile.has_completed("train-001"));
}

#[test]
fn seed_defaults_apply_to_sparse_records() {
    let (service, _) = build_service();

    // user-004 has no competencies or merit in the catalog.
    let profile = service
        .profile(&UserId("user-004".to_string()))
        .expect("profile exists");
    assert_eq!(profile.competencies, seed_competencies());
    assert_eq!(profile.merit_score, 70);
}

#[test]
fn reset_user_reseeds_on_next_read() {
    let (service, _) = build_service();
    let user = UserId("user-001".to_string());

    service
        .apply_training_completion(&user, "train-001")
        .expect("completion succeeds");
    service.reset_user(&user).expect("reset succeeds");

    let profile = service.profile(&user).expect("re-seeded profile");
    assert!(profile.training_completed.is_empty());
    assert!(profile.certifications_earned.is_empty());
    assert_eq!(profile.competencies, seed_competencies());
    assert_eq!(profile.merit_score, 70);
}

#[test]
fn unknown_profile_lookup_fails_softly_per_operation() {
    let (service, _) = build_service();
    let ghost = UserId("user-404".to_string());

    let err = service
        .merit_breakdown(&ghost)
        .expect_err("breakdown requires a profile");
    assert!(matches!(err, TalentError::ProfileNotFound(_)));

    // The career path degrades instead of erroring.
    let recommendation = service.career_recommendation(&ghost);
    assert_eq!(recommendation.match_percentage, 40);
}

#[test]
fn career_recommendation_survives_repository_outage() {
    let service =
        TalentService::with_store(crate::talent::ProfileStore::new(Arc::new(UnavailableRepository)));
    let recommendation = service.career_recommendation(&UserId("user-001".to_string()));
    assert_eq!(recommendation.match_percentage, 40);
}

#[test]
fn merit_board_ranks_candidates_and_excludes_committee() {
    let (service, _) = build_service();

    let board = service.merit_board().expect("board listed");
    assert_eq!(board.len(), 3);
    assert!(board.windows(2).all(|w| w[0].merit_score >= w[1].merit_score));

    let profiles = service.profiles().expect("profiles listed");
    let committee: Vec<_> = profiles
        .iter()
        .filter(|p| p.role == StaffRole::Committee)
        .collect();
    assert_eq!(committee.len(), 1);
    assert!(!board.iter().any(|c| c.id == committee[0].id));
}

#[test]
fn merit_board_reflects_training_updates() {
    let (service, _) = build_service();
    let user = UserId("user-001".to_string());

    service
        .apply_training_completion(&user, "train-002")
        .expect("completion succeeds");

    let board = service.merit_board().expect("board listed");
    let candidate = board.iter().find(|c| c.id == user).expect("on the board");
    assert_eq!(candidate.training_completed, 1);
    assert_eq!(candidate.learning_agility, 80);
}
