use super::common::*;

use crate::talent::career::{default_recommendation, recommend};
use crate::talent::domain::{CompetencyAxis, TrainingId};

#[test]
fn gaps_are_sorted_largest_first() {
    let profile = staff_profile("gaps", seed_competencies());
    let recommendation = recommend(&profile);

    let gap_sizes: Vec<u8> = recommendation.gaps.iter().map(|g| g.gap).collect();
    assert_eq!(gap_sizes, vec![35, 20, 15, 10, 5]);

    let axes: Vec<CompetencyAxis> = recommendation
        .gaps
        .iter()
        .map(|g| g.competency)
        .collect();
    assert_eq!(
        axes,
        vec![
            CompetencyAxis::Leadership,
            CompetencyAxis::Analytics,
            CompetencyAxis::Digital,
            CompetencyAxis::Technical,
            CompetencyAxis::Communication,
        ]
    );
}

#[test]
fn only_gaps_above_twenty_are_critical() {
    let profile = staff_profile("critical", seed_competencies());
    let recommendation = recommend(&profile);

    for gap in &recommendation.gaps {
        assert_eq!(gap.critical, gap.gap > 20, "gap {:?}", gap.competency);
    }
    // The analytics gap is exactly 20 and must not be critical.
    let analytics = recommendation
        .gaps
        .iter()
        .find(|g| g.competency == CompetencyAxis::Analytics)
        .expect("analytics gap present");
    assert!(!analytics.critical);
}

#[test]
fn match_percentage_and_heuristics_follow_formulas() {
    let profile = staff_profile("match", seed_competencies());
    let recommendation = recommend(&profile);

    // avg current 64, avg required 81 -> 79%.
    assert_eq!(recommendation.match_percentage, 79);
    // total gap 85 -> mid timeline band.
    assert_eq!(recommendation.timeline, "18-24 months");
    // No trainings completed yet.
    assert_eq!(recommendation.confidence, 0.75);
    // min(95, round(70 + 79*0.2)) = 86.
    assert_eq!(recommendation.success_rate, 86);
}

#[test]
fn action_plan_ends_with_mentorship() {
    let profile = staff_profile("plan", seed_competencies());
    let recommendation = recommend(&profile);

    let last = recommendation.action_plan.last().expect("plan not empty");
    assert_eq!(last.action, "Connect with senior leadership mentor");
    assert_eq!(last.step, recommendation.action_plan.len());

    // All three training steps plus projects plus mentorship.
    assert_eq!(recommendation.action_plan.len(), 5);
    assert!(recommendation
        .action_plan
        .iter()
        .any(|step| step.action == "Lead 2 cross-functional projects"));
}

#[test]
fn completed_trainings_are_skipped_in_plan() {
    let mut profile = staff_profile("skip", seed_competencies());
    profile
        .training_completed
        .push(TrainingId("train-001".to_string()));

    let recommendation = recommend(&profile);
    assert!(!recommendation
        .action_plan
        .iter()
        .any(|step| step.action.contains("Leadership Essentials")));
    // Leadership gap remains, so the projects step survives.
    assert!(recommendation
        .action_plan
        .iter()
        .any(|step| step.action == "Lead 2 cross-functional projects"));
}

#[test]
fn raising_a_competency_never_worsens_its_gap_or_match() {
    let mut profile = staff_profile("monotone", seed_competencies());
    let before = recommend(&profile);

    profile.competencies.analytics = 90;
    let after = recommend(&profile);

    assert!(after.match_percentage >= before.match_percentage);
    assert!(!after
        .gaps
        .iter()
        .any(|g| g.competency == CompetencyAxis::Analytics));
}

#[test]
fn met_requirements_produce_no_gaps() {
    let mut profile = staff_profile("senior", seed_competencies());
    profile.competencies.technical = 90;
    profile.competencies.leadership = 90;
    profile.competencies.analytics = 95;
    profile.competencies.communication = 80;
    profile.competencies.digital = 80;

    let recommendation = recommend(&profile);
    assert!(recommendation.gaps.is_empty());
    assert_eq!(recommendation.timeline, "12-18 months");
    // Only the mentorship step remains.
    assert_eq!(recommendation.action_plan.len(), 1);
}

#[test]
fn default_recommendation_matches_fallback_contract() {
    let recommendation = default_recommendation();
    assert_eq!(recommendation.next_role, "Senior Analyst");
    assert_eq!(recommendation.match_percentage, 40);
    assert_eq!(recommendation.gaps.len(), 2);
    assert_eq!(recommendation.action_plan.len(), 3);
    assert_eq!(recommendation.success_rate, 78);
    assert!((recommendation.confidence - 0.87).abs() < f64::EPSILON);
}
