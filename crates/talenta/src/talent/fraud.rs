//! Rule-based anomaly checklist for merit-board candidates.
//!
//! Eight independent heuristic checks, each emitting at most one item for
//! human review. The output is a recommendation list, not an automated
//! accusation: items carry a severity and a verification step, and the
//! report never mutates candidate data.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::CandidateRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    pub const fn label(self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckStatus {
    Normal,
    Review,
    Suspicious,
}

/// One flagged data point for committee review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FraudCheckItem {
    pub category: &'static str,
    pub concern: &'static str,
    pub severity: Severity,
    pub recommendation: &'static str,
    pub data_point: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_range: Option<&'static str>,
    pub status: CheckStatus,
}

/// Aggregated checklist for one candidate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FraudCheckReport {
    pub user_id: String,
    pub user_name: String,
    pub checked_at: DateTime<Utc>,
    pub overall_risk: Severity,
    pub items_to_review: Vec<FraudCheckItem>,
    pub summary: String,
}

/// Runs the full checklist. Deterministic given the candidate record; checks
/// are independent and run in fixed order, so toggling one input only ever
/// adds or removes that check's item.
pub fn generate_checklist(candidate: &CandidateRecord, checked_at: DateTime<Utc>) -> FraudCheckReport {
    let mut items = Vec::new();

    // Check 1: training completion volume.
    let training_count = candidate.training_completed;
    if training_count > 10 {
        items.push(FraudCheckItem {
            category: "Training History",
            concern: "Unusually high number of completed trainings",
            severity: Severity::Medium,
            recommendation:
                "Verify completion dates and durations. Check whether the trainings were completed in a realistic timeframe.",
            data_point: format!("{training_count} trainings completed"),
            expected_range: Some("1-8 trainings per year is typical"),
            status: CheckStatus::Review,
        });
    } else if training_count == 0 {
        items.push(FraudCheckItem {
            category: "Training History",
            concern: "No completed trainings on record",
            severity: Severity::Low,
            recommendation:
                "Check whether the candidate holds external certifications or completed training outside the system.",
            data_point: format!("{training_count} trainings"),
            expected_range: None,
            status: CheckStatus::Normal,
        });
    }

    // Check 2: merit score alignment with component scores.
    let merit = candidate.merit_score;
    let competency_match = candidate.competency_match;
    let performance = candidate.performance;
    if merit > 90 && (competency_match < 70 || performance < 70) {
        items.push(FraudCheckItem {
            category: "Score Consistency",
            concern: "High merit score but low component scores",
            severity: Severity::High,
            recommendation:
                "Review how the merit score was calculated. Verify all input data sources.",
            data_point: format!(
                "Merit: {merit}, Competency: {competency_match}, Performance: {performance}"
            ),
            expected_range: Some("Components should align with the total score"),
            status: CheckStatus::Suspicious,
        });
    }

    // Check 3: rapid advancement relative to tenure.
    if candidate.tenure_years < 3 && merit > 85 {
        items.push(FraudCheckItem {
            category: "Career Progression",
            concern: "High merit score with a short tenure",
            severity: Severity::Medium,
            recommendation:
                "Verify prior experience and qualifications. Check for special circumstances.",
            data_point: format!(
                "{} years of tenure, merit score {merit}",
                candidate.tenure_years
            ),
            expected_range: Some("5+ years is typical for merit scores of 85+"),
            status: CheckStatus::Review,
        });
    }

    // Check 4: 360 feedback alignment.
    let feedback360 = candidate.feedback360;
    if feedback360.abs_diff(performance) > 20 {
        items.push(FraudCheckItem {
            category: "Feedback Consistency",
            concern: "Large spread between 360 feedback and performance score",
            severity: Severity::Medium,
            recommendation:
                "Review the feedback sources. Interview the supervisor and peers to understand the difference.",
            data_point: format!("360 Feedback: {feedback360}, Performance: {performance}"),
            expected_range: Some("Usually within 15 points of each other"),
            status: CheckStatus::Review,
        });
    }

    // Check 5: learning agility ceiling.
    let learning_agility = candidate.learning_agility;
    if learning_agility > 95 {
        items.push(FraudCheckItem {
            category: "Learning Agility",
            concern: "Exceptionally high learning agility score",
            severity: Severity::Low,
            recommendation:
                "Verify the assessment method. Consider an interview to confirm capability.",
            data_point: format!("{learning_agility}/100"),
            expected_range: Some("60-85 is typical"),
            status: CheckStatus::Review,
        });
    }

    // Check 6: certificate volume.
    let certificate_count = candidate.certifications_earned.len();
    if certificate_count > 5 {
        items.push(FraudCheckItem {
            category: "Certifications",
            concern: "Large number of recorded certifications",
            severity: Severity::Low,
            recommendation:
                "Spot-check 2-3 certificates for authenticity. Verify with the issuing body.",
            data_point: format!("{certificate_count} certificates"),
            expected_range: None,
            status: CheckStatus::Review,
        });
    }

    // Check 7: data completeness. A zero in any key metric counts as missing.
    let has_all_data = merit != 0
        && competency_match != 0
        && performance != 0
        && feedback360 != 0
        && learning_agility != 0;
    if !has_all_data {
        items.push(FraudCheckItem {
            category: "Data Completeness",
            concern: "Key evaluation data is incomplete",
            severity: Severity::High,
            recommendation:
                "Complete all required assessments before making a promotion decision.",
            data_point: "Incomplete profile".to_string(),
            expected_range: None,
            status: CheckStatus::Suspicious,
        });
    }

    // Check 8: supervisor relationship, when documented.
    if candidate.supervisor_id.is_some() {
        items.push(FraudCheckItem {
            category: "Reporting Structure",
            concern: "Verify the supervisor provided an independent assessment",
            severity: Severity::Low,
            recommendation:
                "Interview the supervisor separately to confirm the assessment. Check for conflicts of interest.",
            data_point: "Supervisor relationship documented".to_string(),
            expected_range: None,
            status: CheckStatus::Normal,
        });
    }

    if items.is_empty() {
        items.push(FraudCheckItem {
            category: "Overall Assessment",
            concern: "No significant anomalies detected",
            severity: Severity::Low,
            recommendation: "Profile appears consistent. Standard verification procedures apply.",
            data_point: "All checks passed".to_string(),
            expected_range: None,
            status: CheckStatus::Normal,
        });
    }

    let high_count = items.iter().filter(|i| i.severity == Severity::High).count();
    let medium_count = items
        .iter()
        .filter(|i| i.severity == Severity::Medium)
        .count();

    let overall_risk = if high_count > 0 {
        Severity::High
    } else if medium_count >= 2 {
        Severity::Medium
    } else {
        Severity::Low
    };

    let summary = match overall_risk {
        Severity::Low => format!(
            "Profile appears consistent, with {} item(s) to review as standard procedure.",
            items.len()
        ),
        Severity::Medium => format!(
            "{} item(s) flagged for closer review. Additional verification is recommended.",
            medium_count + high_count
        ),
        Severity::High => format!(
            "{high_count} high-priority item(s) detected. A thorough investigation is recommended before any decision."
        ),
    };

    FraudCheckReport {
        user_id: candidate.id.0.clone(),
        user_name: candidate.name.clone(),
        checked_at,
        overall_risk,
        items_to_review: items,
        summary,
    }
}
