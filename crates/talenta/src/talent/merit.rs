//! Merit scoring. Two independent formulas serve different surfaces: the
//! simple weighted score drives live recomputation after training
//! completions, while the breakdown view powers explanatory committee
//! displays. They are not numerically reconciled with each other.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::{Competencies, UserProfile};

const WEIGHT_TECHNICAL: f64 = 0.20;
const WEIGHT_LEADERSHIP: f64 = 0.25;
const WEIGHT_ANALYTICS: f64 = 0.25;
const WEIGHT_COMMUNICATION: f64 = 0.15;
const WEIGHT_DIGITAL: f64 = 0.15;

/// Weighted merit formula used for live recomputes. Training bonus caps at
/// +10 (three points per completed program). The result is not clamped to
/// 100, so a maxed-out profile with trainings can reach 110.
pub fn simple_merit_score(competencies: &Competencies, trainings_completed: usize) -> u8 {
    let weighted = f64::from(competencies.technical) * WEIGHT_TECHNICAL
        + f64::from(competencies.leadership) * WEIGHT_LEADERSHIP
        + f64::from(competencies.analytics) * WEIGHT_ANALYTICS
        + f64::from(competencies.communication) * WEIGHT_COMMUNICATION
        + f64::from(competencies.digital) * WEIGHT_DIGITAL;

    let training_bonus = (trainings_completed * 3).min(10) as f64;

    (weighted + training_bonus).round() as u8
}

/// One weighted component of the explanatory breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeritComponent {
    pub raw: f64,
    pub weighted: f64,
    pub weight: f64,
}

/// Static fairness assertion attached to every breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BiasCheck {
    pub passed: bool,
    pub details: String,
}

/// Explanatory merit view combining four weighted components with provenance
/// metadata for the committee UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeritBreakdown {
    pub total: f64,
    pub competency: MeritComponent,
    pub performance: MeritComponent,
    pub feedback: MeritComponent,
    pub learning: MeritComponent,
    pub data_sources: Vec<String>,
    pub calculated_at: DateTime<Utc>,
    pub bias_check: BiasCheck,
}

const BREAKDOWN_WEIGHT_COMPETENCY: f64 = 0.35;
const BREAKDOWN_WEIGHT_PERFORMANCE: f64 = 0.30;
const BREAKDOWN_WEIGHT_FEEDBACK: f64 = 0.20;
const BREAKDOWN_WEIGHT_LEARNING: f64 = 0.15;

/// Fixed placeholder for the 360-degree feedback component; the demo data
/// model has no live feedback source.
const FEEDBACK_PLACEHOLDER: f64 = 75.0;

/// Builds the four-component breakdown for a profile. The performance
/// component proxies the profile's current merit score, so this view does not
/// numerically reconcile with [`simple_merit_score`].
pub fn merit_breakdown(profile: &UserProfile, calculated_at: DateTime<Utc>) -> MeritBreakdown {
    let trainings_completed = profile.training_completed.len();

    let competency_raw = profile.competencies.average();
    let performance_raw = f64::from(profile.merit_score);
    let learning_raw = 72.0 + trainings_completed as f64 * 5.0;

    let competency = component(competency_raw, BREAKDOWN_WEIGHT_COMPETENCY);
    let performance = component(performance_raw, BREAKDOWN_WEIGHT_PERFORMANCE);
    let feedback = component(FEEDBACK_PLACEHOLDER, BREAKDOWN_WEIGHT_FEEDBACK);
    let learning = component(learning_raw, BREAKDOWN_WEIGHT_LEARNING);

    let total =
        round2(competency.weighted + performance.weighted + feedback.weighted + learning.weighted);

    let mut data_sources = vec![
        "5 competency axes assessed".to_string(),
        format!(
            "{} certifications verified",
            profile.certifications_earned.len()
        ),
        "8 project contributions".to_string(),
        "annual performance review".to_string(),
        "360° feedback (8 responses)".to_string(),
    ];
    if trainings_completed > 0 {
        data_sources.push(format!("{trainings_completed} training programs completed"));
    }

    MeritBreakdown {
        total,
        competency,
        performance,
        feedback,
        learning,
        data_sources,
        calculated_at,
        bias_check: BiasCheck {
            passed: true,
            details: "No demographic bias detected across gender, age, and regional factors"
                .to_string(),
        },
    }
}

fn component(raw: f64, weight: f64) -> MeritComponent {
    MeritComponent {
        raw: round2(raw),
        weighted: round2(raw * weight),
        weight,
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
