//! Career gap analysis against the fixed next-role requirement vector.

use serde::{Deserialize, Serialize};

use super::catalog::{self, GAP_AXIS_ORDER, TARGET_ROLE, TARGET_ROLE_REQUIREMENTS};
use super::domain::{CompetencyAxis, UserProfile};

/// Shortfall on one competency axis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CareerGap {
    pub competency: CompetencyAxis,
    pub current: u8,
    pub required: u8,
    pub gap: u8,
    pub critical: bool,
}

/// One ordered step of the recommended action plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionStep {
    pub step: usize,
    pub action: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    pub expected_gain: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

/// Read-only recommendation record; recomputed on every query, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerRecommendation {
    pub next_role: String,
    pub timeline: String,
    pub match_percentage: u8,
    pub gaps: Vec<CareerGap>,
    pub action_plan: Vec<ActionStep>,
    pub success_rate: u8,
    pub confidence: f64,
}

/// Gaps above this size are flagged critical.
const CRITICAL_GAP: u8 = 20;

pub fn recommend(profile: &UserProfile) -> CareerRecommendation {
    let mut gaps = Vec::new();
    for axis in GAP_AXIS_ORDER {
        let current = profile.competencies.get(axis);
        let required = TARGET_ROLE_REQUIREMENTS.get(axis);
        if required > current {
            let gap = required - current;
            gaps.push(CareerGap {
                competency: axis,
                current,
                required,
                gap,
                critical: gap > CRITICAL_GAP,
            });
        }
    }

    // Stable sort: ties keep the collection order above.
    gaps.sort_by(|a, b| b.gap.cmp(&a.gap));

    let match_percentage =
        (profile.competencies.average() / TARGET_ROLE_REQUIREMENTS.average() * 100.0).round() as u8;

    let action_plan = build_action_plan(profile, &gaps);

    let total_gap: u32 = gaps.iter().map(|g| u32::from(g.gap)).sum();
    let timeline = if total_gap > 100 {
        "24-30 months"
    } else if total_gap > 50 {
        "18-24 months"
    } else {
        "12-18 months"
    };

    let confidence =
        (0.75 + profile.training_completed.len() as f64 * 0.05).min(0.95);
    let success_rate = (70.0 + f64::from(match_percentage) * 0.2).round().min(95.0) as u8;

    CareerRecommendation {
        next_role: TARGET_ROLE.to_string(),
        timeline: timeline.to_string(),
        match_percentage,
        gaps,
        action_plan,
        success_rate,
        confidence,
    }
}

fn build_action_plan(profile: &UserProfile, gaps: &[CareerGap]) -> Vec<ActionStep> {
    let gap_on = |axis: CompetencyAxis| gaps.iter().any(|g| g.competency == axis);

    let mut plan = Vec::new();
    let mut step = 1;

    for (index, program) in catalog::TRAINING_PROGRAMS.iter().enumerate() {
        let (axis, delta) = program.deltas[0];
        if !gap_on(axis) || profile.has_completed(program.id) {
            continue;
        }

        let current = profile.competencies.get(axis);
        let projected = current.saturating_add(delta).min(100);
        let verb = if index == 0 { "Enroll in" } else { "Complete" };

        plan.push(ActionStep {
            step,
            action: format!("{verb} {} training", program.name),
            duration: Some(format!("{} weeks", program.duration_weeks)),
            expected_gain: format!(
                "+{delta} {} points (current: {current} → target: {projected})",
                axis.label()
            ),
            link: Some("/training".to_string()),
        });
        step += 1;
    }

    if gap_on(CompetencyAxis::Leadership) {
        plan.push(ActionStep {
            step,
            action: "Lead 2 cross-functional projects".to_string(),
            duration: None,
            expected_gain: "+15 Leadership points + merit boost".to_string(),
            link: None,
        });
        step += 1;
    }

    plan.push(ActionStep {
        step,
        action: "Connect with senior leadership mentor".to_string(),
        duration: None,
        expected_gain: "Guidance and professional networking".to_string(),
        link: Some("/mentorship".to_string()),
    });

    plan
}

/// Fallback used when no live profile is available; a deliberate
/// degrade-gracefully path rather than an error.
pub fn default_recommendation() -> CareerRecommendation {
    CareerRecommendation {
        next_role: TARGET_ROLE.to_string(),
        timeline: "18-24 months".to_string(),
        match_percentage: 40,
        gaps: vec![
            CareerGap {
                competency: CompetencyAxis::Leadership,
                current: 50,
                required: 85,
                gap: 35,
                critical: true,
            },
            CareerGap {
                competency: CompetencyAxis::Analytics,
                current: 82,
                required: 90,
                gap: 8,
                critical: false,
            },
        ],
        action_plan: vec![
            ActionStep {
                step: 1,
                action: "Enroll in Leadership Essentials training".to_string(),
                duration: Some("8 weeks".to_string()),
                expected_gain: "+25 Leadership points".to_string(),
                link: Some("/training".to_string()),
            },
            ActionStep {
                step: 2,
                action: "Lead 2 cross-functional projects".to_string(),
                duration: None,
                expected_gain: "+15 Leadership points + merit boost".to_string(),
                link: None,
            },
            ActionStep {
                step: 3,
                action: "Connect with senior leadership mentor".to_string(),
                duration: None,
                expected_gain: "Guidance and professional networking".to_string(),
                link: Some("/mentorship".to_string()),
            },
        ],
        success_rate: 78,
        confidence: 0.87,
    }
}
