use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier wrapper for platform users.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub String);

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier wrapper for training programs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TrainingId(pub String);

/// Role a user holds on the platform; committee members review candidates
/// rather than appearing on the merit board themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StaffRole {
    Staff,
    Supervisor,
    Committee,
}

impl StaffRole {
    pub const fn label(self) -> &'static str {
        match self {
            StaffRole::Staff => "asn",
            StaffRole::Supervisor => "supervisor",
            StaffRole::Committee => "committee",
        }
    }

    /// Staff and supervisors are eligible to appear on the merit board.
    pub const fn is_candidate(self) -> bool {
        matches!(self, StaffRole::Staff | StaffRole::Supervisor)
    }
}

/// The five tracked skill axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompetencyAxis {
    Technical,
    Leadership,
    Analytics,
    Communication,
    Digital,
}

impl CompetencyAxis {
    pub const ALL: [CompetencyAxis; 5] = [
        CompetencyAxis::Technical,
        CompetencyAxis::Leadership,
        CompetencyAxis::Analytics,
        CompetencyAxis::Communication,
        CompetencyAxis::Digital,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            CompetencyAxis::Technical => "Technical Skills",
            CompetencyAxis::Leadership => "Leadership",
            CompetencyAxis::Analytics => "Data Analytics",
            CompetencyAxis::Communication => "Communication",
            CompetencyAxis::Digital => "Digital Literacy",
        }
    }
}

/// Fixed-shape competency vector; every axis stays within [0, 100].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Competencies {
    pub technical: u8,
    pub leadership: u8,
    pub analytics: u8,
    pub communication: u8,
    pub digital: u8,
}

impl Competencies {
    pub const fn get(&self, axis: CompetencyAxis) -> u8 {
        match axis {
            CompetencyAxis::Technical => self.technical,
            CompetencyAxis::Leadership => self.leadership,
            CompetencyAxis::Analytics => self.analytics,
            CompetencyAxis::Communication => self.communication,
            CompetencyAxis::Digital => self.digital,
        }
    }

    /// Applies a positive delta to one axis, capped at 100.
    pub fn raise(&mut self, axis: CompetencyAxis, delta: u8) {
        let slot = match axis {
            CompetencyAxis::Technical => &mut self.technical,
            CompetencyAxis::Leadership => &mut self.leadership,
            CompetencyAxis::Analytics => &mut self.analytics,
            CompetencyAxis::Communication => &mut self.communication,
            CompetencyAxis::Digital => &mut self.digital,
        };
        *slot = slot.saturating_add(delta).min(100);
    }

    pub fn average(&self) -> f64 {
        f64::from(
            u32::from(self.technical)
                + u32::from(self.leadership)
                + u32::from(self.analytics)
                + u32::from(self.communication)
                + u32::from(self.digital),
        ) / 5.0
    }
}

/// The canonical subject record tracked by the profile store.
///
/// `merit_score` is derived: after any mutating operation it equals the
/// simple merit formula applied to the current competencies and training
/// count. `merit_change` is informational only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: UserId,
    pub name: String,
    pub role: StaffRole,
    pub competencies: Competencies,
    pub merit_score: u8,
    pub merit_change: i16,
    pub training_completed: Vec<TrainingId>,
    pub certifications_earned: Vec<String>,
    pub last_updated: DateTime<Utc>,
}

impl UserProfile {
    pub fn has_completed(&self, training_id: &str) -> bool {
        self.training_completed.iter().any(|t| t.0 == training_id)
    }
}

/// Candidate data record as reviewed on the merit board. Caller-supplied for
/// fraud checks; derivable from a live profile for committee listings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateRecord {
    pub id: UserId,
    pub name: String,
    pub merit_score: u8,
    pub competency_match: u8,
    pub performance: u8,
    pub feedback360: u8,
    pub learning_agility: u8,
    pub tenure_years: u8,
    pub training_completed: usize,
    pub certifications_earned: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supervisor_id: Option<UserId>,
}

impl CandidateRecord {
    /// Derives a merit-board snapshot from a live profile. Performance and
    /// feedback figures are demo proxies, matching the platform's synthetic
    /// data model.
    pub fn from_profile(profile: &UserProfile) -> Self {
        let avg = profile.competencies.average();
        let training_count = profile.training_completed.len();

        Self {
            id: profile.id.clone(),
            name: profile.name.clone(),
            merit_score: profile.merit_score,
            competency_match: avg.round() as u8,
            performance: (avg * 0.95).round() as u8,
            feedback360: 85,
            learning_agility: (75 + training_count * 5).min(u8::MAX as usize) as u8,
            tenure_years: 5,
            training_completed: training_count,
            certifications_earned: profile.certifications_earned.clone(),
            supervisor_id: None,
        }
    }
}

/// Verifiable credential reference minted when a training is first completed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CertificateRef {
    pub certificate_id: String,
    pub verification_url: String,
}

impl CertificateRef {
    pub fn mint(user_id: &UserId, training_id: &str, completed_at: DateTime<Utc>) -> Self {
        use chrono::Datelike;

        let user_fragment: String = user_id.0.chars().take(8).collect();
        let certificate_id = format!(
            "GBN-{}-{}-{}",
            training_id.to_uppercase(),
            user_fragment.to_uppercase(),
            completed_at.year()
        );
        let verification_url = format!("https://talenta.example.id/verify/{certificate_id}");

        Self {
            certificate_id,
            verification_url,
        }
    }
}
