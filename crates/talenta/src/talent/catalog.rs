//! Static configuration tables: seed users, the training program catalog, and
//! the target-role requirement vector. Loaded once at store initialization and
//! read-only afterwards.

use super::domain::{Competencies, CompetencyAxis, StaffRole};

/// Source record for seeding a user profile. Missing fields fall back to the
/// documented defaults in [`super::store::ProfileStore::initialize`].
#[derive(Debug, Clone, Copy)]
pub struct SeedUser {
    pub id: &'static str,
    pub name: &'static str,
    pub role: StaffRole,
    pub competencies: Option<Competencies>,
    pub merit_score: Option<u8>,
}

pub const SEED_USERS: &[SeedUser] = &[
    SeedUser {
        id: "user-001",
        name: "Budi Santoso",
        role: StaffRole::Staff,
        competencies: Some(Competencies {
            technical: 70,
            leadership: 50,
            analytics: 70,
            communication: 70,
            digital: 60,
        }),
        merit_score: None,
    },
    SeedUser {
        id: "user-002",
        name: "Sari Wulandari",
        role: StaffRole::Staff,
        competencies: Some(Competencies {
            technical: 66,
            leadership: 72,
            analytics: 81,
            communication: 74,
            digital: 68,
        }),
        merit_score: Some(74),
    },
    SeedUser {
        id: "user-003",
        name: "Agus Pratama",
        role: StaffRole::Supervisor,
        competencies: Some(Competencies {
            technical: 78,
            leadership: 80,
            analytics: 74,
            communication: 82,
            digital: 66,
        }),
        merit_score: Some(82),
    },
    SeedUser {
        id: "user-004",
        name: "Dewi Lestari",
        role: StaffRole::Committee,
        competencies: None,
        merit_score: None,
    },
];

pub fn seed_user(id: &str) -> Option<&'static SeedUser> {
    SEED_USERS.iter().find(|user| user.id == id)
}

/// A training program and the competency deltas awarded on completion. The
/// first delta is the program's primary axis, used when building career action
/// plans.
#[derive(Debug, Clone, Copy)]
pub struct TrainingProgram {
    pub id: &'static str,
    pub name: &'static str,
    pub duration_weeks: u8,
    pub deltas: &'static [(CompetencyAxis, u8)],
}

pub const TRAINING_PROGRAMS: &[TrainingProgram] = &[
    TrainingProgram {
        id: "train-001",
        name: "Leadership Essentials",
        duration_weeks: 8,
        deltas: &[
            (CompetencyAxis::Leadership, 25),
            (CompetencyAxis::Communication, 15),
            (CompetencyAxis::Technical, 10),
        ],
    },
    TrainingProgram {
        id: "train-002",
        name: "Data Analytics",
        duration_weeks: 6,
        deltas: &[
            (CompetencyAxis::Analytics, 30),
            (CompetencyAxis::Technical, 20),
            (CompetencyAxis::Digital, 15),
        ],
    },
    TrainingProgram {
        id: "train-003",
        name: "Digital Transformation",
        duration_weeks: 4,
        deltas: &[
            (CompetencyAxis::Digital, 35),
            (CompetencyAxis::Technical, 20),
            (CompetencyAxis::Leadership, 10),
        ],
    },
];

pub fn training_program(id: &str) -> Option<&'static TrainingProgram> {
    TRAINING_PROGRAMS.iter().find(|program| program.id == id)
}

/// The single hardcoded next role evaluated by the career gap analyzer.
pub const TARGET_ROLE: &str = "Senior Analyst";

pub const TARGET_ROLE_REQUIREMENTS: Competencies = Competencies {
    technical: 80,
    leadership: 85,
    analytics: 90,
    communication: 75,
    digital: 75,
};

/// Axis order used when collecting career gaps; ties in gap size keep this
/// order under a stable sort.
pub const GAP_AXIS_ORDER: [CompetencyAxis; 5] = [
    CompetencyAxis::Leadership,
    CompetencyAxis::Analytics,
    CompetencyAxis::Technical,
    CompetencyAxis::Communication,
    CompetencyAxis::Digital,
];
