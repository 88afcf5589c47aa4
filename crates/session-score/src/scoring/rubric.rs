use serde::{Deserialize, Serialize};

/// Class types scored with the sparring rubric.
pub const SPARRING_CLASS_TYPES: &[&str] =
    &["gi", "no-gi", "open-mat", "private", "wrestling", "judo"];

/// Class types that are expected to land on the supplementary rubric.
pub const SUPPLEMENTARY_CLASS_TYPES: &[&str] = &[
    "s&c",
    "cardio",
    "mobility",
    "yoga",
    "strength",
    "conditioning",
    "recovery",
];

pub const COMPETITION_CLASS_TYPE: &str = "competition";

/// One scored dimension of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pillar {
    Effort,
    Engagement,
    Effectiveness,
    ReadinessAlignment,
    BiometricValidation,
    Consistency,
}

impl Pillar {
    pub fn label(&self) -> &'static str {
        match self {
            Pillar::Effort => "effort",
            Pillar::Engagement => "engagement",
            Pillar::Effectiveness => "effectiveness",
            Pillar::ReadinessAlignment => "readiness_alignment",
            Pillar::BiometricValidation => "biometric_validation",
            Pillar::Consistency => "consistency",
        }
    }
}

/// Entry in a rubric's fixed pillar table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PillarSpec {
    pub pillar: Pillar,
    pub base_weight: f64,
    pub optional: bool,
}

const fn required(pillar: Pillar, base_weight: f64) -> PillarSpec {
    PillarSpec {
        pillar,
        base_weight,
        optional: false,
    }
}

const fn optional(pillar: Pillar, base_weight: f64) -> PillarSpec {
    PillarSpec {
        pillar,
        base_weight,
        optional: true,
    }
}

const BJJ_PILLARS: [PillarSpec; 5] = [
    required(Pillar::Effort, 25.0),
    required(Pillar::Engagement, 25.0),
    required(Pillar::Effectiveness, 20.0),
    optional(Pillar::ReadinessAlignment, 15.0),
    optional(Pillar::BiometricValidation, 15.0),
];

const COMPETITION_PILLARS: [PillarSpec; 5] = [
    required(Pillar::Effort, 15.0),
    required(Pillar::Engagement, 15.0),
    required(Pillar::Effectiveness, 35.0),
    optional(Pillar::ReadinessAlignment, 15.0),
    optional(Pillar::BiometricValidation, 20.0),
];

const SUPPLEMENTARY_PILLARS: [PillarSpec; 4] = [
    required(Pillar::Effort, 40.0),
    optional(Pillar::ReadinessAlignment, 15.0),
    optional(Pillar::BiometricValidation, 15.0),
    required(Pillar::Consistency, 30.0),
];

/// Named pillar-weight configuration selected by class type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rubric {
    Bjj,
    Competition,
    Supplementary,
}

impl Rubric {
    /// Pillar table in scoring order; base weights sum to 100.
    pub fn pillars(&self) -> &'static [PillarSpec] {
        match self {
            Rubric::Bjj => &BJJ_PILLARS,
            Rubric::Competition => &COMPETITION_PILLARS,
            Rubric::Supplementary => &SUPPLEMENTARY_PILLARS,
        }
    }

    pub fn pillar_count(&self) -> usize {
        self.pillars().len()
    }

    pub fn label(&self) -> &'static str {
        match self {
            Rubric::Bjj => "bjj",
            Rubric::Competition => "competition",
            Rubric::Supplementary => "supplementary",
        }
    }
}

/// Rubric choice plus whether the class type was one we know about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RubricSelection {
    pub rubric: Rubric,
    pub recognized: bool,
}

/// Map a class type to its rubric. Unknown class types score as supplementary.
pub fn select(class_type: &str) -> Rubric {
    classify(class_type).rubric
}

pub fn classify(class_type: &str) -> RubricSelection {
    if class_type == COMPETITION_CLASS_TYPE {
        return RubricSelection {
            rubric: Rubric::Competition,
            recognized: true,
        };
    }

    if SPARRING_CLASS_TYPES.contains(&class_type) {
        return RubricSelection {
            rubric: Rubric::Bjj,
            recognized: true,
        };
    }

    RubricSelection {
        rubric: Rubric::Supplementary,
        recognized: SUPPLEMENTARY_CLASS_TYPES.contains(&class_type),
    }
}
