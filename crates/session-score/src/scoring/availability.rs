use std::collections::BTreeSet;

use super::domain::{ReadinessSnapshot, SessionInput};
use super::rubric::{Pillar, Rubric};

/// Which optional pillars have usable input for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Availability {
    pub readiness: bool,
    pub biometric: bool,
}

impl Availability {
    pub fn is_available(&self, pillar: Pillar) -> bool {
        match pillar {
            Pillar::ReadinessAlignment => self.readiness,
            Pillar::BiometricValidation => self.biometric,
            _ => true,
        }
    }

    /// The rubric's optional pillars lacking data.
    pub fn unavailable(&self, rubric: Rubric) -> BTreeSet<Pillar> {
        rubric
            .pillars()
            .iter()
            .filter(|spec| spec.optional && !self.is_available(spec.pillar))
            .map(|spec| spec.pillar)
            .collect()
    }
}

pub fn resolve(readiness: Option<&ReadinessSnapshot>, session: &SessionInput) -> Availability {
    Availability {
        readiness: readiness.is_some(),
        biometric: session.has_biometrics(),
    }
}
