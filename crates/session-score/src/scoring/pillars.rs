//! Pillar calculators.
//!
//! Every calculator produces a raw percentage in `[0, 1]` which
//! [`PillarScore::from_pct`] scales by the pillar's redistributed weight.
//! Missing inputs select a neutral branch rather than failing.

use serde::{Deserialize, Serialize};

use super::domain::{ReadinessSnapshot, SessionInput, UserAverages, DEFAULT_AVG_DURATION};
use super::numeric::{clamp01, ratio_or, round1};
use super::rubric::Pillar;

/// Neutral credit used whenever a ratio has no data behind it.
pub const NEUTRAL_PCT: f64 = 0.5;

const MAX_INTENSITY: f64 = 5.0;
const DURATION_RATIO_CAP: f64 = 1.5;
const ROLLS_RATIO_CAP: f64 = 1.5;
const ATTENDANCE_ROLLS_CREDIT: f64 = 0.2;
const FULL_PARTNER_COUNT: f64 = 4.0;
const FULL_TECHNIQUE_COUNT: f64 = 3.0;
const STRAIN_CEILING: f64 = 15.0;
const HR_BASELINE: f64 = 110.0;
const HR_PER_INTENSITY: f64 = 14.0;
const HR_TOLERANCE: f64 = 50.0;
const COMPOSITE_FLOOR: f64 = 4.0;
const COMPOSITE_SPAN: f64 = 16.0;
const CONSISTENCY_BASE: f64 = 0.3;

/// Contribution of a single pillar to the total.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PillarScore {
    pub score: f64,
    pub max: f64,
    pub pct: u8,
}

impl PillarScore {
    pub fn from_pct(pct: f64, max: f64) -> Self {
        let pct = clamp01(pct);
        let max = max.max(0.0);
        let score = round1(pct * max).min(max).max(0.0);
        Self {
            score,
            max,
            pct: (pct * 100.0).round() as u8,
        }
    }
}

/// Contextual signals shared by all calculators for one session.
#[derive(Debug, Clone, Copy)]
pub struct ScoringContext<'a> {
    pub averages: &'a UserAverages,
    pub readiness: Option<&'a ReadinessSnapshot>,
}

pub trait PillarCalculator: Send + Sync {
    /// Raw percentage in `[0, 1]` before weighting.
    fn pct(&self, session: &SessionInput, context: &ScoringContext<'_>) -> f64;

    fn compute(
        &self,
        session: &SessionInput,
        context: &ScoringContext<'_>,
        weight: f64,
    ) -> PillarScore {
        PillarScore::from_pct(self.pct(session, context), weight)
    }
}

impl Pillar {
    pub fn calculator(self) -> &'static dyn PillarCalculator {
        match self {
            Pillar::Effort => &EffortCalculator,
            Pillar::Engagement => &EngagementCalculator,
            Pillar::Effectiveness => &EffectivenessCalculator,
            Pillar::ReadinessAlignment => &ReadinessAlignmentCalculator,
            Pillar::BiometricValidation => &BiometricValidationCalculator,
            Pillar::Consistency => &ConsistencyCalculator,
        }
    }
}

fn intensity_norm(session: &SessionInput) -> f64 {
    f64::from(session.intensity) / MAX_INTENSITY
}

pub struct EffortCalculator;

impl PillarCalculator for EffortCalculator {
    fn pct(&self, session: &SessionInput, context: &ScoringContext<'_>) -> f64 {
        let avg_duration = if context.averages.avg_duration > 0.0 {
            context.averages.avg_duration
        } else {
            DEFAULT_AVG_DURATION
        };

        let intensity_pct = intensity_norm(session).min(1.0);
        let duration_ratio =
            (f64::from(session.duration_mins) / avg_duration).min(DURATION_RATIO_CAP);

        0.6 * intensity_pct + 0.4 * duration_ratio / DURATION_RATIO_CAP
    }
}

pub struct EngagementCalculator;

impl PillarCalculator for EngagementCalculator {
    fn pct(&self, session: &SessionInput, context: &ScoringContext<'_>) -> f64 {
        let rolls_ratio = if session.rolls > 0 {
            let ratio = (f64::from(session.rolls) / context.averages.avg_rolls.max(1.0))
                .min(ROLLS_RATIO_CAP);
            (ratio / ROLLS_RATIO_CAP).max(ATTENDANCE_ROLLS_CREDIT)
        } else {
            ATTENDANCE_ROLLS_CREDIT
        };
        let partner_pct = (session.partners.len() as f64 / FULL_PARTNER_COUNT).min(1.0);
        let tech_pct = (session.techniques.len() as f64 / FULL_TECHNIQUE_COUNT).min(1.0);

        0.4 * rolls_ratio + 0.3 * partner_pct + 0.3 * tech_pct
    }
}

pub struct EffectivenessCalculator;

impl PillarCalculator for EffectivenessCalculator {
    fn pct(&self, session: &SessionInput, _context: &ScoringContext<'_>) -> f64 {
        let total_subs = session
            .submissions_for
            .saturating_add(session.submissions_against);
        let sub_pct = if total_subs > 0 {
            f64::from(session.submissions_for) / f64::from(total_subs)
        } else if session.submissions_for > 0 {
            1.0
        } else {
            NEUTRAL_PCT
        };
        let attack_pct = ratio_or(
            session.attacks_successful,
            session.attacks_attempted,
            NEUTRAL_PCT,
        );
        let defense_pct = ratio_or(
            session.defenses_successful,
            session.defenses_attempted,
            NEUTRAL_PCT,
        );

        0.4 * sub_pct + 0.3 * attack_pct + 0.3 * defense_pct
    }
}

/// Recovery band derived from the composite readiness score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecoveryZone {
    Green,
    Yellow,
    Red,
}

impl RecoveryZone {
    pub fn from_recovery_pct(recovery_pct: f64) -> Self {
        if recovery_pct >= 0.67 {
            RecoveryZone::Green
        } else if recovery_pct >= 0.34 {
            RecoveryZone::Yellow
        } else {
            RecoveryZone::Red
        }
    }
}

pub fn recovery_pct(snapshot: &ReadinessSnapshot) -> f64 {
    clamp01((f64::from(snapshot.composite_score) - COMPOSITE_FLOOR) / COMPOSITE_SPAN)
}

/// How well the session's intensity matched the day's recovery.
pub fn alignment(zone: RecoveryZone, intensity_norm: f64) -> f64 {
    match zone {
        RecoveryZone::Green if intensity_norm >= 0.6 => 1.0,
        RecoveryZone::Green if intensity_norm < 0.4 => 0.5,
        RecoveryZone::Red if intensity_norm <= 0.4 => 0.9,
        RecoveryZone::Red if intensity_norm >= 0.6 => 0.2,
        RecoveryZone::Yellow => 0.6 + 0.2 * (1.0 - 2.0 * (intensity_norm - 0.5).abs()),
        _ => 0.6,
    }
}

pub struct ReadinessAlignmentCalculator;

impl PillarCalculator for ReadinessAlignmentCalculator {
    fn pct(&self, session: &SessionInput, context: &ScoringContext<'_>) -> f64 {
        match context.readiness {
            Some(snapshot) => {
                let zone = RecoveryZone::from_recovery_pct(recovery_pct(snapshot));
                alignment(zone, intensity_norm(session))
            }
            None => NEUTRAL_PCT,
        }
    }
}

pub struct BiometricValidationCalculator;

impl PillarCalculator for BiometricValidationCalculator {
    fn pct(&self, session: &SessionInput, _context: &ScoringContext<'_>) -> f64 {
        let strain_pct = match session.whoop_strain {
            Some(strain) if strain > 0.0 => (strain / STRAIN_CEILING).min(1.0),
            _ => NEUTRAL_PCT,
        };

        let expected_hr = HR_BASELINE + HR_PER_INTENSITY * f64::from(session.intensity);
        let hr_pct = match session.whoop_avg_hr {
            Some(avg_hr) if avg_hr > 0 => {
                (1.0 - (f64::from(avg_hr) - expected_hr).abs() / HR_TOLERANCE).max(0.0)
            }
            _ => NEUTRAL_PCT,
        };

        0.5 * strain_pct + 0.5 * hr_pct
    }
}

pub struct ConsistencyCalculator;

impl ConsistencyCalculator {
    /// Credit for session length; 30 to 90 minutes earns full marks.
    pub fn duration_pct(duration_mins: u32) -> f64 {
        let duration = f64::from(duration_mins);
        if duration < 30.0 {
            duration / 30.0
        } else if duration <= 90.0 {
            1.0
        } else {
            (1.0 - (duration - 90.0) / 120.0).max(0.7)
        }
    }
}

impl PillarCalculator for ConsistencyCalculator {
    fn pct(&self, session: &SessionInput, _context: &ScoringContext<'_>) -> f64 {
        CONSISTENCY_BASE + (1.0 - CONSISTENCY_BASE) * Self::duration_pct(session.duration_mins)
    }
}
