//! Session performance scoring.
//!
//! A logged session is scored against one of three rubrics. Optional pillars
//! without input data are dropped and the remaining weights are rescaled so
//! the pillar maxima always add up to 100.

mod aggregate;
pub mod availability;
pub mod domain;
mod numeric;
pub mod pillars;
pub mod rubric;
pub mod weights;

#[cfg(test)]
mod tests;

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

pub use aggregate::{aggregate, Aggregate, Tier};
pub use availability::Availability;
pub use domain::{
    ReadinessCheckIn, ReadinessSnapshot, SessionId, SessionInput, UserAverages, UserId,
};
pub use pillars::{PillarCalculator, PillarScore, RecoveryZone, ScoringContext};
pub use rubric::{Pillar, PillarSpec, Rubric, RubricSelection};
pub use weights::WeightTable;

/// Bumped whenever a pillar formula or weight table changes.
pub const SCORE_VERSION: u32 = 1;

/// Scored session with its per-pillar contributions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub version: u32,
    pub rubric: Rubric,
    pub total: f64,
    pub label: Tier,
    pub pillars: BTreeMap<Pillar, PillarScore>,
    pub data_completeness: f64,
}

impl ScoreBreakdown {
    pub fn pillar(&self, pillar: Pillar) -> Option<&PillarScore> {
        self.pillars.get(&pillar)
    }
}

/// Hook notified about notable scoring events. Observers never alter results.
pub trait ScoringObserver: Send + Sync {
    /// A class type matched no known rubric and was scored as supplementary.
    fn rubric_fallback(&self, class_type: &str);
}

/// Default observer: emits a debug event per fallback.
#[derive(Debug, Default)]
pub struct TracingObserver;

impl ScoringObserver for TracingObserver {
    fn rubric_fallback(&self, class_type: &str) {
        debug!(class_type, "unrecognized class type scored with supplementary rubric");
    }
}

/// Observer counting rubric fallbacks.
#[derive(Debug, Default)]
pub struct FallbackCounter {
    fallbacks: AtomicU64,
}

impl FallbackCounter {
    pub fn count(&self) -> u64 {
        self.fallbacks.load(Ordering::Relaxed)
    }
}

impl ScoringObserver for FallbackCounter {
    fn rubric_fallback(&self, _class_type: &str) {
        self.fallbacks.fetch_add(1, Ordering::Relaxed);
    }
}

/// Stateless engine applying the rubric tables to a session.
pub struct ScoringEngine {
    observer: Arc<dyn ScoringObserver>,
}

impl Default for ScoringEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ScoringEngine {
    pub fn new() -> Self {
        Self::with_observer(Arc::new(TracingObserver))
    }

    pub fn with_observer(observer: Arc<dyn ScoringObserver>) -> Self {
        Self { observer }
    }

    pub fn score(
        &self,
        session: &SessionInput,
        averages: &UserAverages,
        readiness: Option<&ReadinessSnapshot>,
    ) -> ScoreBreakdown {
        let selection = rubric::classify(&session.class_type);
        if !selection.recognized {
            self.observer.rubric_fallback(&session.class_type);
        }

        compute(selection.rubric, session, averages, readiness)
    }
}

/// Score a session without an observer.
pub fn score(
    session: &SessionInput,
    averages: &UserAverages,
    readiness: Option<&ReadinessSnapshot>,
) -> ScoreBreakdown {
    compute(
        rubric::select(&session.class_type),
        session,
        averages,
        readiness,
    )
}

fn compute(
    rubric: Rubric,
    session: &SessionInput,
    averages: &UserAverages,
    readiness: Option<&ReadinessSnapshot>,
) -> ScoreBreakdown {
    let availability = availability::resolve(readiness, session);
    let table = weights::redistribute(rubric.pillars(), &availability.unavailable(rubric));
    let context = ScoringContext {
        averages,
        readiness,
    };

    let pillars: BTreeMap<Pillar, PillarScore> = table
        .iter()
        .map(|(pillar, weight)| {
            let result = pillar.calculator().compute(session, &context, weight);
            (pillar, result)
        })
        .collect();

    let Aggregate {
        total,
        label,
        data_completeness,
    } = aggregate(rubric, &pillars);

    debug!(
        rubric = rubric.label(),
        total,
        label = label.label(),
        pillars = pillars.len(),
        "session scored"
    );

    ScoreBreakdown {
        version: SCORE_VERSION,
        rubric,
        total,
        label,
        pillars,
        data_completeness,
    }
}
