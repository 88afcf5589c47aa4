use std::sync::Arc;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::providers::{AveragesProvider, ProviderError, ReadinessProvider, ScoreSink, SinkError};
use crate::scoring::{ScoreBreakdown, ScoringEngine, SessionId, SessionInput, UserId};

/// A logged session ready to be scored for an athlete.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreRequest {
    pub user_id: UserId,
    pub session_id: SessionId,
    pub date: NaiveDate,
    pub session: SessionInput,
}

/// Service composing the collaborators with the scoring engine.
pub struct SessionScoringService<A, R, S> {
    averages: Arc<A>,
    readiness: Arc<R>,
    sink: Arc<S>,
    engine: Arc<ScoringEngine>,
}

impl<A, R, S> SessionScoringService<A, R, S>
where
    A: AveragesProvider + 'static,
    R: ReadinessProvider + 'static,
    S: ScoreSink + 'static,
{
    pub fn new(averages: Arc<A>, readiness: Arc<R>, sink: Arc<S>) -> Self {
        Self::with_engine(averages, readiness, sink, Arc::new(ScoringEngine::new()))
    }

    pub fn with_engine(
        averages: Arc<A>,
        readiness: Arc<R>,
        sink: Arc<S>,
        engine: Arc<ScoringEngine>,
    ) -> Self {
        Self {
            averages,
            readiness,
            sink,
            engine,
        }
    }

    /// Score a session against the athlete's context and persist the result.
    pub fn score_session(
        &self,
        request: &ScoreRequest,
    ) -> Result<ScoreBreakdown, ScoringServiceError> {
        let averages = self.averages.trailing_averages(&request.user_id)?;
        let readiness = self.readiness.for_date(&request.user_id, request.date)?;

        let breakdown = self
            .engine
            .score(&request.session, &averages, readiness.as_ref());

        self.sink.persist(&request.session_id, &breakdown)?;
        info!(
            session_id = %request.session_id.0,
            rubric = breakdown.rubric.label(),
            total = breakdown.total,
            label = breakdown.label.label(),
            "session score persisted"
        );

        Ok(breakdown)
    }
}

/// Error raised by the scoring service.
#[derive(Debug, thiserror::Error)]
pub enum ScoringServiceError {
    #[error(transparent)]
    Provider(#[from] ProviderError),
    #[error(transparent)]
    Sink(#[from] SinkError),
}
