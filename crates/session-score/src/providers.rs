//! Collaborators the scoring service is wired through, plus in-memory
//! adapters used by the CLI and tests.

use std::collections::{BTreeMap, HashMap, VecDeque};
use std::sync::Mutex;

use chrono::NaiveDate;

use crate::config::HistoryConfig;
use crate::scoring::{
    ReadinessCheckIn, ReadinessSnapshot, ScoreBreakdown, SessionId, SessionInput, UserAverages,
    UserId,
};

/// Source of an athlete's trailing averages.
pub trait AveragesProvider: Send + Sync {
    fn trailing_averages(&self, user_id: &UserId) -> Result<UserAverages, ProviderError>;
}

/// Source of same-day readiness check-ins.
pub trait ReadinessProvider: Send + Sync {
    fn for_date(
        &self,
        user_id: &UserId,
        date: NaiveDate,
    ) -> Result<Option<ReadinessSnapshot>, ProviderError>;
}

/// Destination for computed scores. Upserts by session; the last write wins.
pub trait ScoreSink: Send + Sync {
    fn persist(&self, session_id: &SessionId, breakdown: &ScoreBreakdown) -> Result<(), SinkError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("provider unavailable: {0}")]
    Unavailable(String),
}

#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    #[error("score store unavailable: {0}")]
    Unavailable(String),
}

/// Per-athlete session log serving rolling averages over the newest sessions.
#[derive(Debug)]
pub struct SessionHistory {
    window: usize,
    sessions: Mutex<HashMap<UserId, VecDeque<SessionInput>>>,
}

impl Default for SessionHistory {
    fn default() -> Self {
        Self::new(&HistoryConfig::default())
    }
}

impl SessionHistory {
    pub fn new(config: &HistoryConfig) -> Self {
        Self {
            window: config.averages_window.max(1),
            sessions: Mutex::new(HashMap::new()),
        }
    }

    /// Append a session, evicting the oldest once the window is full.
    pub fn record(&self, user_id: &UserId, session: SessionInput) {
        let mut guard = self.sessions.lock().expect("history mutex poisoned");
        let log = guard.entry(user_id.clone()).or_default();
        log.push_back(session);
        while log.len() > self.window {
            log.pop_front();
        }
    }

    pub fn len(&self, user_id: &UserId) -> usize {
        let guard = self.sessions.lock().expect("history mutex poisoned");
        guard.get(user_id).map_or(0, VecDeque::len)
    }
}

impl AveragesProvider for SessionHistory {
    fn trailing_averages(&self, user_id: &UserId) -> Result<UserAverages, ProviderError> {
        let guard = self
            .sessions
            .lock()
            .map_err(|_| ProviderError::Unavailable("history lock poisoned".to_string()))?;
        Ok(match guard.get(user_id) {
            Some(log) => UserAverages::from_history(log.iter()),
            None => UserAverages::default(),
        })
    }
}

/// Readiness check-ins keyed by athlete and calendar date.
#[derive(Debug, Default)]
pub struct InMemoryReadinessStore {
    check_ins: Mutex<HashMap<(UserId, NaiveDate), ReadinessCheckIn>>,
}

impl InMemoryReadinessStore {
    /// Store a check-in; a second check-in on the same day replaces the first.
    pub fn check_in(&self, user_id: &UserId, date: NaiveDate, check_in: ReadinessCheckIn) {
        let mut guard = self.check_ins.lock().expect("readiness mutex poisoned");
        guard.insert((user_id.clone(), date), check_in);
    }
}

impl ReadinessProvider for InMemoryReadinessStore {
    fn for_date(
        &self,
        user_id: &UserId,
        date: NaiveDate,
    ) -> Result<Option<ReadinessSnapshot>, ProviderError> {
        let guard = self
            .check_ins
            .lock()
            .map_err(|_| ProviderError::Unavailable("readiness lock poisoned".to_string()))?;
        Ok(guard
            .get(&(user_id.clone(), date))
            .map(ReadinessCheckIn::snapshot))
    }
}

/// Score store keeping the latest breakdown per session.
#[derive(Debug, Default)]
pub struct InMemoryScoreSink {
    scores: Mutex<BTreeMap<SessionId, ScoreBreakdown>>,
}

impl InMemoryScoreSink {
    pub fn get(&self, session_id: &SessionId) -> Option<ScoreBreakdown> {
        let guard = self.scores.lock().expect("score sink mutex poisoned");
        guard.get(session_id).cloned()
    }

    pub fn len(&self) -> usize {
        self.scores.lock().expect("score sink mutex poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ScoreSink for InMemoryScoreSink {
    fn persist(&self, session_id: &SessionId, breakdown: &ScoreBreakdown) -> Result<(), SinkError> {
        let mut guard = self
            .scores
            .lock()
            .map_err(|_| SinkError::Unavailable("score sink lock poisoned".to_string()))?;
        guard.insert(session_id.clone(), breakdown.clone());
        Ok(())
    }
}
