use std::sync::Arc;

use chrono::NaiveDate;
use session_score::config::HistoryConfig;
use session_score::providers::{InMemoryReadinessStore, InMemoryScoreSink, SessionHistory};
use session_score::scoring::{
    FallbackCounter, Pillar, ReadinessCheckIn, Rubric, ScoringEngine, SessionId, SessionInput,
    UserId,
};
use session_score::{ScoreRequest, SessionScoringService};

fn athlete() -> UserId {
    UserId("athlete-42".to_string())
}

fn training_day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 9, 24).expect("valid date")
}

fn sparring(duration_mins: u32, rolls: u32) -> SessionInput {
    let mut session = SessionInput::new("gi", 3, duration_mins);
    session.rolls = rolls;
    session
}

#[test]
fn history_feeds_trailing_averages_into_scores() {
    let history = Arc::new(SessionHistory::new(&HistoryConfig { averages_window: 3 }));
    let readiness = Arc::new(InMemoryReadinessStore::default());
    let sink = Arc::new(InMemoryScoreSink::default());
    let service = SessionScoringService::new(history.clone(), readiness, sink.clone());

    let request = ScoreRequest {
        user_id: athlete(),
        session_id: SessionId("sess-100".to_string()),
        date: training_day(),
        session: sparring(60, 6),
    };

    let fresh = service.score_session(&request).expect("scores with defaults");

    // Long sessions with lots of rounds raise the bar for the same session.
    for _ in 0..3 {
        history.record(&athlete(), sparring(120, 12));
    }
    let seasoned = service.score_session(&request).expect("scores with history");

    let effort = |breakdown: &session_score::ScoreBreakdown| {
        breakdown.pillar(Pillar::Effort).expect("effort").score
    };
    let engagement = |breakdown: &session_score::ScoreBreakdown| {
        breakdown.pillar(Pillar::Engagement).expect("engagement").score
    };
    assert!(effort(&seasoned) < effort(&fresh));
    assert!(engagement(&seasoned) < engagement(&fresh));
    assert_eq!(sink.get(&request.session_id), Some(seasoned));
}

#[test]
fn check_in_enables_readiness_alignment() {
    let history = Arc::new(SessionHistory::default());
    let readiness = Arc::new(InMemoryReadinessStore::default());
    let sink = Arc::new(InMemoryScoreSink::default());
    let service = SessionScoringService::new(history, readiness.clone(), sink);

    readiness.check_in(
        &athlete(),
        training_day(),
        ReadinessCheckIn {
            sleep: 1,
            stress: 1,
            soreness: 2,
            energy: 1,
        },
    );

    let mut session = SessionInput::new("open-mat", 5, 60);
    session.rolls = 8;
    let request = ScoreRequest {
        user_id: athlete(),
        session_id: SessionId("sess-101".to_string()),
        date: training_day(),
        session,
    };

    let breakdown = service.score_session(&request).expect("scores");
    let alignment = breakdown
        .pillar(Pillar::ReadinessAlignment)
        .expect("readiness alignment scored");
    assert_eq!(alignment.pct, 20, "hard session on a red day");
}

#[test]
fn service_engine_observer_sees_fallbacks() {
    let counter = Arc::new(FallbackCounter::default());
    let engine = Arc::new(ScoringEngine::with_observer(counter.clone()));
    let service = SessionScoringService::with_engine(
        Arc::new(SessionHistory::default()),
        Arc::new(InMemoryReadinessStore::default()),
        Arc::new(InMemoryScoreSink::default()),
        engine,
    );

    let request = ScoreRequest {
        user_id: athlete(),
        session_id: SessionId("sess-102".to_string()),
        date: training_day(),
        session: SessionInput::new("kettlebells", 3, 45),
    };

    let breakdown = service.score_session(&request).expect("scores");
    assert_eq!(breakdown.rubric, Rubric::Supplementary);
    assert_eq!(counter.count(), 1);
}
