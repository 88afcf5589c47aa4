use crate::scoring::domain::{ReadinessSnapshot, SessionInput, UserAverages};
use crate::scoring::pillars::ScoringContext;

pub(super) fn averages() -> UserAverages {
    UserAverages {
        avg_duration: 60.0,
        avg_intensity: 3.0,
        avg_rolls: 5.0,
    }
}

pub(super) fn context<'a>(
    averages: &'a UserAverages,
    readiness: Option<&'a ReadinessSnapshot>,
) -> ScoringContext<'a> {
    ScoringContext {
        averages,
        readiness,
    }
}

/// Hard gi class with good sparring rounds and no wearable data.
pub(super) fn gi_session() -> SessionInput {
    SessionInput {
        class_type: "gi".to_string(),
        intensity: 4,
        duration_mins: 90,
        rolls: 6,
        partners: vec!["ana".to_string(), "ben".to_string(), "caio".to_string()],
        techniques: vec![
            "knee cut".to_string(),
            "armbar".to_string(),
            "scissor sweep".to_string(),
        ],
        submissions_for: 3,
        submissions_against: 1,
        attacks_attempted: 0,
        attacks_successful: 0,
        defenses_attempted: 0,
        defenses_successful: 0,
        whoop_strain: None,
        whoop_avg_hr: None,
        whoop_max_hr: None,
    }
}

pub(super) fn mobility_session() -> SessionInput {
    SessionInput::new("mobility", 2, 20)
}

/// Competition day with strap data and matching heart rate.
pub(super) fn competition_session() -> SessionInput {
    let mut session = SessionInput::new("competition", 5, 30);
    session.rolls = 4;
    session.partners = vec!["opponent-1".to_string(), "opponent-2".to_string()];
    session.submissions_for = 1;
    session.submissions_against = 1;
    session.attacks_attempted = 6;
    session.attacks_successful = 3;
    session.defenses_attempted = 4;
    session.defenses_successful = 3;
    session.whoop_strain = Some(18.2);
    session.whoop_avg_hr = Some(180);
    session.whoop_max_hr = Some(197);
    session
}

pub(super) fn green_readiness() -> ReadinessSnapshot {
    ReadinessSnapshot::new(18)
}

pub(super) fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
