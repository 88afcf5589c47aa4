use super::common::*;
use crate::scoring::domain::{ReadinessSnapshot, SessionInput, UserAverages};
use crate::scoring::pillars::{
    alignment, recovery_pct, BiometricValidationCalculator, ConsistencyCalculator,
    EffectivenessCalculator, EffortCalculator, EngagementCalculator, PillarCalculator,
    PillarScore, ReadinessAlignmentCalculator, RecoveryZone,
};

#[test]
fn pillar_score_clamps_pct_before_scaling() {
    let over = PillarScore::from_pct(1.4, 25.0);
    assert_eq!(over.pct, 100);
    assert_eq!(over.score, 25.0);

    let under = PillarScore::from_pct(-0.3, 25.0);
    assert_eq!(under.pct, 0);
    assert_eq!(under.score, 0.0);
}

#[test]
fn pillar_score_rounds_exact_halves_up() {
    let half = PillarScore::from_pct(0.125, 10.0);
    assert_eq!(half.pct, 13);
    assert_eq!(half.score, 1.3);
}

#[test]
fn effort_matches_scenario_values() {
    let averages = averages();
    let result = EffortCalculator.compute(&gi_session(), &context(&averages, None), 29.4);
    assert_eq!(result.pct, 88);
    assert_eq!(result.score, 25.9);
    assert_eq!(result.max, 29.4);
}

#[test]
fn effort_ignores_non_positive_average_duration() {
    let averages = UserAverages {
        avg_duration: 0.0,
        ..averages()
    };
    let session = SessionInput::new("gi", 5, 60);
    let pct = EffortCalculator.pct(&session, &context(&averages, None));
    assert_close(pct, 0.6 + 0.4 / 1.5);
}

#[test]
fn effort_rises_strictly_with_intensity() {
    let averages = averages();
    let scores: Vec<f64> = (1..=5)
        .map(|intensity| {
            let mut session = gi_session();
            session.intensity = intensity;
            EffortCalculator
                .compute(&session, &context(&averages, None), 25.0)
                .score
        })
        .collect();
    assert!(
        scores.windows(2).all(|pair| pair[1] > pair[0]),
        "{scores:?}"
    );
}

#[test]
fn engagement_gives_attendance_credit_without_rolls() {
    let averages = averages();
    let session = SessionInput::new("gi", 3, 60);
    let pct = EngagementCalculator.pct(&session, &context(&averages, None));
    assert_close(pct, 0.4 * 0.2);

    let mut one_roll = session.clone();
    one_roll.rolls = 1;
    let floored = EngagementCalculator.pct(&one_roll, &context(&averages, None));
    assert_close(floored, 0.4 * 0.2);
}

#[test]
fn engagement_rises_strictly_with_rolls_up_to_cap() {
    let averages = averages();
    let scores: Vec<f64> = (2..=7)
        .map(|rolls| {
            let mut session = gi_session();
            session.rolls = rolls;
            EngagementCalculator
                .compute(&session, &context(&averages, None), 25.0)
                .score
        })
        .collect();
    assert!(
        scores.windows(2).all(|pair| pair[1] > pair[0]),
        "{scores:?}"
    );
}

#[test]
fn engagement_caps_partners_and_techniques() {
    let averages = averages();
    let mut session = gi_session();
    session.rolls = 20;
    session.partners = (0..9).map(|idx| format!("partner-{idx}")).collect();
    session.techniques = (0..7).map(|idx| format!("technique-{idx}")).collect();

    let result = EngagementCalculator.compute(&session, &context(&averages, None), 25.0);
    assert_eq!(result.pct, 100);
    assert_eq!(result.score, 25.0);
}

#[test]
fn effectiveness_without_any_exchanges_is_neutral() {
    let averages = averages();
    let session = SessionInput::new("gi", 3, 60);
    let result = EffectivenessCalculator.compute(&session, &context(&averages, None), 20.0);
    assert_eq!(result.pct, 50);
    assert_eq!(result.score, 10.0);
}

#[test]
fn effectiveness_blends_submission_attack_and_defense_rates() {
    let averages = averages();
    let mut session = SessionInput::new("gi", 3, 60);
    session.submissions_for = 2;
    session.submissions_against = 0;
    session.attacks_attempted = 4;
    session.attacks_successful = 1;
    session.defenses_attempted = 5;
    session.defenses_successful = 5;

    let pct = EffectivenessCalculator.pct(&session, &context(&averages, None));
    assert_close(pct, 0.4 * 1.0 + 0.3 * 0.25 + 0.3 * 1.0);
}

#[test]
fn recovery_zones_follow_composite_score() {
    let zone = |composite| {
        RecoveryZone::from_recovery_pct(recovery_pct(&ReadinessSnapshot::new(composite)))
    };
    assert_eq!(zone(20), RecoveryZone::Green);
    assert_eq!(zone(15), RecoveryZone::Green);
    assert_eq!(zone(14), RecoveryZone::Yellow);
    assert_eq!(zone(10), RecoveryZone::Yellow);
    assert_eq!(zone(9), RecoveryZone::Red);
    assert_eq!(zone(4), RecoveryZone::Red);
    assert_eq!(recovery_pct(&ReadinessSnapshot::new(2)), 0.0);
    assert_eq!(recovery_pct(&ReadinessSnapshot::new(30)), 1.0);
}

#[test]
fn alignment_rule_table() {
    assert_eq!(alignment(RecoveryZone::Green, 0.8), 1.0);
    assert_eq!(alignment(RecoveryZone::Green, 0.2), 0.5);
    assert_eq!(alignment(RecoveryZone::Green, 0.4), 0.6);
    assert_eq!(alignment(RecoveryZone::Red, 0.4), 0.9);
    assert_eq!(alignment(RecoveryZone::Red, 0.6), 0.2);
    assert_eq!(alignment(RecoveryZone::Red, 0.5), 0.6);
    assert_close(alignment(RecoveryZone::Yellow, 0.5), 0.8);
    assert_close(alignment(RecoveryZone::Yellow, 0.6), 0.76);
    assert_close(alignment(RecoveryZone::Yellow, 1.0), 0.6);
}

#[test]
fn readiness_alignment_rewards_rest_on_red_days() {
    let averages = averages();
    let red = ReadinessSnapshot::new(6);
    let mut session = SessionInput::new("gi", 2, 60);

    let rested = ReadinessAlignmentCalculator.pct(&session, &context(&averages, Some(&red)));
    session.intensity = 5;
    let pushed = ReadinessAlignmentCalculator.pct(&session, &context(&averages, Some(&red)));

    assert_eq!(rested, 0.9);
    assert_eq!(pushed, 0.2);
}

#[test]
fn biometric_validation_matches_expected_heart_rate() {
    let averages = averages();
    let result = BiometricValidationCalculator.compute(
        &competition_session(),
        &context(&averages, None),
        23.5,
    );
    assert_eq!(result.pct, 100);
    assert_eq!(result.score, 23.5);
}

#[test]
fn biometric_validation_uses_neutral_defaults() {
    let averages = averages();
    let mut session = SessionInput::new("gi", 4, 60);
    session.whoop_max_hr = Some(181);
    let neutral = BiometricValidationCalculator.pct(&session, &context(&averages, None));
    assert_eq!(neutral, 0.5);

    session.whoop_strain = Some(30.0);
    session.whoop_avg_hr = Some(230);
    let far_off = BiometricValidationCalculator.pct(&session, &context(&averages, None));
    assert_eq!(far_off, 0.5);
}

#[test]
fn consistency_duration_curve() {
    assert_eq!(ConsistencyCalculator::duration_pct(0), 0.0);
    assert_eq!(ConsistencyCalculator::duration_pct(15), 0.5);
    assert_eq!(ConsistencyCalculator::duration_pct(30), 1.0);
    assert_eq!(ConsistencyCalculator::duration_pct(90), 1.0);
    assert_close(ConsistencyCalculator::duration_pct(102), 0.9);
    assert_eq!(ConsistencyCalculator::duration_pct(240), 0.7);

    let averages = averages();
    let idle = SessionInput::new("yoga", 1, 0);
    let pct = ConsistencyCalculator.pct(&idle, &context(&averages, None));
    assert_close(pct, 0.3);
}
