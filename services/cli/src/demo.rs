use crate::infra::render_breakdown;
use chrono::{Local, NaiveDate};
use clap::Args;
use session_score::config::AppConfig;
use session_score::error::AppError;
use session_score::providers::{InMemoryReadinessStore, InMemoryScoreSink, SessionHistory};
use session_score::scoring::{ReadinessCheckIn, SessionId, SessionInput, UserId};
use session_score::{ScoreRequest, SessionScoringService};
use std::sync::Arc;
use tracing::info;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Training date for the sample sessions (YYYY-MM-DD). Defaults to today.
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) date: Option<NaiveDate>,
    /// Skip the readiness check-in so the readiness pillar drops out.
    #[arg(long)]
    pub(crate) skip_check_in: bool,
    /// Print each breakdown as JSON instead of a text summary.
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_demo(args: DemoArgs, config: &AppConfig) -> Result<(), AppError> {
    let DemoArgs {
        date,
        skip_check_in,
        json,
    } = args;

    let date = date.unwrap_or_else(|| Local::now().date_naive());
    let athlete = UserId("demo-athlete".to_string());

    let history = Arc::new(SessionHistory::new(&config.history));
    for session in sample_history() {
        history.record(&athlete, session);
    }

    let readiness = Arc::new(InMemoryReadinessStore::default());
    if !skip_check_in {
        readiness.check_in(
            &athlete,
            date,
            ReadinessCheckIn {
                sleep: 4,
                stress: 4,
                soreness: 3,
                energy: 5,
            },
        );
    }

    let sink = Arc::new(InMemoryScoreSink::default());
    let service = SessionScoringService::new(history.clone(), readiness, sink.clone());

    println!(
        "Scoring sample sessions for {} on {date} ({} sessions in history)",
        athlete.0,
        history.len(&athlete)
    );

    for (index, session) in sample_sessions().into_iter().enumerate() {
        let request = ScoreRequest {
            user_id: athlete.clone(),
            session_id: SessionId(format!("demo-{}", index + 1)),
            date,
            session,
        };
        let breakdown = service.score_session(&request)?;

        if json {
            println!("{}", serde_json::to_string_pretty(&breakdown)?);
        } else {
            println!();
            render_breakdown(&request.session.class_type, &breakdown);
        }
    }

    info!(persisted = sink.len(), "demo scoring complete");
    Ok(())
}

fn sample_history() -> Vec<SessionInput> {
    let mut gi = SessionInput::new("gi", 3, 75);
    gi.rolls = 5;
    let mut no_gi = SessionInput::new("no-gi", 4, 60);
    no_gi.rolls = 6;
    let mut open_mat = SessionInput::new("open-mat", 3, 90);
    open_mat.rolls = 8;
    vec![gi, no_gi, open_mat, SessionInput::new("mobility", 2, 30)]
}

fn sample_sessions() -> Vec<SessionInput> {
    let mut gi = SessionInput::new("gi", 4, 90);
    gi.rolls = 7;
    gi.partners = vec!["sam".to_string(), "ana".to_string(), "lee".to_string()];
    gi.techniques = vec!["knee cut".to_string(), "armbar".to_string()];
    gi.submissions_for = 3;
    gi.submissions_against = 1;
    gi.attacks_attempted = 8;
    gi.attacks_successful = 4;
    gi.defenses_attempted = 5;
    gi.defenses_successful = 4;

    let mut competition = SessionInput::new("competition", 5, 45);
    competition.rolls = 3;
    competition.partners = vec!["opponent-1".to_string(), "opponent-2".to_string()];
    competition.submissions_for = 2;
    competition.submissions_against = 1;
    competition.attacks_attempted = 6;
    competition.attacks_successful = 3;
    competition.defenses_attempted = 4;
    competition.defenses_successful = 3;
    competition.whoop_strain = Some(17.5);
    competition.whoop_avg_hr = Some(172);
    competition.whoop_max_hr = Some(194);

    let mobility = SessionInput::new("mobility", 2, 30);

    vec![gi, competition, mobility]
}
