use crate::demo::{run_demo, DemoArgs};
use crate::infra::{read_json, render_breakdown};
use clap::{Args, Parser, Subcommand};
use session_score::config::AppConfig;
use session_score::error::AppError;
use session_score::scoring::{ReadinessSnapshot, ScoringEngine, SessionInput, UserAverages};
use session_score::telemetry;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "session-score",
    about = "Score logged training sessions from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Score a single session described in JSON
    Score(ScoreArgs),
    /// Score a few sample sessions through in-memory collaborators (default command)
    Demo(DemoArgs),
}

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Session log JSON file
    #[arg(long)]
    pub(crate) session: PathBuf,
    /// Trailing averages JSON file (defaults apply when omitted)
    #[arg(long)]
    pub(crate) averages: Option<PathBuf>,
    /// Same-day composite readiness score (4-20)
    #[arg(long, value_parser = clap::value_parser!(u8).range(4..=20))]
    pub(crate) readiness: Option<u8>,
    /// Pretty-print the breakdown
    #[arg(long)]
    pub(crate) pretty: bool,
    /// Print a text summary instead of JSON
    #[arg(long, conflicts_with = "pretty")]
    pub(crate) summary: bool,
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry, config.environment)?;
    info!(?config.environment, "session scoring cli started");

    let command = cli
        .command
        .unwrap_or_else(|| Command::Demo(DemoArgs::default()));

    match command {
        Command::Score(args) => run_score(args),
        Command::Demo(args) => run_demo(args, &config),
    }
}

fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let ScoreArgs {
        session,
        averages,
        readiness,
        pretty,
        summary,
    } = args;

    let session: SessionInput = read_json(&session)?;
    if !(1..=5).contains(&session.intensity) {
        return Err(AppError::InvalidInput(format!(
            "intensity must be between 1 and 5, got {}",
            session.intensity
        )));
    }

    let averages = match averages {
        Some(path) => read_json::<UserAverages>(&path)?,
        None => UserAverages::default(),
    };
    let readiness = readiness.map(ReadinessSnapshot::new);

    let breakdown = ScoringEngine::new().score(&session, &averages, readiness.as_ref());

    if summary {
        render_breakdown(&session.class_type, &breakdown);
    } else if pretty {
        println!("{}", serde_json::to_string_pretty(&breakdown)?);
    } else {
        println!("{}", serde_json::to_string(&breakdown)?);
    }

    Ok(())
}
