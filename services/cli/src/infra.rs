use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use session_score::error::AppError;
use session_score::scoring::ScoreBreakdown;
use std::fs;
use std::path::Path;

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

pub(crate) fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, AppError> {
    let raw = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

pub(crate) fn render_breakdown(title: &str, breakdown: &ScoreBreakdown) {
    println!(
        "{title}: {:.1} ({}) using the {} rubric, {:.0}% of pillars scored",
        breakdown.total,
        breakdown.label,
        breakdown.rubric.label(),
        breakdown.data_completeness * 100.0
    );
    for (pillar, result) in &breakdown.pillars {
        println!(
            "- {}: {:.1}/{:.1} ({}%)",
            pillar.label(),
            result.score,
            result.max,
            result.pct
        );
    }
}
