use std::env;
use std::fmt;

/// Trailing session count used for rolling averages when not configured.
pub const DEFAULT_AVERAGES_WINDOW: usize = 30;

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the scoring binaries.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub history: HistoryConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("SCORE_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let averages_window = match env::var("SCORE_AVERAGES_WINDOW") {
            Ok(raw) => match raw.trim().parse::<usize>() {
                Ok(window) if window > 0 => window,
                _ => return Err(ConfigError::InvalidAveragesWindow { value: raw }),
            },
            Err(_) => DEFAULT_AVERAGES_WINDOW,
        };

        let log_level = env::var("SCORE_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            history: HistoryConfig { averages_window },
            telemetry: TelemetryConfig { log_level },
        })
    }
}

/// Rolling-average settings for the session history adapter.
#[derive(Debug, Clone)]
pub struct HistoryConfig {
    pub averages_window: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            averages_window: DEFAULT_AVERAGES_WINDOW,
        }
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidAveragesWindow { value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidAveragesWindow { value } => write!(
                f,
                "SCORE_AVERAGES_WINDOW must be a positive integer, got '{}'",
                value
            ),
        }
    }
}

impl std::error::Error for ConfigError {}
