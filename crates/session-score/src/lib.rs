//! Training session performance scoring.
//!
//! [`scoring`] holds the pure engine; [`providers`] and [`service`] wire it to
//! the collaborators that supply averages, readiness, and score storage.

pub mod config;
pub mod error;
pub mod providers;
pub mod scoring;
pub mod service;
pub mod telemetry;

pub use scoring::{score, ScoreBreakdown, ScoringEngine};
pub use service::{ScoreRequest, ScoringServiceError, SessionScoringService};
