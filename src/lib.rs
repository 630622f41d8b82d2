// Library crate for the podium prediction game backend
// This file exposes the public API for integration tests

pub mod event;
pub mod prediction;
pub mod scoring;
pub mod season;
pub mod shared;
pub mod stats;
pub mod user;

// Re-export commonly used types for easier access in tests
pub use event::{EventModel, EventResultModel};
pub use prediction::PredictionModel;
pub use scoring::{
    calculate_points, classify_matches, EventRecalculationOutcome, MatchBreakdown, ScoringRules,
    ScoringService,
};
pub use shared::{AppError, AppState};
pub use stats::{JobStatus, RecalculationJob, StatsService, UserStatistics};
