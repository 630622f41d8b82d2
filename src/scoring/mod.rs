// Public API - what other modules can use
pub use calculator::calculate_points;
pub use classifier::{classify_matches, MatchBreakdown};
pub use handlers::put_scoring_rules;
pub use models::ScoringRules;
pub use repository::{InMemoryScoringRuleRepository, ScoringRuleRepository};
pub use service::{EventRecalculationOutcome, ScoringService};

// Internal modules
pub mod calculator;
pub mod classifier;
mod handlers;
pub mod models;
pub mod repository;
pub mod service;
pub mod types;
