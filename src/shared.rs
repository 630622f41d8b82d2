use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;

use crate::event::repository::EventRepository;
use crate::prediction::repository::PredictionRepository;
use crate::scoring::repository::ScoringRuleRepository;
use crate::season::repository::SeasonRepository;
use crate::stats::repository::{JobRepository, UserStatisticsRepository};
use crate::user::repository::UserRepository;

/// Shared application state containing all dependencies
#[derive(Clone)]
pub struct AppState {
    pub event_repository: Arc<dyn EventRepository + Send + Sync>,
    pub prediction_repository: Arc<dyn PredictionRepository + Send + Sync>,
    pub scoring_rule_repository: Arc<dyn ScoringRuleRepository + Send + Sync>,
    pub season_repository: Arc<dyn SeasonRepository + Send + Sync>,
    pub user_repository: Arc<dyn UserRepository + Send + Sync>,
    pub statistics_repository: Arc<dyn UserStatisticsRepository + Send + Sync>,
    pub job_repository: Arc<dyn JobRepository + Send + Sync>,
}

impl AppState {
    pub fn new(
        event_repository: Arc<dyn EventRepository + Send + Sync>,
        prediction_repository: Arc<dyn PredictionRepository + Send + Sync>,
        scoring_rule_repository: Arc<dyn ScoringRuleRepository + Send + Sync>,
        season_repository: Arc<dyn SeasonRepository + Send + Sync>,
        user_repository: Arc<dyn UserRepository + Send + Sync>,
        statistics_repository: Arc<dyn UserStatisticsRepository + Send + Sync>,
        job_repository: Arc<dyn JobRepository + Send + Sync>,
    ) -> Self {
        Self {
            event_repository,
            prediction_repository,
            scoring_rule_repository,
            season_repository,
            user_repository,
            statistics_repository,
            job_repository,
        }
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Internal server error")]
    Internal,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::DatabaseError(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Database error: {}", msg),
            ),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            ),
        };

        let body = Json(json!({
            "error": error_message
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
pub mod test_utils {
    use super::*;
    use crate::event::repository::InMemoryEventRepository;
    use crate::prediction::repository::InMemoryPredictionRepository;
    use crate::scoring::repository::InMemoryScoringRuleRepository;
    use crate::season::repository::InMemorySeasonRepository;
    use crate::stats::repository::{InMemoryJobRepository, InMemoryUserStatisticsRepository};
    use crate::user::repository::InMemoryUserRepository;

    /// Builder for creating AppState with overrides for testing
    pub struct AppStateBuilder {
        event_repository: Option<Arc<dyn EventRepository + Send + Sync>>,
        prediction_repository: Option<Arc<dyn PredictionRepository + Send + Sync>>,
        scoring_rule_repository: Option<Arc<dyn ScoringRuleRepository + Send + Sync>>,
        season_repository: Option<Arc<dyn SeasonRepository + Send + Sync>>,
        user_repository: Option<Arc<dyn UserRepository + Send + Sync>>,
        statistics_repository: Option<Arc<dyn UserStatisticsRepository + Send + Sync>>,
        job_repository: Option<Arc<dyn JobRepository + Send + Sync>>,
    }

    impl AppStateBuilder {
        pub fn new() -> Self {
            Self {
                event_repository: None,
                prediction_repository: None,
                scoring_rule_repository: None,
                season_repository: None,
                user_repository: None,
                statistics_repository: None,
                job_repository: None,
            }
        }

        pub fn with_event_repository(
            mut self,
            repo: Arc<dyn EventRepository + Send + Sync>,
        ) -> Self {
            self.event_repository = Some(repo);
            self
        }

        pub fn with_prediction_repository(
            mut self,
            repo: Arc<dyn PredictionRepository + Send + Sync>,
        ) -> Self {
            self.prediction_repository = Some(repo);
            self
        }

        pub fn with_scoring_rule_repository(
            mut self,
            repo: Arc<dyn ScoringRuleRepository + Send + Sync>,
        ) -> Self {
            self.scoring_rule_repository = Some(repo);
            self
        }

        pub fn with_season_repository(
            mut self,
            repo: Arc<dyn SeasonRepository + Send + Sync>,
        ) -> Self {
            self.season_repository = Some(repo);
            self
        }

        pub fn with_user_repository(mut self, repo: Arc<dyn UserRepository + Send + Sync>) -> Self {
            self.user_repository = Some(repo);
            self
        }

        pub fn with_statistics_repository(
            mut self,
            repo: Arc<dyn UserStatisticsRepository + Send + Sync>,
        ) -> Self {
            self.statistics_repository = Some(repo);
            self
        }

        pub fn with_job_repository(mut self, repo: Arc<dyn JobRepository + Send + Sync>) -> Self {
            self.job_repository = Some(repo);
            self
        }

        pub fn build(self) -> AppState {
            AppState {
                event_repository: self
                    .event_repository
                    .unwrap_or_else(|| Arc::new(InMemoryEventRepository::new())),
                prediction_repository: self
                    .prediction_repository
                    .unwrap_or_else(|| Arc::new(InMemoryPredictionRepository::new())),
                scoring_rule_repository: self
                    .scoring_rule_repository
                    .unwrap_or_else(|| Arc::new(InMemoryScoringRuleRepository::new())),
                season_repository: self
                    .season_repository
                    .unwrap_or_else(|| Arc::new(InMemorySeasonRepository::new())),
                user_repository: self
                    .user_repository
                    .unwrap_or_else(|| Arc::new(InMemoryUserRepository::new())),
                statistics_repository: self
                    .statistics_repository
                    .unwrap_or_else(|| Arc::new(InMemoryUserStatisticsRepository::new())),
                job_repository: self
                    .job_repository
                    .unwrap_or_else(|| Arc::new(InMemoryJobRepository::new())),
            }
        }
    }

    impl Default for AppStateBuilder {
        fn default() -> Self {
            Self::new()
        }
    }
}
