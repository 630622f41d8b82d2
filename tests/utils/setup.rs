use std::sync::Arc;

use podium::event::repository::InMemoryEventRepository;
use podium::prediction::repository::InMemoryPredictionRepository;
use podium::scoring::repository::InMemoryScoringRuleRepository;
use podium::scoring::ScoringService;
use podium::season::models::SeasonModel;
use podium::season::repository::InMemorySeasonRepository;
use podium::stats::repository::{InMemoryJobRepository, InMemoryUserStatisticsRepository};
use podium::stats::StatsService;
use podium::user::models::UserModel;
use podium::user::repository::InMemoryUserRepository;

/// Fully wired in-memory deployment of the scoring and statistics engine
pub struct TestSetup {
    pub event_repository: Arc<InMemoryEventRepository>,
    pub prediction_repository: Arc<InMemoryPredictionRepository>,
    pub scoring_rule_repository: Arc<InMemoryScoringRuleRepository>,
    pub statistics_repository: Arc<InMemoryUserStatisticsRepository>,
    pub job_repository: Arc<InMemoryJobRepository>,
    pub scoring_service: ScoringService,
    pub stats_service: StatsService,
}

/// Builder for creating a TestSetup with seeded seasons and users
pub struct TestSetupBuilder {
    seasons: Vec<SeasonModel>,
    users: Vec<UserModel>,
}

impl TestSetupBuilder {
    pub fn new() -> Self {
        Self {
            seasons: Vec::new(),
            users: Vec::new(),
        }
    }

    pub fn with_season(mut self, season_id: &str, best_results_count: Option<u32>) -> Self {
        self.seasons.push(SeasonModel::new(
            season_id.to_string(),
            format!("Season {}", season_id),
            best_results_count,
        ));
        self
    }

    pub fn with_user(mut self, user_id: &str, username: &str) -> Self {
        self.users
            .push(UserModel::new(user_id.to_string(), username.to_string()));
        self
    }

    pub fn build(self) -> TestSetup {
        let event_repository = Arc::new(InMemoryEventRepository::new());
        let prediction_repository = Arc::new(InMemoryPredictionRepository::new());
        let scoring_rule_repository = Arc::new(InMemoryScoringRuleRepository::new());
        let season_repository = Arc::new(InMemorySeasonRepository::with_seasons(self.seasons));
        let user_repository = Arc::new(InMemoryUserRepository::with_users(self.users));
        let statistics_repository = Arc::new(InMemoryUserStatisticsRepository::new());
        let job_repository = Arc::new(InMemoryJobRepository::new());

        let scoring_service = ScoringService::new(
            event_repository.clone(),
            prediction_repository.clone(),
            scoring_rule_repository.clone(),
        );
        let stats_service = StatsService::new(
            season_repository.clone(),
            event_repository.clone(),
            prediction_repository.clone(),
            user_repository.clone(),
            statistics_repository.clone(),
            job_repository.clone(),
        );

        TestSetup {
            event_repository,
            prediction_repository,
            scoring_rule_repository,
            statistics_repository,
            job_repository,
            scoring_service,
            stats_service,
        }
    }
}

impl Default for TestSetupBuilder {
    fn default() -> Self {
        Self::new()
    }
}
