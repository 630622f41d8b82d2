mod event;
mod prediction;
mod scoring;
mod season;
mod shared;
mod stats;
mod user;

use axum::{
    routing::{get, post, put},
    Router,
};
use event::repository::InMemoryEventRepository;
use prediction::repository::InMemoryPredictionRepository;
// use prediction::repository::PostgresPredictionRepository; // For production
use scoring::repository::InMemoryScoringRuleRepository;
use season::repository::InMemorySeasonRepository;
use shared::AppState;
use stats::repository::{InMemoryJobRepository, InMemoryUserStatisticsRepository};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use user::repository::InMemoryUserRepository;

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "podium=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting podium prediction server");

    // Create shared application state with dependency injection
    // Easy to switch between implementations:
    let event_repository = Arc::new(InMemoryEventRepository::new());
    let prediction_repository = Arc::new(InMemoryPredictionRepository::new());
    let scoring_rule_repository = Arc::new(InMemoryScoringRuleRepository::new());
    let season_repository = Arc::new(InMemorySeasonRepository::new());
    let user_repository = Arc::new(InMemoryUserRepository::new());
    let statistics_repository = Arc::new(InMemoryUserStatisticsRepository::new());
    let job_repository = Arc::new(InMemoryJobRepository::new());

    // For production with PostgreSQL:
    // let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    // let pool = sqlx::PgPool::connect(&database_url).await.expect("Failed to connect to database");
    // let prediction_repository = Arc::new(PostgresPredictionRepository::new(pool));

    let app_state = AppState::new(
        event_repository,
        prediction_repository,
        scoring_rule_repository,
        season_repository,
        user_repository,
        statistics_repository,
        job_repository,
    );

    // build our application
    let app = Router::new()
        .route("/events/:event_id/result", post(event::record_event_result))
        .route(
            "/events/:event_id/predictions",
            post(prediction::submit_prediction),
        )
        .route(
            "/seasons/:season_id/scoring-rules",
            put(scoring::put_scoring_rules),
        )
        .route(
            "/seasons/:season_id/recalculation",
            post(stats::start_season_recalculation),
        )
        .route(
            "/seasons/:season_id/statistics",
            get(stats::get_season_statistics),
        )
        .route("/recalculation-jobs/:job_id", get(stats::get_job_status))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state);

    // run our app with hyper, listening globally on port 3000
    let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await.unwrap();
    info!("Server running on http://localhost:3000");
    axum::serve(listener, app).await.unwrap();
}
